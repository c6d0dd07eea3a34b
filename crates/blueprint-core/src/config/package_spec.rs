//! npm-style package specifiers (`name@range`)

use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Version part of a specifier
#[derive(Debug, Clone, PartialEq)]
pub enum PackageVersion {
    /// No version given, the package manager picks the latest
    Latest,
    /// An exact version, e.g. `2.0.7`
    Exact(Version),
    /// A range, e.g. `^1.4.0`
    Range(VersionReq),
    /// A dist-tag, e.g. `beta`
    Tag(String),
    /// An npm range semver can't express (`||` sets, hyphen ranges, space
    /// separated comparators); left to the package manager
    Npm(String),
}

/// A package to hand to the package manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageSpec {
    name: String,
    version: PackageVersion,
    /// Version text as written; npm and semver disagree on bare versions,
    /// so the original text is what gets passed on.
    raw_version: Option<String>,
}

impl PackageSpec {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &PackageVersion {
        &self.version
    }

    /// Whether the specifier pins one exact version
    pub fn is_pinned(&self) -> bool {
        matches!(self.version, PackageVersion::Exact(_))
    }
}

fn parse_version(text: &str) -> Result<PackageVersion, String> {
    if text.contains('@') || text.chars().any(char::is_control) {
        return Err(format!("invalid version '{}'", text));
    }

    // npm reads a bare version as exact, semver's VersionReq would read it as caret
    let cleaned = text.strip_prefix('=').unwrap_or(text);
    if let Ok(version) = Version::parse(cleaned) {
        return Ok(PackageVersion::Exact(version));
    }
    if let Ok(req) = VersionReq::parse(text) {
        return Ok(PackageVersion::Range(req));
    }

    let is_tag = text.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if is_tag {
        Ok(PackageVersion::Tag(text.to_string()))
    } else {
        Ok(PackageVersion::Npm(text.to_string()))
    }
}

impl FromStr for PackageSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Skip the leading '@' of scoped packages when looking for the separator
        let split_at = s
            .char_indices()
            .skip(1)
            .filter(|(_, c)| *c == '@')
            .map(|(i, _)| i)
            .last();

        let (name, raw_version) = match split_at {
            Some(i) => (&s[..i], Some(&s[i + 1..])),
            None => (s, None),
        };

        if name.is_empty()
            || name == "@"
            || name.chars().skip(1).any(|c| c == '@')
            || name.contains(char::is_whitespace)
        {
            return Err(format!("invalid package name in '{}'", s));
        }
        if name.starts_with('@') && !name.contains('/') {
            return Err(format!("scoped package '{}' is missing a '/'", name));
        }

        let version = match raw_version {
            None => PackageVersion::Latest,
            Some(v) if v.trim().is_empty() => return Err(format!("empty version in '{}'", s)),
            Some(v) => parse_version(v).map_err(|e| format!("{} in '{}'", e, s))?,
        };

        Ok(Self {
            name: name.to_string(),
            version,
            raw_version: raw_version.map(str::to_string),
        })
    }
}

impl TryFrom<String> for PackageSpec {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PackageSpec> for String {
    fn from(spec: PackageSpec) -> Self {
        spec.to_string()
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw_version {
            Some(v) => write!(f, "{}@{}", self.name, v),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_pin() {
        let spec: PackageSpec = "electron@2.0.7".parse().unwrap();
        assert_eq!(spec.name(), "electron");
        assert!(spec.is_pinned());
        assert_eq!(spec.to_string(), "electron@2.0.7");
    }

    #[test]
    fn test_caret_range() {
        let spec: PackageSpec = "devtron@^1.4.0".parse().unwrap();
        assert!(!spec.is_pinned());
        match spec.version() {
            PackageVersion::Range(req) => {
                assert!(req.matches(&Version::parse("1.9.2").unwrap()));
                assert!(!req.matches(&Version::parse("2.0.0").unwrap()));
            }
            other => panic!("expected range, got {:?}", other),
        }
    }

    #[test]
    fn test_scoped_package() {
        let spec: PackageSpec = "@electron-forge/cli@6.0.0".parse().unwrap();
        assert_eq!(spec.name(), "@electron-forge/cli");
        assert!(spec.is_pinned());

        let spec: PackageSpec = "@types/node".parse().unwrap();
        assert_eq!(spec.name(), "@types/node");
        assert_eq!(spec.version(), &PackageVersion::Latest);
    }

    #[test]
    fn test_dist_tag() {
        let spec: PackageSpec = "electron@beta".parse().unwrap();
        assert_eq!(spec.version(), &PackageVersion::Tag("beta".to_string()));
    }

    #[test]
    fn test_npm_only_ranges_pass_through() {
        for text in [
            "electron-protocol-serve@^1.3.0 || ^2.0.0",
            "devtron@>=1.4.0 <2.0.0",
            "devtron@1.4.0 - 1.4.9",
        ] {
            let spec: PackageSpec = text.parse().unwrap();
            assert!(!spec.is_pinned());
            assert_eq!(spec.to_string(), text);
        }

        let spec: PackageSpec = "electron-protocol-serve@^1.3.0 || ^2.0.0".parse().unwrap();
        assert_eq!(spec.name(), "electron-protocol-serve");
        assert_eq!(
            spec.version(),
            &PackageVersion::Npm("^1.3.0 || ^2.0.0".to_string())
        );
    }

    #[test]
    fn test_invalid_specs() {
        assert!("".parse::<PackageSpec>().is_err());
        assert!("electron@".parse::<PackageSpec>().is_err());
        assert!("electron@   ".parse::<PackageSpec>().is_err());
        assert!("@scope".parse::<PackageSpec>().is_err());
        assert!("electron@1@2".parse::<PackageSpec>().is_err());
        assert!("electron@1.0\t2".parse::<PackageSpec>().is_err());
    }
}
