//! Config version stamping.
//!
//! The first line of the config file records the version that wrote it. A missing
//! file, an unstamped file or an older stamp means setup has to run.

use anyhow::anyhow;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::path::Path;

/// Current application version from Cargo.toml
const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Semantic version (major.minor.patch)
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd)]
struct SemanticVersion {
    major: u32,
    minor: u32,
    patch: u32,
}

impl SemanticVersion {
    fn parse(version_str: &str) -> anyhow::Result<Self> {
        let parts = version_str
            .trim()
            .split('.')
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| anyhow!("Invalid version component '{part}' in '{version_str}'"))
            })
            .collect::<anyhow::Result<Vec<u32>>>()?;

        match parts.as_slice() {
            [major, minor, patch] => Ok(SemanticVersion {
                major: *major,
                minor: *minor,
                patch: *patch,
            }),
            _ => Err(anyhow!(
                "Invalid version format: '{version_str}'. Expected 'major.minor.patch'"
            )),
        }
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// The `config_version = "X.Y.Z"` line for the running binary.
pub fn version_line() -> String {
    format!(r#"config_version = "{CURRENT_VERSION}""#)
}

/// Extracts the version stamp from the first line of `content`, if any.
fn read_version_stamp(content: &str) -> anyhow::Result<Option<String>> {
    let Some(first_line) = content.lines().next() else {
        return Ok(None);
    };
    let regex = Regex::new(r#"^\s*config_version\s*=\s*"([^"]+)""#)?;
    Ok(regex.captures(first_line).map(|caps| caps[1].to_string()))
}

/// Decides whether setup has to run for the config at `config_path`.
///
/// Returns a description of the version found when setup is needed, `None` otherwise.
pub fn check_setup_needed(config_path: &Path) -> anyhow::Result<Option<String>> {
    if !config_path.exists() {
        return Ok(Some("none (no config file)".to_string()));
    }

    let content = std::fs::read_to_string(config_path)?;
    let Some(stamp) = read_version_stamp(&content)? else {
        return Ok(Some("unknown (unversioned config)".to_string()));
    };

    let config_version = SemanticVersion::parse(&stamp)?;
    let current_version = SemanticVersion::parse(CURRENT_VERSION)?;

    match config_version.cmp(&current_version) {
        Ordering::Less => Ok(Some(config_version.to_string())),
        Ordering::Equal => Ok(None),
        Ordering::Greater => {
            tracing::warn!(
                "Config version {} is newer than app version {}",
                config_version,
                CURRENT_VERSION
            );
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_version_parse() {
        let v = SemanticVersion::parse("0.1.5").unwrap();
        assert_eq!(v.major, 0);
        assert_eq!(v.minor, 1);
        assert_eq!(v.patch, 5);
        assert_eq!(v.to_string(), "0.1.5");
    }

    #[test]
    fn test_semantic_version_comparison() {
        let v1 = SemanticVersion::parse("0.0.9").unwrap();
        let v2 = SemanticVersion::parse("0.1.0").unwrap();
        let v3 = SemanticVersion::parse("1.0.0").unwrap();
        assert!(v1 < v2);
        assert!(v2 < v3);
    }

    #[test]
    fn test_invalid_version_format() {
        assert!(SemanticVersion::parse("0.1").is_err());
        assert!(SemanticVersion::parse("0.1.0.1").is_err());
        assert!(SemanticVersion::parse("zero.one.two").is_err());
    }

    #[test]
    fn test_read_version_stamp() {
        assert_eq!(
            read_version_stamp("config_version = \"0.1.0\"\n[source]").unwrap(),
            Some("0.1.0".to_string())
        );
        assert_eq!(read_version_stamp("# config_version = \"0.1.0\"").unwrap(), None);
        assert_eq!(read_version_stamp("").unwrap(), None);
    }

    #[test]
    fn test_check_setup_needed() {
        let dir = std::env::temp_dir().join(format!("ecgview-version-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ecgview.toml");

        assert!(check_setup_needed(&path).unwrap().is_some());

        std::fs::write(&path, "[source]\nlocation = \"a.json\"\n").unwrap();
        assert!(check_setup_needed(&path).unwrap().is_some());

        std::fs::write(&path, "config_version = \"0.0.0\"\n").unwrap();
        assert_eq!(check_setup_needed(&path).unwrap(), Some("0.0.0".to_string()));

        std::fs::write(&path, format!("{}\n", version_line())).unwrap();
        assert_eq!(check_setup_needed(&path).unwrap(), None);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
