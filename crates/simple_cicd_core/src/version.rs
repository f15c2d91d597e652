use semver::{BuildMetadata, Prerelease, Version};

use crate::error::JobError;

const VERSION_PREFIX: char = 'v';

/// Increments the patch component of a stored version string.
///
/// Major and minor are kept. Pre-release and build metadata are dropped, so
/// `1.4.2-rc.1` becomes `1.4.3`. A leading `v` survives the bump.
pub fn bump_patch(raw: &str) -> Result<String, JobError> {
    let trimmed = raw.trim();
    let (prefix, body) = match trimmed.strip_prefix(VERSION_PREFIX) {
        Some(rest) => (Some(VERSION_PREFIX), rest),
        None => (None, trimmed),
    };

    let mut version = Version::parse(body).map_err(|error| JobError::InvalidVersion {
        value: raw.to_string(),
        message: error.to_string(),
    })?;

    version.patch = version
        .patch
        .checked_add(1)
        .ok_or_else(|| JobError::InvalidVersion {
            value: raw.to_string(),
            message: "patch component overflow".to_string(),
        })?;
    version.pre = Prerelease::EMPTY;
    version.build = BuildMetadata::EMPTY;

    Ok(match prefix {
        Some(prefix) => format!("{prefix}{version}"),
        None => version.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_only_the_patch_component() {
        assert_eq!(bump_patch("2.3.9").expect("valid version"), "2.3.10");
        assert_eq!(bump_patch("0.0.0").expect("valid version"), "0.0.1");
        assert_eq!(bump_patch("10.20.30").expect("valid version"), "10.20.31");
    }

    #[test]
    fn keeps_leading_v_prefix() {
        assert_eq!(bump_patch("v1.0.0").expect("valid version"), "v1.0.1");
    }

    #[test]
    fn drops_prerelease_and_build_metadata() {
        assert_eq!(bump_patch("1.4.2-rc.1").expect("valid version"), "1.4.3");
        assert_eq!(
            bump_patch("1.4.2-beta+build.5").expect("valid version"),
            "1.4.3"
        );
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(bump_patch(" 1.2.3\n").expect("valid version"), "1.2.4");
    }

    #[test]
    fn rejects_malformed_versions() {
        for raw in ["", "1.2", "one.two.three", "1.2.3.4", "vv1.2.3"] {
            let error = bump_patch(raw).expect_err("malformed version should fail");
            assert!(matches!(error, JobError::InvalidVersion { ref value, .. } if value == raw));
        }
    }

    #[test]
    fn rejects_patch_overflow() {
        let raw = format!("1.0.{}", u64::MAX);
        let error = bump_patch(&raw).expect_err("overflow should fail");
        assert!(error.to_string().contains("patch component overflow"));
    }
}
