use crate::domain::version::Version;
use crate::error::{BumpError, Result};

/// Pattern every version tag must match: a literal 'v' followed by three
/// dot-separated runs of decimal digits, nothing before or after.
const VERSION_TAG_PATTERN: &str = r"^v[0-9]+\.[0-9]+\.[0-9]+$";

/// Check whether a ref name is a well-formed version tag.
pub fn is_version_tag(tag: &str) -> bool {
    match regex::Regex::new(VERSION_TAG_PATTERN) {
        Ok(re) => re.is_match(tag),
        Err(_) => false,
    }
}

/// Validate a version tag, returning a `VersionFormat` error on mismatch.
pub fn validate_version_tag(tag: &str) -> Result<()> {
    if is_version_tag(tag) {
        Ok(())
    } else {
        Err(BumpError::VersionFormat(tag.to_string()))
    }
}

/// Pick the highest version among the given ref names.
///
/// Refs that do not match the version-tag format are ignored; the
/// survivors are compared numerically component by component, so
/// "v0.0.5" sorts below "v0.0.25". If nothing matches the format the
/// caller gets `NoVersionTagsFound`, which the workflow treats as the
/// first-release case.
pub fn latest_version<S: AsRef<str>>(tags: &[S]) -> Result<Version> {
    let mut versions = Vec::new();
    for tag in tags {
        let tag = tag.as_ref();
        if is_version_tag(tag) {
            versions.push(Version::parse(tag)?);
        }
    }

    versions.sort();
    match versions.last() {
        Some(latest) => Ok(*latest),
        None => Err(BumpError::NoVersionTagsFound),
    }
}
