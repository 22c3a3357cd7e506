//! Registry response types and latest-version extraction.

use serde::Deserialize;
use thiserror::Error;

/// Raw metadata returned by the registry for one package.
///
/// The `packages` array is trusted to be ordered newest-first by the
/// registry; it is neither re-sorted nor validated here. Unknown JSON
/// fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryResponse {
    #[serde(default)]
    pub packages: Vec<VersionRecord>,
}

/// One version entry from the registry's `packages` array.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionRecord {
    #[serde(rename = "versionName")]
    pub version_name: String,
    #[serde(rename = "versionCode")]
    pub version_code: i64,
}

/// The version selected as most recent for a package.
#[derive(Debug, Clone)]
pub struct LatestVersion {
    /// Display string, e.g. "1.2".
    pub version_name: String,
    /// Integer code used to build the download path segment.
    pub version_code: i64,
}

/// Missing or malformed version data.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("registry reported no versions")]
    NoVersions,
}

/// Select the latest version from a registry response.
///
/// Selection is positional: the first array element is taken as latest,
/// trusting the registry's newest-first ordering. An empty array is a
/// recoverable error, never a panic.
pub fn extract_latest(response: &RegistryResponse) -> Result<LatestVersion, ExtractError> {
    let record = response.packages.first().ok_or(ExtractError::NoVersions)?;
    Ok(LatestVersion {
        version_name: record.version_name.clone(),
        version_code: record.version_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_from_json(json: &str) -> RegistryResponse {
        serde_json::from_str(json).expect("valid registry JSON")
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let response = response_from_json(
            r#"{
                "packageName": "org.example.app",
                "suggestedVersionCode": 5,
                "packages": [
                    {"versionName": "1.2", "versionCode": 5, "added": 1718409600}
                ]
            }"#,
        );
        assert_eq!(response.packages.len(), 1);
        assert_eq!(response.packages[0].version_name, "1.2");
        assert_eq!(response.packages[0].version_code, 5);
    }

    #[test]
    fn test_deserialize_missing_packages_field() {
        let response = response_from_json(r#"{"packageName": "org.example.app"}"#);
        assert!(response.packages.is_empty());
    }

    #[test]
    fn test_extract_latest_is_positional() {
        // Always the first record, regardless of how many follow
        let response = response_from_json(
            r#"{"packages": [
                {"versionName": "2.0", "versionCode": 20},
                {"versionName": "1.5", "versionCode": 15},
                {"versionName": "9.9", "versionCode": 99}
            ]}"#,
        );
        let latest = extract_latest(&response).expect("non-empty");
        assert_eq!(latest.version_name, "2.0");
        assert_eq!(latest.version_code, 20);
    }

    #[test]
    fn test_extract_latest_single_record() {
        let response = response_from_json(
            r#"{"packages": [{"versionName": "1.2", "versionCode": 5}]}"#,
        );
        let latest = extract_latest(&response).expect("non-empty");
        assert_eq!(latest.version_name, "1.2");
        assert_eq!(latest.version_code, 5);
    }

    #[test]
    fn test_extract_latest_empty_is_error() {
        let response = response_from_json(r#"{"packages": []}"#);
        assert!(matches!(
            extract_latest(&response),
            Err(ExtractError::NoVersions)
        ));
    }
}
