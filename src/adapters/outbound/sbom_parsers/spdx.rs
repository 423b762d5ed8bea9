//! SPDX (JSON/YAML) document normalization.

use super::RawDocument;
use crate::trend_analysis::domain::PackageRecord;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SpdxDocument {
    #[serde(default)]
    creation_info: Option<CreationInfo>,
    #[serde(default)]
    packages: Vec<SpdxPackage>,
}

#[derive(Debug, Deserialize)]
struct CreationInfo {
    created: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpdxPackage {
    #[serde(default, deserialize_with = "super::scalar_name")]
    name: String,
    #[serde(default, deserialize_with = "super::scalar_text")]
    version_info: Option<String>,
    #[serde(default, deserialize_with = "super::scalar_text")]
    license_concluded: Option<String>,
}

impl SpdxDocument {
    pub(super) fn into_raw(self) -> RawDocument {
        RawDocument {
            created: self.creation_info.and_then(|info| info.created),
            records: self
                .packages
                .into_iter()
                .map(|pkg| PackageRecord::new(pkg.name, pkg.version_info, pkg.license_concluded))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packages_and_created() {
        let raw = serde_json::from_str::<SpdxDocument>(
            r#"{
                "spdxVersion": "SPDX-2.3",
                "SPDXID": "SPDXRef-DOCUMENT",
                "creationInfo": {"created": "2024-02-01T12:00:00Z", "creators": ["Tool: x"]},
                "packages": [
                    {"SPDXID": "SPDXRef-1", "name": "openssl", "versionInfo": "3.0.13",
                     "licenseConcluded": "Apache-2.0"},
                    {"SPDXID": "SPDXRef-2", "name": "zlib", "licenseConcluded": "NOASSERTION"}
                ]
            }"#,
        )
        .unwrap()
        .into_raw();

        assert_eq!(raw.created.as_deref(), Some("2024-02-01T12:00:00Z"));
        assert_eq!(raw.records.len(), 2);
        assert_eq!(raw.records[0].version(), "3.0.13");
        assert_eq!(raw.records[0].license(), "Apache-2.0");
        assert_eq!(raw.records[1].version(), "MISSING");
        assert_eq!(raw.records[1].license(), "NOASSERTION");
    }

    #[test]
    fn test_no_packages() {
        let raw = serde_json::from_str::<SpdxDocument>(r#"{"spdxVersion": "SPDX-2.3"}"#)
            .unwrap()
            .into_raw();
        assert!(raw.records.is_empty());
        assert!(raw.created.is_none());
    }
}
