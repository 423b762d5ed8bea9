//! CycloneDX (JSON/YAML) document normalization.

use super::RawDocument;
use crate::trend_analysis::domain::PackageRecord;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct CycloneDxDocument {
    #[serde(default)]
    metadata: Option<Metadata>,
    #[serde(default)]
    components: Vec<Component>,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    timestamp: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Component {
    #[serde(default, deserialize_with = "super::scalar_name")]
    name: String,
    #[serde(default, deserialize_with = "super::scalar_text")]
    version: Option<String>,
    #[serde(default)]
    licenses: Vec<LicenseChoice>,
    #[serde(default)]
    components: Vec<Component>,
}

#[derive(Debug, Deserialize)]
struct LicenseChoice {
    license: Option<License>,
    #[serde(default, deserialize_with = "super::scalar_text")]
    expression: Option<String>,
}

#[derive(Debug, Deserialize)]
struct License {
    #[serde(default, deserialize_with = "super::scalar_text")]
    id: Option<String>,
    #[serde(default, deserialize_with = "super::scalar_text")]
    name: Option<String>,
}

impl LicenseChoice {
    fn text(&self) -> Option<String> {
        self.license
            .as_ref()
            .and_then(|l| l.id.clone().or_else(|| l.name.clone()))
            .or_else(|| self.expression.clone())
    }
}

impl CycloneDxDocument {
    pub(super) fn into_raw(self) -> RawDocument {
        let mut records = Vec::new();
        collect_components(self.components, &mut records);

        RawDocument {
            created: self.metadata.and_then(|m| m.timestamp),
            records,
        }
    }
}

/// Flattens nested components depth-first, parents before children
fn collect_components(components: Vec<Component>, records: &mut Vec<PackageRecord>) {
    for component in components {
        let license = component.licenses.iter().find_map(LicenseChoice::text);
        records.push(PackageRecord::new(
            component.name,
            component.version,
            license,
        ));
        collect_components(component.components, records);
    }
}
