/// Version recorded when a document does not state one
pub const MISSING_VERSION: &str = "MISSING";

/// License recorded when a document does not state one
pub const NO_LICENSE: &str = "NONE";

/// PackageRecord value object - one package entry of one snapshot
///
/// The sentinels are part of the report contract and are stored as plain
/// strings, so downstream tooling sees exactly `"MISSING"` / `"NONE"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    name: String,
    version: String,
    license: String,
}

impl PackageRecord {
    /// Creates a record, substituting sentinels for absent or blank values
    pub fn new(
        name: impl Into<String>,
        version: Option<String>,
        license: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: non_blank(version).unwrap_or_else(|| MISSING_VERSION.to_string()),
            license: non_blank(license).unwrap_or_else(|| NO_LICENSE.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn license(&self) -> &str {
        &self.license
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
