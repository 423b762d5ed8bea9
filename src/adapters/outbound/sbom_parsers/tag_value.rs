//! SPDX tag-value document normalization.

use super::RawDocument;
use crate::trend_analysis::domain::PackageRecord;

#[derive(Default)]
struct PendingPackage {
    name: String,
    version: Option<String>,
    license: Option<String>,
}

impl PendingPackage {
    fn into_record(self) -> PackageRecord {
        PackageRecord::new(self.name, self.version, self.license)
    }
}

/// Returns true when the content looks like an SPDX tag-value document
pub(super) fn is_tag_value(content: &str) -> bool {
    content
        .lines()
        .any(|line| line.trim_start().starts_with("SPDXVersion:"))
}

/// Parses the tags relevant to trend analysis; multi-line `<text>` values
/// are skipped so tags quoted inside them are not misread.
pub(super) fn parse(content: &str) -> RawDocument {
    let mut created = None;
    let mut records = Vec::new();
    let mut current: Option<PendingPackage> = None;
    let mut in_text = false;

    for line in content.lines() {
        if in_text {
            if line.contains("</text>") {
                in_text = false;
            }
            continue;
        }

        let Some((tag, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if value.starts_with("<text>") && !value.contains("</text>") {
            in_text = true;
        }

        match tag.trim() {
            "Created" => created = Some(value.to_string()),
            "PackageName" => {
                if let Some(done) = current.take() {
                    records.push(done.into_record());
                }
                current = Some(PendingPackage {
                    name: value.to_string(),
                    ..PendingPackage::default()
                });
            }
            "PackageVersion" => {
                if let Some(pkg) = current.as_mut() {
                    pkg.version = Some(value.to_string());
                }
            }
            "PackageLicenseConcluded" => {
                if let Some(pkg) = current.as_mut() {
                    pkg.license = Some(value.to_string());
                }
            }
            _ => {}
        }
    }

    if let Some(done) = current {
        records.push(done.into_record());
    }

    RawDocument { created, records }
}
