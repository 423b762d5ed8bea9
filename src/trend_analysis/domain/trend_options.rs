/// Options controlling one aggregation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendOptions {
    filter_name: Option<String>,
    track_license: bool,
}

impl TrendOptions {
    /// Creates options; a blank filter is treated as "no filter"
    pub fn new(filter_name: Option<String>, track_license: bool) -> Self {
        Self {
            filter_name: filter_name.filter(|name| !name.trim().is_empty()),
            track_license,
        }
    }

    /// Exact, case-sensitive package name to restrict the run to
    pub fn filter_name(&self) -> Option<&str> {
        self.filter_name.as_deref()
    }

    pub fn is_filtered(&self) -> bool {
        self.filter_name.is_some()
    }

    pub fn track_license(&self) -> bool {
        self.track_license
    }

    /// Returns true when a record with this name takes part in the run
    pub fn accepts(&self, name: &str) -> bool {
        match &self.filter_name {
            Some(filter) => filter == name,
            None => true,
        }
    }
}

impl Default for TrendOptions {
    fn default() -> Self {
        Self::new(None, true)
    }
}
