//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional `?disease=` filter for the vlog feed.
#[derive(Debug, Deserialize)]
pub struct VlogFilterParams {
    pub disease: Option<String>,
}

impl VlogFilterParams {
    /// The filter value, treating an empty parameter as absent.
    pub fn disease(&self) -> Option<&str> {
        self.disease.as_deref().map(str::trim).filter(|d| !d.is_empty())
    }
}
