use serde::{Deserialize, Serialize};

/// A portfolio project
///
/// `id` is empty until the project has been saved once; after that it is
/// the string form of the generated storage key and never changes.
/// Timestamps are RFC 3339 strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub model_url: String,
    pub technologies: Vec<String>,
    pub github_url: String,
    pub demo_url: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub featured: bool,
}

impl Project {
    /// Returns true once the project has been persisted
    pub fn is_persisted(&self) -> bool {
        !self.id.trim().is_empty()
    }
}
