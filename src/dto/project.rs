use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for creating or patching a project
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub model_url: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: Option<Uuid>,
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

/// `count` is the length of `projects`, not a total row count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectResponse>,
    pub count: usize,
}

impl From<Vec<ProjectResponse>> for ProjectListResponse {
    fn from(projects: Vec<ProjectResponse>) -> Self {
        let count = projects.len();
        Self { projects, count }
    }
}
