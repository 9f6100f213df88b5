use serde::{Deserialize, Serialize};

use super::reading_time::reading_time_minutes;

/// Publication state of a blog post
///
/// # State Transitions
/// ```text
/// Draft <-> Published
/// ```
/// Entering `Published` stamps the publish date; leaving it keeps the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PublicationState {
    Draft,
    Published,
}

impl PublicationState {
    pub fn from_published(published: bool) -> Self {
        if published {
            PublicationState::Published
        } else {
            PublicationState::Draft
        }
    }

    /// True for the one transition that stamps a publish date
    pub fn stamps_publish_date(self, next: PublicationState) -> bool {
        matches!(
            (self, next),
            (PublicationState::Draft, PublicationState::Published)
        )
    }
}

impl std::fmt::Display for PublicationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublicationState::Draft => write!(f, "draft"),
            PublicationState::Published => write!(f, "published"),
        }
    }
}

/// A blog post
///
/// `content` is rich text (HTML). All dates are optional RFC 3339 strings.
/// `slug` is unique by convention only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub publish_date: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub published: bool,
    pub slug: String,
}

impl BlogPost {
    pub fn state(&self) -> PublicationState {
        PublicationState::from_published(self.published)
    }

    /// Estimated minutes to read the content
    pub fn reading_time(&self) -> u32 {
        reading_time_minutes(&self.content)
    }
}
