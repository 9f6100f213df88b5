// Blog domain module
// Contains the blog post model and its derivation rules

pub mod blog_post;
pub mod reading_time;
pub mod slug;

pub use blog_post::{BlogPost, PublicationState};
pub use reading_time::{reading_time_minutes, WORDS_PER_MINUTE};
pub use slug::generate_slug;
