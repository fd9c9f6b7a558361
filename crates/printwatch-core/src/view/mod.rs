//! View projection: snapshot -> targeted display updates.

pub mod project;
pub mod types;

pub use project::{badge_category, project};
pub use types::{BadgeCategory, StatusView, ViewTarget, ViewUpdate, ViewValue};
