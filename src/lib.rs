//! Folio: the project gallery behind a personal portfolio page.
//!
//! Pipeline: resolve the project list (live document or embedded fallback),
//! derive tag chips, filter by query and active tags, render cards, reveal
//! each card once when it scrolls into view.

pub mod chrome;
pub mod contact;
pub mod designs;
pub mod gallery;
pub mod models;
pub mod render;
pub mod reveal;
pub mod search;
pub mod source;
pub mod tags;


pub use gallery::{Gallery, GalleryState};
pub use models::project::{default_projects, Project};
pub use models::settings::Settings;
pub use source::{FallbackReason, Resolved};
