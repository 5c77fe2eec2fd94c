//! Gallery renderers.

pub mod gallery;
