pub mod project;
pub mod settings;
