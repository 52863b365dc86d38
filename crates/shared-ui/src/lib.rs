//! Presentational building blocks shared by every SkillSyncer page.
//!
//! Components are thin wrappers that attach a class name and their own
//! stylesheet; colors come from the CSS variables declared by the app's
//! root stylesheet.

pub mod components;

pub use components::*;
