//! Anchor Core Library
//!
//! Turns heading text into sanitized anchor names for Markdown and wiki
//! renderers. Three conventions are provided: a generic one, and GitHub and
//! GitLab compatible ones.
//! No IO dependencies, pure logic only. Uniqueness within a document is left
//! to the caller.
//!

pub mod classify;
mod error;
mod slug;
mod style;

pub use error::StyleError;
pub use slug::{create, create_github, create_gitlab};
pub use style::SlugStyle;
