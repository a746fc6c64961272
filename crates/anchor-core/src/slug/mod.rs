//! Slug generators
//!
//! Each convention lives in its own module and is a plain function from
//! heading text to anchor name. None of them guarantee uniqueness within a
//! document; callers append counters themselves if they need to.

mod generic;
mod github;
mod gitlab;

pub use generic::create;
pub use github::create_github;
pub use gitlab::create_gitlab;
