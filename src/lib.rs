//! The library code for the `chronica` static blog generator. The
//! architecture can be generally broken down into two distinct steps:
//!
//! 1. Discovering and ordering source documents ([`crate::document`])
//! 2. Rendering the ordered sequence into linked HTML pages ([`crate::build`])
//!
//! Of the two, the second step is the more involved. For every position in
//! the sequence it computes the previous/next navigation links
//! ([`crate::nav`]), converts the markdown body ([`crate::markdown`]), and
//! substitutes everything into the shared page skeleton
//! ([`crate::template`]). The newest document becomes the site index at the
//! root; every other document is written to the rendered-pages directory.
//!
//! A final step walks the same sequence once more and groups entries by
//! their year prefix to produce the archive listing ([`crate::archive`]),
//! which is emitted both as a generated markdown source and as a rendered
//! page.

pub mod archive;
pub mod build;
pub mod cli;
pub mod config;
pub mod document;
pub mod logger;
pub mod markdown;
pub mod nav;
pub mod template;
