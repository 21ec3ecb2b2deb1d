//! Markdown → formatted text conversion tests
//!
//! Inputs go through the real comrak parser; expectations are rendered with
//! `common::render` and checked as inline snapshots.

mod basics;
mod fallback;
mod links;
mod properties;
mod quotes;
