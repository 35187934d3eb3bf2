//! Floatscope - a terminal viewer for floating-point bit formats.
//!
//! This crate provides a small family of interchangeable terminal views over
//! reduced-precision float encodings, built on a pluggable format-view
//! abstraction and a ratatui event loop.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Domain layer containing the format family and bit-pattern decoding.
pub mod domain;
/// Infrastructure layer containing CLI and logging configuration.
pub mod infrastructure;
/// Presentation layer containing the host loop, views, and widgets.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "floatscope";
