//! Presentation layer: host loop, format views, and widgets.

pub mod app;
pub mod demo;
pub mod events;
pub mod views;
pub mod widgets;

pub use app::App;
