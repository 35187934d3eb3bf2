//! Reusable UI widgets.

mod button;

pub use button::Button;
