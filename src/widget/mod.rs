//! Elements that make up enhanced tooltips.

pub mod dashed_separator;

pub use dashed_separator::HorizontalDashedLine;
