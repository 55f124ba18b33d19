pub mod decompose;
pub mod format;
pub mod humanizer;
pub mod normalize;

pub use crate::domain::model::{DurationComponents, FormatOptions, TimeUnit};
pub use crate::utils::error::Result;
