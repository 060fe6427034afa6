pub mod classifier;

pub use crate::domain::model::{Classification, Package, Reading, Stack};
pub use crate::utils::error::Result;
