//! Range-to-value lookup core of a raster image-processing toolkit.
//!
//! A [`RangeLookupTable`] holds disjoint source-value ranges, each paired
//! with a destination value, and resolves per-pixel queries to the
//! matching destination value or `None`. Tables are built once, then
//! queried from as many worker threads as the surrounding pipeline runs.

pub mod error;
pub mod lookup;
pub mod parsing;
pub mod prelude;
pub mod range;
pub mod raster;
pub mod remap;

pub use crate::error::{IntervalError, OverlapError};
pub use crate::lookup::{LookupEntry, RangeLookupTable};
pub use crate::range::Interval;
