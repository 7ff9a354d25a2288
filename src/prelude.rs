pub use crate::error::{IntervalError, OverlapError};
pub use crate::lookup::{LookupEntry, RangeLookupTable};
pub use crate::parsing::{load_table, table_from_str};
pub use crate::range::Interval;
pub use crate::raster::Raster;
pub use crate::remap::remap;

pub use std::cmp::Ordering;
