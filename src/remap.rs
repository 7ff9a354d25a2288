use std::fmt;

use rayon::prelude::*;

use crate::lookup::RangeLookupTable;
use crate::raster::Raster;

/// Remaps every pixel of `source` through `table`, writing `default`
/// wherever the source value falls outside all configured ranges.
///
/// Pixels are independent, so the destination buffer is filled in
/// parallel; the table is only read.
pub fn remap<T, U>(source: &Raster<T>, table: &RangeLookupTable<T, U>, default: U) -> Raster<U>
where
    T: PartialOrd + Copy + fmt::Display + Sync,
    U: Copy + Send + Sync,
{
    let mut destination = Raster::new(source.width, source.height, default);
    destination
        .buffer
        .par_iter_mut()
        .zip(source.buffer.par_iter())
        .for_each(|(out, &pixel)| {
            if let Some(&value) = table.lookup(pixel) {
                *out = value;
            }
        });
    destination
}
