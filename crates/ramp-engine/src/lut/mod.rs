//! Gradient lookup tables.
//!
//! A [`LookupTable`] turns a normalized stop list into precomputed colors so
//! that resolving a pixel is a cycle adjustment plus an array index.
//!
//! Two layouts, picked by estimated size:
//! - flat: intervals sized proportionally (smallest gets 255 slots), one array
//! - jagged: 256 slots per interval, bounded memory for skewed stop lists

mod interpolate;
mod resolve;
mod table;

pub use resolve::normalize_position;
pub use table::{JAGGED_INTERVAL_SIZE, LookupTable, MAX_FLAT_TABLE_SIZE, Strategy};
