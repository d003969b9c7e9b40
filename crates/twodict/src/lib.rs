//! Two-way ordered dictionary used by the vidl-gui option tables.
//!
//! The GUI maps human-readable labels to downloader option values and needs
//! to resolve both directions while keeping the order items were registered
//! in. `TwoWayOrderedDict` stores `(key, value)` pairs and answers lookups by
//! either side of a pair.

pub mod dict;
pub mod error;

pub use dict::{Keys, TwoWayOrderedDict};
pub use error::DictError;
