//! Small generic building blocks: multi-key stable sorting over primitive ordered kinds, plus
//! helpers for maps, lazy sequences, slices, arithmetic, calendar time, paths, cancellation,
//! error chains and type names.
//!
//! The `time` feature (chrono) enables [`time`] and [`format`], the `context` feature (tokio)
//! enables [`context`]. Both are on by default.

pub mod errors;
pub mod maps;
pub mod math;
pub mod ordered;
pub mod path;
pub mod seq;
pub mod slice;
pub mod sort;
pub mod type_name;

#[cfg(feature = "context")]
pub mod context;
#[cfg(feature = "time")]
pub mod format;
#[cfg(feature = "time")]
pub mod time;

pub use ordered::{compare, try_compare, CompareError, Ordered, OrderedRepr};
pub use sort::{sorted, sorted1, sorted2, sorted3, sorted4, sorted5, sorted6, CompositeKey};
