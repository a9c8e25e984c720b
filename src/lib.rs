use indexmap::IndexMap;

pub mod area;
pub mod district;
pub mod error;
pub mod pipeline;
pub mod service;
pub mod util;

pub use error::{Error, Result};

/// Name to numeric id, in insertion order. Re-inserting a key keeps its
/// original position and takes the new value.
pub type Mapping = IndexMap<String, i64>;
