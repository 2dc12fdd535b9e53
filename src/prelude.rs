//! Imports the various traits about JSON. `use generic_json::prelude::*` to make the
//! various traits and methods imported if you need.

pub use crate::value::{Index, JsonContainerTrait, JsonValueTrait};
