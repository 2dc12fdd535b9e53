mod codec;
mod config;
mod error;
mod keypath;
mod util;

pub mod prelude;
pub mod value;

pub use crate::codec::*;
pub use crate::config::EncodeOptions;
pub use crate::error::*;
pub use crate::keypath::KeyPath;

pub use crate::value::*;

#[doc(hidden)]
pub mod __private {
    pub use faststr::FastStr;
}
