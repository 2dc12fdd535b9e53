//! A dynamic type to representing any valid JSON value.

pub mod array;
mod de;
mod from;
pub(crate) mod node;
mod tryfrom;
#[macro_use]
mod macros;
mod index;
pub mod object;
mod partial_eq;
pub(crate) mod ser;
mod value_trait;

#[doc(inline)]
pub use self::array::Array;
#[doc(inline)]
pub use self::index::Index;
#[doc(inline)]
pub use self::node::Value;
#[doc(inline)]
pub use self::object::Object;
#[doc(inline)]
pub use self::ser::to_value;
#[doc(inline)]
pub use self::tryfrom::{AnyArray, AnyMap};
#[doc(inline)]
pub use self::value_trait::{JsonContainerTrait, JsonType, JsonValueTrait};
