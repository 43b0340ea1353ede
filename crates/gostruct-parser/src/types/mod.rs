//! Serializable records describing the top-level declarations of a package.

mod callable;
mod field;
mod package;
mod records;
mod values;

pub use callable::{Function, Method, Param};
pub(crate) use callable::render_signature;
pub use field::Field;
pub use package::{Output, Package};
pub use records::{Interface, Struct};
pub use values::{Constant, Variable};
