//! Variadic signatures for multiple dispatch.
//!
//! A [`Variadic`] stands for "any number of arguments, each of one of these
//! types". Overload resolvers use [`is_subtype_of`] to test call argument
//! types against signature slots, and rely on the structural [`Eq`] and
//! [`Hash`] of signatures to index and deduplicate overloads.
//!
//! ```
//! use multidispatch_types::Type;
//! use multidispatch_variadic::{TypeSpec, is_subtype_of, make_variadic};
//!
//! let numbers = make_variadic((Type::Int, Type::Float)).unwrap();
//! assert!(is_subtype_of(&TypeSpec::from(Type::Bool), &numbers));
//! assert!(!is_subtype_of(&TypeSpec::from(Type::Str), &numbers));
//! ```

pub mod arg;
pub mod error;
pub mod intern;
mod parse;
pub mod subtype;
pub mod variadic;


pub use arg::{Literal, TypeArg};
pub use error::{Error, Result};
pub use intern::{clear_interned, intern};
pub use subtype::{is_subtype_of, is_subtype_of_in};
pub use variadic::{TypeSpec, Variadic, is_variadic, make_variadic};
