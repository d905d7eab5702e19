//! Exact money values.
//!
//! - `value` - the `Money` type, constructors, arithmetic and comparison

pub mod value;

#[cfg(test)]
mod arithmetic_props;

pub use value::Money;
