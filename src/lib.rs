//! `textform` is a library of composable string transformations.
//!
//! It combines case normalization (capitalize, lower, upper, title,
//! sentence, camel, pascal, snake, kebab), content edits (bounded and
//! unbounded replacement, truncation, trimming, reversal) and a SHA-256
//! hex digest into a single [`transform::Operator`] type that can be bound
//! to a self-normalizing string slot, [`field::TransformField`].
//!
//! A field applies its operator when it is constructed, whenever it is
//! reassigned through `set`, and transparently while being decoded from a
//! serialized representation, so the held value can never be observed
//! untransformed.
//!
//! "Hello world" example:
//! ```
//! use textform::prelude::*;
//!
//! let mut name = TransformField::new("welcome JOHN DOe", Operator::title());
//! assert_eq!(name.get(), "Welcome John Doe");
//!
//! name.set("property wrappers");
//! assert_eq!(name.get(), "Property Wrappers");
//! ```

pub mod case;
pub mod digest;
pub mod edit;
pub mod error;
pub mod field;
pub mod log;
pub mod serde_support;
pub mod transform;

/// The textform prelude
///
/// This module re-exports the most commonly used items from textform.
/// You can use it with `use textform::prelude::*;` to bring all common
/// items into scope.
pub mod prelude {
    // Re-export commonly used traits
    pub use crate::transform::Transform;

    // Re-export commonly used types
    pub use crate::case::{CaseVariant, Casing, Locale};
    pub use crate::edit::CharSet;
    pub use crate::error::Result;
    pub use crate::field::TransformField;
    pub use crate::transform::Operator;

    // Re-export commonly used functions
    pub use crate::case::fold;
    pub use crate::digest::digest_hex;
}
