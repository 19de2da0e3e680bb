//! A self-normalizing string field.

use crate::debug;
use crate::transform::{Operator, Transform};

/// A string slot bound to a transformation [`Operator`].
///
/// The operator is applied eagerly on construction and reapplied on every
/// [`set`](TransformField::set), so the held value can never be observed
/// untransformed. Reads are O(1) and never recompute.
///
/// Reassignment is an explicit method rather than interception of
/// assignment; callers that mutate the field must go through `set`.
///
/// Note that `set` is not idempotent for every operator: feeding a field
/// its own output leaves it unchanged for fixed-point operators like
/// `lower` or `trim`, but not for e.g. `digest` or `truncate` with the
/// ellipsis enabled.
///
/// # Examples
///
/// ```
/// use textform::field::TransformField;
/// use textform::transform::Operator;
///
/// let mut name = TransformField::new("john", Operator::capitalize());
/// assert_eq!(name.get(), "John");
///
/// name.set("jane DOE");
/// assert_eq!(name.get(), "Jane Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformField {
    op: Operator,
    value: String,
}

impl TransformField {
    /// Creates a field by applying `op` to `raw`.
    pub fn new<T: AsRef<str>>(raw: T, op: Operator) -> Self {
        let value = op.apply(raw.as_ref());
        debug!("field created: {:?} -> {:?}", raw.as_ref(), value);
        TransformField { op, value }
    }

    /// Reapplies the bound operator to `raw` and replaces the held value.
    pub fn set<T: AsRef<str>>(&mut self, raw: T) {
        self.value = self.op.apply(raw.as_ref());
        debug!("field set: {:?} -> {:?}", raw.as_ref(), self.value);
    }

    /// The current held value, already transformed.
    pub fn get(&self) -> &str {
        &self.value
    }

    /// The operator bound to this field.
    pub fn operator(&self) -> &Operator {
        &self.op
    }

    /// Consumes the field, returning the held value.
    pub fn into_value(self) -> String {
        self.value
    }
}

impl std::fmt::Display for TransformField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
