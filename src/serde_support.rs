//! Serde bridge for [`TransformField`].
//!
//! Every field serializes as a single string token holding its current
//! (already transformed) value. Decoding reads one string token and feeds
//! it through the bound operator, so a round-trip is only value-preserving
//! for operators that are fixed points of their own output.
//!
//! The wire format carries no operator options; the per-variant `with`
//! modules below decode with each transform's default options and are
//! meant for `#[serde(with = "...")]` on derived containers. `replace`
//! has no module since its target and replacement are required, with no
//! defaults; decode those fields through a [`DeserializeSeed`] on an
//! explicit [`Operator`].

use serde::de::DeserializeSeed;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::field::TransformField;
use crate::transform::Operator;

impl Serialize for TransformField {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.get())
    }
}

/// Decodes one string token and constructs the field with this operator.
///
/// A non-string token surfaces the deserializer's own type-mismatch error
/// unchanged; no recovery is attempted.
impl<'de> DeserializeSeed<'de> for Operator {
    type Value = TransformField;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Ok(TransformField::new(token, self))
    }
}

impl<'de> DeserializeSeed<'de> for &Operator {
    type Value = TransformField;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        self.clone().deserialize(deserializer)
    }
}

impl Operator {
    /// Decodes a single JSON string token into a field bound to this
    /// operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use textform::transform::Operator;
    ///
    /// let field = Operator::title().decode_json("\"welcome JOHN DOe\"").unwrap();
    /// assert_eq!(field.get(), "Welcome John Doe");
    /// ```
    pub fn decode_json(self, token: &str) -> Result<TransformField> {
        let mut deserializer = serde_json::Deserializer::from_str(token);
        let field = self.deserialize(&mut deserializer)?;
        deserializer.end()?;
        Ok(field)
    }
}

macro_rules! with_module {
    ($(#[$doc:meta])* $name:ident, $ctor:expr) => {
        $(#[$doc])*
        pub mod $name {
            use serde::de::DeserializeSeed;
            use serde::{Deserializer, Serialize, Serializer};

            use crate::field::TransformField;
            use crate::transform::Operator;

            pub fn deserialize<'de, D>(
                deserializer: D,
            ) -> std::result::Result<TransformField, D::Error>
            where
                D: Deserializer<'de>,
            {
                $ctor.deserialize(deserializer)
            }

            pub fn serialize<S>(
                field: &TransformField,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                field.serialize(serializer)
            }
        }
    };
}

with_module!(
    /// Capitalize with ordinal casing.
    capitalize,
    Operator::capitalize()
);
with_module!(
    /// Lower-case with ordinal casing.
    lower,
    Operator::lower()
);
with_module!(
    /// Upper-case with ordinal casing.
    upper,
    Operator::upper()
);
with_module!(
    /// Title case with ordinal casing.
    title,
    Operator::title()
);
with_module!(
    /// Sentence case with ordinal casing.
    sentence,
    Operator::sentence()
);
with_module!(
    /// Camel case with ordinal casing.
    camel,
    Operator::camel()
);
with_module!(
    /// Pascal case with ordinal casing.
    pascal,
    Operator::pascal()
);
with_module!(
    /// Snake case with ordinal casing.
    snake,
    Operator::snake()
);
with_module!(
    /// Kebab case with ordinal casing.
    kebab,
    Operator::kebab()
);
with_module!(
    /// Truncation with the defaults (200 clusters, ellipsis shown).
    truncate,
    Operator::truncate()
);
with_module!(
    /// Whitespace trimming.
    trim,
    Operator::trim()
);
with_module!(
    /// Grapheme-cluster reversal.
    reverse,
    Operator::reverse()
);
with_module!(
    /// Lowercase hex SHA-256 digest.
    digest,
    Operator::digest()
);
