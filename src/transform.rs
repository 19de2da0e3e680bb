//! The transformation operator and the trait it dispatches through.

use crate::case::{fold, CaseVariant, Casing};
use crate::digest::digest_hex;
use crate::edit::{replace, reverse, trim, truncate, CharSet, DEFAULT_TRUNCATE_LENGTH};

/// Trait for string transformations in the folding chain.
///
/// Every transformation is total: it maps any valid UTF-8 input to an
/// output string with no failure mode.
pub trait Transform {
    /// Transforms the input text.
    ///
    /// # Arguments
    /// * `input` - The text to transform
    ///
    /// # Returns
    /// The transformed text
    fn apply(&self, input: &str) -> String;
}

/// A tagged transformation operator together with its configuration.
///
/// The constructors carry the documented defaults, so most call sites can
/// write `Operator::title()` instead of spelling out the full variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operator {
    /// One of the case folding algorithms with its casing strategy.
    Case {
        variant: CaseVariant,
        casing: Casing,
    },
    /// Substring replacement; `max_count == 0` means unbounded.
    Replace {
        target: String,
        replacement: String,
        max_count: usize,
    },
    /// Grapheme-cluster truncation with optional `...` suffix.
    Truncate { length: usize, show_ellipsis: bool },
    /// Boundary trimming against a character set.
    Trim { set: CharSet },
    /// Grapheme-cluster reversal.
    Reverse,
    /// Lowercase hex SHA-256 of the UTF-8 bytes.
    Digest,
}

impl Operator {
    /// A case folding operator with an explicit casing strategy.
    pub fn case(variant: CaseVariant, casing: Casing) -> Self {
        Operator::Case { variant, casing }
    }

    pub fn capitalize() -> Self {
        Self::case(CaseVariant::Capitalize, Casing::Ordinal)
    }

    pub fn lower() -> Self {
        Self::case(CaseVariant::Lower, Casing::Ordinal)
    }

    /// Defaults to `Ordinal` like every other variant. Use
    /// [`Operator::case`] to pick a locale-aware strategy.
    pub fn upper() -> Self {
        Self::case(CaseVariant::Upper, Casing::Ordinal)
    }

    pub fn title() -> Self {
        Self::case(CaseVariant::Title, Casing::Ordinal)
    }

    pub fn sentence() -> Self {
        Self::case(CaseVariant::Sentence, Casing::Ordinal)
    }

    pub fn camel() -> Self {
        Self::case(CaseVariant::Camel, Casing::Ordinal)
    }

    pub fn pascal() -> Self {
        Self::case(CaseVariant::Pascal, Casing::Ordinal)
    }

    pub fn snake() -> Self {
        Self::case(CaseVariant::Snake, Casing::Ordinal)
    }

    pub fn kebab() -> Self {
        Self::case(CaseVariant::Kebab, Casing::Ordinal)
    }

    /// Unbounded replacement of `target` with `replacement`.
    pub fn replace<T: Into<String>, R: Into<String>>(target: T, replacement: R) -> Self {
        Self::replace_n(target, replacement, 0)
    }

    /// Replacement bounded to `max_count` occurrences (`0` = unbounded).
    pub fn replace_n<T: Into<String>, R: Into<String>>(
        target: T,
        replacement: R,
        max_count: usize,
    ) -> Self {
        Operator::Replace {
            target: target.into(),
            replacement: replacement.into(),
            max_count,
        }
    }

    /// Truncation with the defaults: 200 grapheme clusters, ellipsis shown.
    pub fn truncate() -> Self {
        Self::truncate_to(DEFAULT_TRUNCATE_LENGTH, true)
    }

    pub fn truncate_to(length: usize, show_ellipsis: bool) -> Self {
        Operator::Truncate {
            length,
            show_ellipsis,
        }
    }

    /// Whitespace trimming, the default character set.
    pub fn trim() -> Self {
        Self::trim_set(CharSet::Whitespace)
    }

    pub fn trim_set(set: CharSet) -> Self {
        Operator::Trim { set }
    }

    pub fn reverse() -> Self {
        Operator::Reverse
    }

    pub fn digest() -> Self {
        Operator::Digest
    }
}

impl Transform for Operator {
    fn apply(&self, input: &str) -> String {
        match self {
            Operator::Case { variant, casing } => fold(input, *variant, casing),
            Operator::Replace {
                target,
                replacement,
                max_count,
            } => replace(input, target, replacement, *max_count),
            Operator::Truncate {
                length,
                show_ellipsis,
            } => truncate(input, *length, *show_ellipsis),
            Operator::Trim { set } => trim(input, set),
            Operator::Reverse => reverse(input),
            Operator::Digest => digest_hex(input),
        }
    }
}
