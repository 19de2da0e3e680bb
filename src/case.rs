//! Case folding primitives.
//!
//! All folding goes through [`fold`], which combines a [`CaseVariant`]
//! (which algorithm) with a [`Casing`] strategy (which case tables).
//! Both strategies expose identical signatures so call sites never need
//! to know whether they are ordinal or locale-aware.

use std::fmt;
use std::str::FromStr;

use strum_macros::Display;

use crate::error::Error;

/// The available case folding algorithms.
///
/// Word splitting (for `Title`, `Camel` and `Pascal`) is done on the ASCII
/// space character only; empty segments produced by consecutive spaces are
/// dropped. `Snake` and `Kebab` operate on the whole lowered string rather
/// than per word.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum CaseVariant {
    /// Upper-cases the first letter of every word, lower-cases the rest,
    /// preserving the original word boundaries.
    #[strum(serialize = "capitalize")]
    Capitalize,
    #[strum(serialize = "lower")]
    Lower,
    #[strum(serialize = "upper")]
    Upper,
    /// Lowers the string, capitalizes each word, rejoins with single spaces.
    #[strum(serialize = "title")]
    Title,
    /// Lowers the string, then upper-cases only the very first character.
    #[strum(serialize = "sentence")]
    Sentence,
    #[strum(serialize = "camel")]
    Camel,
    #[strum(serialize = "pascal")]
    Pascal,
    #[strum(serialize = "snake")]
    Snake,
    #[strum(serialize = "kebab")]
    Kebab,
}

impl FromStr for CaseVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "capitalize" => Ok(CaseVariant::Capitalize),
            "lower" => Ok(CaseVariant::Lower),
            "upper" => Ok(CaseVariant::Upper),
            "title" => Ok(CaseVariant::Title),
            "sentence" => Ok(CaseVariant::Sentence),
            "camel" => Ok(CaseVariant::Camel),
            "pascal" => Ok(CaseVariant::Pascal),
            "snake" => Ok(CaseVariant::Snake),
            "kebab" => Ok(CaseVariant::Kebab),
            _ => Err(Error::UnknownCaseVariant(s.to_owned())),
        }
    }
}

/// A language tag (BCP-47 style) driving locale-aware casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale(String);

impl Locale {
    pub fn new<T: Into<String>>(tag: T) -> Self {
        Locale(tag.into())
    }

    pub fn tag(&self) -> &str {
        &self.0
    }

    /// True for languages with the dotted/dotless-i casing rule.
    fn is_turkic(&self) -> bool {
        let primary = self.0.split(['-', '_']).next().unwrap_or("");
        primary.eq_ignore_ascii_case("tr") || primary.eq_ignore_ascii_case("az")
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale("und".to_owned())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The case table strategy used by every lower/upper/capitalize step.
///
/// `Ordinal` uses ASCII-biased tables: non-ASCII letters pass through
/// unchanged. `LocaleAware` uses the Unicode default case mapping, with
/// the Turkic dotted/dotless-i rule applied when the carried locale is
/// `tr` or `az`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Casing {
    #[default]
    Ordinal,
    LocaleAware(Locale),
}

impl Casing {
    fn push_lower(&self, c: char, out: &mut String) {
        match self {
            Casing::Ordinal => out.push(c.to_ascii_lowercase()),
            Casing::LocaleAware(locale) => {
                if locale.is_turkic() && c == 'I' {
                    out.push('ı');
                } else if locale.is_turkic() && c == 'İ' {
                    out.push('i');
                } else {
                    out.extend(c.to_lowercase());
                }
            }
        }
    }

    fn push_upper(&self, c: char, out: &mut String) {
        match self {
            Casing::Ordinal => out.push(c.to_ascii_uppercase()),
            Casing::LocaleAware(locale) => {
                if locale.is_turkic() && c == 'i' {
                    out.push('İ');
                } else {
                    out.extend(c.to_uppercase());
                }
            }
        }
    }

    /// Lower-cases the whole string with this strategy's tables.
    pub fn lower(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for c in input.chars() {
            self.push_lower(c, &mut out);
        }
        out
    }

    /// Upper-cases the whole string with this strategy's tables.
    pub fn upper(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for c in input.chars() {
            self.push_upper(c, &mut out);
        }
        out
    }

    /// Capitalizes a single word: first letter up, remainder lowered.
    /// Leading non-alphabetic characters pass through unchanged, so
    /// `"(hello"` becomes `"(Hello"` and `"'tis"` becomes `"'Tis"`.
    pub fn capitalize_word(&self, word: &str) -> String {
        let mut out = String::with_capacity(word.len());
        let mut chars = word.chars();
        for c in chars.by_ref() {
            if c.is_alphabetic() {
                self.push_upper(c, &mut out);
                break;
            }
            out.push(c);
        }
        for c in chars {
            self.push_lower(c, &mut out);
        }
        out
    }

    /// Capitalizes every space-delimited word in place, preserving the
    /// original boundaries (consecutive spaces are kept as-is). As with
    /// [`capitalize_word`](Casing::capitalize_word), the character that
    /// gets upper-cased is the first letter of each word, not its first
    /// character.
    pub fn capitalize_words(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut at_word_start = true;
        for c in input.chars() {
            if c == ' ' {
                out.push(c);
                at_word_start = true;
            } else if at_word_start && c.is_alphabetic() {
                self.push_upper(c, &mut out);
                at_word_start = false;
            } else if at_word_start {
                out.push(c);
            } else {
                self.push_lower(c, &mut out);
            }
        }
        out
    }
}

/// Folds `input` with the given case variant and casing strategy.
///
/// Total over any valid UTF-8 input, including the empty string.
///
/// # Arguments
///
/// * `input` - The string to fold
/// * `variant` - The folding algorithm to apply
/// * `casing` - The case table strategy (ordinal or locale-aware)
///
/// # Returns
///
/// The folded string
///
/// # Examples
///
/// ```
/// use textform::case::{fold, CaseVariant, Casing};
///
/// assert_eq!(fold("john", CaseVariant::Capitalize, &Casing::Ordinal), "John");
/// assert_eq!(fold("Property Wrappers", CaseVariant::Camel, &Casing::Ordinal), "propertyWrappers");
/// ```
pub fn fold(input: &str, variant: CaseVariant, casing: &Casing) -> String {
    match variant {
        CaseVariant::Capitalize => casing.capitalize_words(input),
        CaseVariant::Lower => casing.lower(input),
        CaseVariant::Upper => casing.upper(input),
        CaseVariant::Title => words(&casing.lower(input))
            .map(|w| casing.capitalize_word(w))
            .collect::<Vec<_>>()
            .join(" "),
        CaseVariant::Sentence => {
            let lowered = casing.lower(input);
            let mut chars = lowered.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::with_capacity(lowered.len());
                    casing.push_upper(first, &mut out);
                    out.push_str(chars.as_str());
                    out
                }
                None => lowered,
            }
        }
        CaseVariant::Camel => words(&casing.lower(input))
            .enumerate()
            .map(|(i, w)| {
                if i == 0 {
                    w.to_owned()
                } else {
                    casing.capitalize_word(w)
                }
            })
            .collect(),
        CaseVariant::Pascal => words(&casing.lower(input))
            .map(|w| casing.capitalize_word(w))
            .collect(),
        CaseVariant::Snake => casing.lower(input).replace(' ', "_"),
        CaseVariant::Kebab => casing.lower(input).replace(' ', "-"),
    }
}

/// Splits on ASCII spaces, dropping empty segments.
fn words(input: &str) -> impl Iterator<Item = &str> {
    input.split(' ').filter(|w| !w.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(fold("john", CaseVariant::Capitalize, &Casing::Ordinal), "John");
        assert_eq!(
            fold("john DOE", CaseVariant::Capitalize, &Casing::Ordinal),
            "John Doe"
        );
        // Original word boundaries are preserved
        assert_eq!(
            fold("  hello  world ", CaseVariant::Capitalize, &Casing::Ordinal),
            "  Hello  World "
        );
        assert_eq!(fold("", CaseVariant::Capitalize, &Casing::Ordinal), "");
    }

    #[test]
    fn test_capitalize_first_letter_behind_punctuation() {
        // The first letter of each word is upper-cased, not its first character
        assert_eq!(
            fold("(hello world)", CaseVariant::Capitalize, &Casing::Ordinal),
            "(Hello World)"
        );
        assert_eq!(
            fold("'tis here", CaseVariant::Capitalize, &Casing::Ordinal),
            "'Tis Here"
        );
        assert_eq!(
            fold("3d print", CaseVariant::Capitalize, &Casing::Ordinal),
            "3D Print"
        );
        // Words with no letter at all pass through unchanged
        assert_eq!(
            fold("123 --- abc", CaseVariant::Capitalize, &Casing::Ordinal),
            "123 --- Abc"
        );
    }

    #[test]
    fn test_title_and_camel_behind_punctuation() {
        assert_eq!(
            fold("'tis HERE", CaseVariant::Title, &Casing::Ordinal),
            "'Tis Here"
        );
        assert_eq!(
            fold("foo (bar)", CaseVariant::Camel, &Casing::Ordinal),
            "foo(Bar)"
        );
        assert_eq!(
            fold("'tis here", CaseVariant::Pascal, &Casing::Ordinal),
            "'TisHere"
        );
    }

    #[test]
    fn test_lower_and_upper() {
        assert_eq!(fold("DOE", CaseVariant::Lower, &Casing::Ordinal), "doe");
        assert_eq!(fold("doe", CaseVariant::Upper, &Casing::Ordinal), "DOE");
        // Ordinal tables leave non-ASCII letters untouched
        assert_eq!(fold("ÉCOLE", CaseVariant::Lower, &Casing::Ordinal), "École");
        assert_eq!(
            fold("ÉCOLE", CaseVariant::Lower, &Casing::LocaleAware(Locale::default())),
            "école"
        );
    }

    #[test]
    fn test_lower_upper_idempotent() {
        for s in ["MiXeD Case 123", "", "école", "ALL CAPS"] {
            let once = fold(s, CaseVariant::Lower, &Casing::Ordinal);
            assert_eq!(fold(&once, CaseVariant::Lower, &Casing::Ordinal), once);
            let once = fold(s, CaseVariant::Upper, &Casing::Ordinal);
            assert_eq!(fold(&once, CaseVariant::Upper, &Casing::Ordinal), once);
        }
    }

    #[test]
    fn test_title() {
        assert_eq!(
            fold("welcome JOHN DOe", CaseVariant::Title, &Casing::Ordinal),
            "Welcome John Doe"
        );
        // Consecutive spaces collapse to single separators
        assert_eq!(
            fold("  hello   world  ", CaseVariant::Title, &Casing::Ordinal),
            "Hello World"
        );
    }

    #[test]
    fn test_sentence() {
        assert_eq!(
            fold(
                "thE qUiCk BrOwN fOx jUmPs OvEr ThE lAzY dOg",
                CaseVariant::Sentence,
                &Casing::Ordinal
            ),
            "The quick brown fox jumps over the lazy dog"
        );
        assert_eq!(fold("", CaseVariant::Sentence, &Casing::Ordinal), "");
    }

    #[test]
    fn test_camel_and_pascal() {
        assert_eq!(
            fold("Property Wrappers", CaseVariant::Camel, &Casing::Ordinal),
            "propertyWrappers"
        );
        assert_eq!(
            fold("Property Wrappers", CaseVariant::Pascal, &Casing::Ordinal),
            "PropertyWrappers"
        );
        assert_eq!(fold("single", CaseVariant::Camel, &Casing::Ordinal), "single");
    }

    #[test]
    fn test_snake_and_kebab() {
        assert_eq!(
            fold(
                "thE qUiCk BrOwN fOx jUmPs OvEr ThE lAzY dOg",
                CaseVariant::Snake,
                &Casing::Ordinal
            ),
            "the_quick_brown_fox_jumps_over_the_lazy_dog"
        );
        assert_eq!(
            fold(
                "thE qUiCk BrOwN fOx jUmPs OvEr ThE lAzY dOg",
                CaseVariant::Kebab,
                &Casing::Ordinal
            ),
            "the-quick-brown-fox-jumps-over-the-lazy-dog"
        );
        // Spaces are replaced wholesale, including consecutive ones
        assert_eq!(fold("a  b", CaseVariant::Snake, &Casing::Ordinal), "a__b");
    }

    #[test]
    fn test_turkic_locale() {
        let turkish = Casing::LocaleAware(Locale::new("tr-TR"));
        assert_eq!(fold("i", CaseVariant::Upper, &turkish), "İ");
        assert_eq!(fold("I", CaseVariant::Lower, &turkish), "ı");
        assert_eq!(fold("İ", CaseVariant::Lower, &turkish), "i");
        // Non-Turkic locales keep the default mapping
        let english = Casing::LocaleAware(Locale::new("en-US"));
        assert_eq!(fold("i", CaseVariant::Upper, &english), "I");
    }

    #[test]
    fn test_variant_parse_and_display() {
        assert_eq!("title".parse::<CaseVariant>().unwrap(), CaseVariant::Title);
        assert_eq!(CaseVariant::Kebab.to_string(), "kebab");
        assert!("shouting".parse::<CaseVariant>().is_err());
    }
}
