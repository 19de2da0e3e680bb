//! Content editing primitives: replacement, truncation, trimming and
//! reversal. All functions are total over valid UTF-8 input.

use std::collections::BTreeSet;

use unicode_segmentation::UnicodeSegmentation;

/// Default number of grapheme clusters kept by [`truncate`].
pub const DEFAULT_TRUNCATE_LENGTH: usize = 200;

/// The literal appended by [`truncate`] when the ellipsis is enabled.
pub const ELLIPSIS: &str = "...";

/// The set of characters stripped by [`trim`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Any Unicode whitespace character.
    #[default]
    Whitespace,
    /// An explicit set of Unicode scalars.
    Chars(BTreeSet<char>),
}

impl CharSet {
    /// Builds an explicit character set from anything yielding chars.
    ///
    /// # Examples
    ///
    /// ```
    /// use textform::edit::CharSet;
    ///
    /// let set = CharSet::from_chars("-_".chars());
    /// assert!(set.contains('-'));
    /// assert!(!set.contains('a'));
    /// ```
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        CharSet::Chars(chars.into_iter().collect())
    }

    pub fn contains(&self, c: char) -> bool {
        match self {
            CharSet::Whitespace => c.is_whitespace(),
            CharSet::Chars(set) => set.contains(&c),
        }
    }
}

/// Replaces occurrences of `target` with `replacement`.
///
/// With `max_count == 0` every non-overlapping occurrence is replaced,
/// leftmost first, using case-sensitive substring matching.
///
/// With `max_count > 0` the input is scanned character by character and a
/// character is replaced when its lower-cased form equals the lower-cased
/// `target`, until `max_count` replacements have been made. Because the
/// comparison is against the full `target` string, multi-character targets
/// never match in the bounded path. This is a latent defect preserved for
/// compatibility with existing callers; use `max_count == 0` for
/// multi-character targets.
///
/// # Arguments
///
/// * `input` - The string to edit
/// * `target` - The substring (or, bounded, single character) to replace
/// * `replacement` - The replacement text
/// * `max_count` - Maximum number of replacements, `0` for unbounded
///
/// # Examples
///
/// ```
/// use textform::edit::replace;
///
/// assert_eq!(replace("john.doe", ".", "", 0), "johndoe");
/// assert_eq!(replace("john.doe@gmail.com", ".", "", 1), "johndoe@gmail.com");
/// ```
pub fn replace(input: &str, target: &str, replacement: &str, max_count: usize) -> String {
    if max_count == 0 {
        return input.replace(target, replacement);
    }

    let lowered_target = target.to_lowercase();
    let mut replaced = 0;
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if replaced < max_count && c.to_lowercase().eq(lowered_target.chars()) {
            out.push_str(replacement);
            replaced += 1;
        } else {
            out.push(c);
        }
    }
    out
}

/// Keeps the first `length` grapheme clusters of `input`, appending the
/// `...` literal when `show_ellipsis` is set. Truncation is not
/// word-boundary aware and can split mid-word.
///
/// # Examples
///
/// ```
/// use textform::edit::truncate;
///
/// let text = "The quick brown fox jumps over the lazy dog";
/// assert_eq!(truncate(text, 10, true), "The quick ...");
/// assert_eq!(truncate("short", 10, false), "short");
/// ```
pub fn truncate(input: &str, length: usize, show_ellipsis: bool) -> String {
    let mut out: String = input.graphemes(true).take(length).collect();
    if show_ellipsis {
        out.push_str(ELLIPSIS);
    }
    out
}

/// Strips the maximal prefix and suffix made of characters in `set`.
/// Interior characters are untouched regardless of set membership.
pub fn trim(input: &str, set: &CharSet) -> String {
    input
        .trim_start_matches(|c: char| set.contains(c))
        .trim_end_matches(|c: char| set.contains(c))
        .to_owned()
}

/// Reverses the sequence of extended grapheme clusters, keeping combining
/// marks and multi-scalar clusters intact.
///
/// # Examples
///
/// ```
/// use textform::edit::reverse;
///
/// assert_eq!(reverse("abc"), "cba");
/// assert_eq!(reverse("ae\u{301}b"), "be\u{301}a");
/// ```
pub fn reverse(input: &str) -> String {
    input.graphemes(true).rev().collect()
}
