// Word ordering: ordinal and case-folded comparison of words and characters

use std::cmp::Ordering;

/// Total order over words used by every sorted structure in wordcheck.
///
/// Case sensitivity is a whole-structure policy: a list or tree built with
/// [`WordComparator::CaseInsensitive`] folds characters when comparing but
/// stores words exactly as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordComparator {
    /// Ordinal comparison by Unicode scalar value.
    #[default]
    CaseSensitive,
    /// Comparison after folding every character to a canonical case.
    CaseInsensitive,
}

impl WordComparator {
    /// Select the comparator for a case sensitivity flag.
    pub fn new(case_sensitive: bool) -> Self {
        if case_sensitive {
            Self::CaseSensitive
        } else {
            Self::CaseInsensitive
        }
    }

    /// Whether this comparator distinguishes "A" from "a".
    pub fn is_case_sensitive(self) -> bool {
        self.compare("A", "a") != Ordering::Equal
    }

    /// Map a character to the form used for comparison.
    pub fn fold(self, c: char) -> char {
        match self {
            Self::CaseSensitive => c,
            Self::CaseInsensitive => fold_case(c),
        }
    }

    /// Compare two characters.
    pub fn compare_chars(self, a: char, b: char) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        self.fold(a).cmp(&self.fold(b))
    }

    /// Compare two words character by character; a proper prefix sorts first.
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::CaseSensitive => a.cmp(b),
            Self::CaseInsensitive => {
                let mut left = a.chars();
                let mut right = b.chars();
                loop {
                    match (left.next(), right.next()) {
                        (Some(x), Some(y)) => match self.compare_chars(x, y) {
                            Ordering::Equal => continue,
                            other => return other,
                        },
                        (None, Some(_)) => return Ordering::Less,
                        (Some(_), None) => return Ordering::Greater,
                        (None, None) => return Ordering::Equal,
                    }
                }
            }
        }
    }

    /// Fold a whole word into its comparison form.
    pub fn fold_word(self, word: &str) -> String {
        word.chars().map(|c| self.fold(c)).collect()
    }
}

/// Simple case fold: uppercase then lowercase, keeping only single-character
/// mappings so that comparison stays character-aligned.
fn fold_case(c: char) -> char {
    let upper = single_mapping(c.to_uppercase()).unwrap_or(c);
    single_mapping(upper.to_lowercase()).unwrap_or(upper)
}

fn single_mapping(mut mapping: impl Iterator<Item = char>) -> Option<char> {
    let first = mapping.next()?;
    match mapping.next() {
        Some(_) => None,
        None => Some(first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_orders_uppercase_first() {
        let c = WordComparator::CaseSensitive;
        assert_eq!(c.compare("Zebra", "apple"), Ordering::Less);
        assert_eq!(c.compare("apple", "apple"), Ordering::Equal);
        assert_eq!(c.compare("app", "apple"), Ordering::Less);
    }

    #[test]
    fn folded_ignores_case() {
        let c = WordComparator::CaseInsensitive;
        assert_eq!(c.compare("Zebra", "apple"), Ordering::Greater);
        assert_eq!(c.compare("APPLE", "apple"), Ordering::Equal);
        assert_eq!(c.compare("App", "apple"), Ordering::Less);
        assert_eq!(c.compare("", "a"), Ordering::Less);
    }

    #[test]
    fn case_sensitivity_is_detected_from_ordering() {
        assert!(WordComparator::CaseSensitive.is_case_sensitive());
        assert!(!WordComparator::CaseInsensitive.is_case_sensitive());
        assert_eq!(WordComparator::new(false), WordComparator::CaseInsensitive);
    }

    #[test]
    fn fold_non_ascii() {
        let c = WordComparator::CaseInsensitive;
        assert_eq!(c.compare_chars('Ä', 'ä'), Ordering::Equal);
        assert_eq!(c.compare("ÖLJY", "öljy"), Ordering::Equal);
        // Expanding mappings keep the original character.
        assert_eq!(c.fold('ß'), 'ß');
    }

    #[test]
    fn fold_word_is_identity_when_case_sensitive() {
        assert_eq!(WordComparator::CaseSensitive.fold_word("MiXeD"), "MiXeD");
        assert_eq!(WordComparator::CaseInsensitive.fold_word("MiXeD"), "mixed");
    }
}
