//! Utilities for splitting and joining display names.

/// A display name decomposed into its form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    /// First whitespace-separated token of the display name.
    pub first_name: String,
    /// Everything after the first token, rejoined with single spaces.
    pub last_name: String,
}

/// Split a display name into a first name and the remainder.
///
/// The input is trimmed and split on whitespace. The first token becomes
/// `first_name` (empty when the input is blank); all remaining tokens are
/// rejoined with single spaces as `last_name`. Middle names therefore land
/// in `last_name` — the split is "first token vs. rest", not "first vs.
/// last".
///
/// ```
/// use client::domain::name::split_full_name;
///
/// let name = split_full_name("Leanne Graham");
/// assert_eq!(name.first_name, "Leanne");
/// assert_eq!(name.last_name, "Graham");
/// ```
#[must_use]
pub fn split_full_name(full_name: &str) -> PersonName {
    let mut tokens = full_name.split_whitespace();
    let first_name = tokens.next().unwrap_or_default().to_owned();
    let last_name = tokens.collect::<Vec<_>>().join(" ");
    PersonName {
        first_name,
        last_name,
    }
}

/// Join form fields back into a display name.
///
/// Concatenates with one space and trims, so a blank `last_name` produces no
/// trailing space.
///
/// ```
/// use client::domain::name::combine_name;
///
/// assert_eq!(combine_name("Alice", ""), "Alice");
/// assert_eq!(combine_name("John", "Doe"), "John Doe");
/// ```
#[must_use]
pub fn combine_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}").trim().to_owned()
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("John Doe", "John", "Doe")]
    #[case("Alice", "Alice", "")]
    #[case("", "", "")]
    #[case("   ", "", "")]
    #[case("  Mary Jane Watson  ", "Mary", "Jane Watson")]
    fn splits_first_token_from_remainder(
        #[case] full_name: &str,
        #[case] first_name: &str,
        #[case] last_name: &str,
    ) {
        let name = split_full_name(full_name);
        assert_eq!(name.first_name, first_name);
        assert_eq!(name.last_name, last_name);
    }

    #[rstest]
    #[case("John", "Doe", "John Doe")]
    #[case("Alice", "", "Alice")]
    #[case("", "Doe", "Doe")]
    #[case("", "", "")]
    fn combines_without_dangling_spaces(
        #[case] first_name: &str,
        #[case] last_name: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(combine_name(first_name, last_name), expected);
    }

    #[rstest]
    #[case("Leanne", "Graham")]
    #[case("Alice", "")]
    #[case("Clementine", "Bauch")]
    fn split_inverts_combine_for_single_token_parts(
        #[case] first_name: &str,
        #[case] last_name: &str,
    ) {
        let name = split_full_name(&combine_name(first_name, last_name));
        assert_eq!(name.first_name, first_name);
        assert_eq!(name.last_name, last_name);
    }
}
