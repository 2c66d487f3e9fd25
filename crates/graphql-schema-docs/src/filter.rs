//! What counts as user-defined when documenting a whole schema, and in which
//! order it is listed.

use std::cmp::Ordering;

/// Scalars every GraphQL schema provides.
pub const BUILTIN_SCALARS: &[&str] = &["String", "Boolean", "Int", "Float", "ID"];

/// Directives defined by the GraphQL specification itself.
pub const SPECIFIED_DIRECTIVES: &[&str] = &["skip", "include", "deprecated"];

const INTROSPECTION_PREFIX: &str = "__";

pub fn is_user_directive(name: &str) -> bool {
    !SPECIFIED_DIRECTIVES.contains(&name)
}

pub fn is_user_type(name: &str) -> bool {
    !name.starts_with(INTROSPECTION_PREFIX) && !BUILTIN_SCALARS.contains(&name)
}

/// Orders names the way a root-locale collation does: whitespace, then
/// punctuation, then digits, then letters, letters compared without regard
/// to case. Names equal under that comparison put lowercase before uppercase,
/// and remaining ties fall back to code point order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(collation_key)
        .cmp(b.chars().map(collation_key))
        .then_with(|| a.chars().map(char::is_uppercase).cmp(b.chars().map(char::is_uppercase)))
        .then_with(|| a.cmp(b))
}

fn collation_key(c: char) -> (u8, char) {
    let class = if c.is_whitespace() {
        0
    } else if c.is_alphabetic() {
        3
    } else if c.is_numeric() {
        2
    } else {
        1
    };

    (class, c.to_lowercase().next().unwrap_or(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("__Schema", false)]
    #[case("__TypeKind", false)]
    #[case("String", false)]
    #[case("Boolean", false)]
    #[case("Int", false)]
    #[case("Float", false)]
    #[case("ID", false)]
    #[case("Widget", true)]
    #[case("_Any", true)]
    #[case("string", true)]
    fn user_types(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_user_type(name), expected);
    }

    #[rstest]
    #[case("skip", false)]
    #[case("include", false)]
    #[case("deprecated", false)]
    #[case("cached", true)]
    #[case("specifiedBy", true)]
    fn user_directives(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_user_directive(name), expected);
    }

    #[test]
    fn locale_order() {
        let mut names = vec!["beta", "Zebra", "_Private", "alpha", "Beta", "Item2", "Item10", "apple", "Apple"];

        names.sort_by(|a, b| locale_cmp(a, b));

        assert_eq!(
            names,
            ["_Private", "alpha", "apple", "Apple", "beta", "Beta", "Item10", "Item2", "Zebra"]
        );
    }

    #[test]
    fn equal_names_compare_equal() {
        assert_eq!(locale_cmp("Widget", "Widget"), Ordering::Equal);
    }
}
