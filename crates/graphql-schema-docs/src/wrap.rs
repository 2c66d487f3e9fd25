//! Greedy word wrapping of description text.

/// Splits `text` on whitespace and packs the words into lines of at most
/// `width` characters, joined by single spaces.
///
/// Words are never broken: a word longer than `width` gets a line of its own.
/// Empty or blank input yields no lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();

        if line.is_empty() {
            line.push_str(word);
            line_width = word_width;
        } else if line_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_width = word_width;
        } else {
            line.push(' ');
            line.push_str(word);
            line_width += 1 + word_width;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TEXTS: &[&str] = &[
        "",
        "   \n\t ",
        "one",
        "The quick brown fox jumps over the lazy dog",
        "  leading and   irregular\twhitespace\n\nacross lines  ",
        "a supercalifragilisticexpialidocious word in the middle",
        "Ünïcödé wörds are measured in characters, not bytes",
    ];

    #[rstest]
    #[case("", 10, &[])]
    #[case("  \n ", 10, &[])]
    #[case("hello world", 11, &["hello world"])]
    #[case("hello world", 10, &["hello", "world"])]
    #[case("a b c d e", 3, &["a b", "c d", "e"])]
    #[case("tiny enormousword tiny", 5, &["tiny", "enormousword", "tiny"])]
    #[case("héllo wörld", 11, &["héllo wörld"])]
    fn wraps(#[case] text: &str, #[case] width: usize, #[case] expected: &[&str]) {
        assert_eq!(wrap(text, width), expected);
    }

    #[test]
    fn lines_fit_the_width() {
        for text in TEXTS {
            for width in 1..=20 {
                let lines = wrap(text, width);

                for line in &lines {
                    let fits = line.chars().count() <= width;
                    let single_long_word = !line.contains(' ');

                    assert!(fits || single_long_word, "{line:?} is too wide for {width}");
                }
            }
        }
    }

    #[test]
    fn joining_lines_restores_normalized_text() {
        for text in TEXTS {
            let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");

            for width in 1..=20 {
                assert_eq!(wrap(text, width).join(" "), normalized);
            }
        }
    }

    #[test]
    fn wrapping_is_idempotent() {
        for text in TEXTS {
            for width in 1..=20 {
                let once = wrap(text, width);
                let twice = wrap(&once.join("\n"), width);

                assert_eq!(once, twice);
            }
        }
    }
}
