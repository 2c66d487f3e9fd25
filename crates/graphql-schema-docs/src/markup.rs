//! Semantic tagging of the tokens making up rendered definitions.

use std::fmt::{self, Write};

/// Wraps raw tokens into annotated text. Implementations are stateless and
/// accept any string.
pub trait Markup {
    fn keyword(&self, text: &str) -> String;

    /// The name introduced by a definition.
    fn identifier(&self, text: &str) -> String;

    /// Argument names.
    fn parameter(&self, text: &str) -> String;

    /// Field, input field and enum value names.
    fn property(&self, text: &str) -> String;

    /// An already printed GraphQL literal.
    fn string_literal(&self, text: &str) -> String;

    /// One line of comment text, without the comment marker.
    fn comment(&self, text: &str) -> String;

    /// A reference to a named type.
    fn type_link(&self, name: &str, url: &str, title: &str) -> String;
}

/// HTML spans with one class per token role. Text and attribute values are
/// escaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Html;

impl Html {
    fn span(class: &str, text: &str) -> String {
        format!(r#"<span class="{class}">{}</span>"#, Escaped(text))
    }
}

impl Markup for Html {
    fn keyword(&self, text: &str) -> String {
        Self::span("keyword", text)
    }

    fn identifier(&self, text: &str) -> String {
        Self::span("identifier", text)
    }

    fn parameter(&self, text: &str) -> String {
        Self::span("parameter", text)
    }

    fn property(&self, text: &str) -> String {
        Self::span("property", text)
    }

    fn string_literal(&self, text: &str) -> String {
        Self::span("string", text)
    }

    fn comment(&self, text: &str) -> String {
        format!(r#"<span class="comment"># {}</span>"#, Escaped(text))
    }

    fn type_link(&self, name: &str, url: &str, title: &str) -> String {
        format!(
            r#"<a class="type" href="{}" title="{}">{}</a>"#,
            Escaped(url),
            Escaped(title),
            Escaped(name)
        )
    }
}

/// Tokens are emitted as they are. The output is plain SDL-like text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainText;

impl Markup for PlainText {
    fn keyword(&self, text: &str) -> String {
        text.to_owned()
    }

    fn identifier(&self, text: &str) -> String {
        text.to_owned()
    }

    fn parameter(&self, text: &str) -> String {
        text.to_owned()
    }

    fn property(&self, text: &str) -> String {
        text.to_owned()
    }

    fn string_literal(&self, text: &str) -> String {
        text.to_owned()
    }

    fn comment(&self, text: &str) -> String {
        format!("# {text}")
    }

    fn type_link(&self, name: &str, _url: &str, _title: &str) -> String {
        name.to_owned()
    }
}

struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;"),
                '<' => f.write_str("&lt;"),
                '>' => f.write_str("&gt;"),
                '"' => f.write_str("&quot;"),
                '\'' => f.write_str("&#39;"),
                c => f.write_char(c),
            }?;
        }

        Ok(())
    }
}
