//! `$name` placeholder substitution for HTML, CSS and script skeletons
//!
//! Skeletons use `$name` or `${name}` placeholders. Bound names are replaced,
//! unbound ones are left verbatim so a later tier (or the browser, for
//! JavaScript template literals such as `${page}`) can still see them.
//! `$$` is an escaped dollar sign.

use std::collections::HashMap;

use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq)]
enum Piece<'s> {
    #[token("$$")]
    Escaped,

    #[regex(r"\$\{[_a-zA-Z][_a-zA-Z0-9]*\}", braced)]
    Braced(&'s str),

    #[regex(r"\$[_a-zA-Z][_a-zA-Z0-9]*", named)]
    Named(&'s str),

    #[token("$")]
    Dollar,

    #[regex(r"[^$]+", text)]
    Text(&'s str),
}

fn braced<'s>(lex: &mut logos::Lexer<'s, Piece<'s>>) -> &'s str {
    let s = lex.slice();
    &s[2..s.len() - 1]
}

fn named<'s>(lex: &mut logos::Lexer<'s, Piece<'s>>) -> &'s str {
    &lex.slice()[1..]
}

fn text<'s>(lex: &mut logos::Lexer<'s, Piece<'s>>) -> &'s str {
    lex.slice()
}

/// Placeholder values for one substitution pass
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: HashMap<String, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing an earlier binding
    pub fn set(&mut self, name: impl Into<String>, value: impl ToString) -> &mut Self {
        self.values.insert(name.into(), value.to_string());
        self
    }

    /// Builder form of [`Bindings::set`]
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|s| s.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Substitute these bindings into `skeleton`
    pub fn apply(&self, skeleton: &str) -> String {
        substitute(skeleton, self)
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bindings = Bindings::new();
        for (k, v) in iter {
            bindings.set(k, v);
        }
        bindings
    }
}

/// Replace every bound placeholder in `skeleton`
pub fn substitute(skeleton: &str, bindings: &Bindings) -> String {
    let mut out = String::with_capacity(skeleton.len());
    let mut lexer = Piece::lexer(skeleton);
    while let Some(piece) = lexer.next() {
        match piece {
            Ok(Piece::Text(text)) => out.push_str(text),
            Ok(Piece::Escaped) => out.push('$'),
            Ok(Piece::Dollar) => out.push('$'),
            Ok(Piece::Named(name)) | Ok(Piece::Braced(name)) => match bindings.get(name) {
                Some(value) => out.push_str(value),
                None => out.push_str(lexer.slice()),
            },
            // Unreachable with the patterns above, but never drop input
            Err(()) => out.push_str(lexer.slice()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings() -> Bindings {
        Bindings::new()
            .with("title", "Hello")
            .with("slide_position", 3)
    }

    #[test]
    fn test_named_and_braced() {
        let out = substitute("<h1>$title</h1> #slide_${slide_position}", &bindings());
        assert_eq!(out, "<h1>Hello</h1> #slide_3");
    }

    #[test]
    fn test_unbound_left_verbatim() {
        let out = substitute("`#slide_${page}` $missing", &bindings());
        assert_eq!(out, "`#slide_${page}` $missing");
    }

    #[test]
    fn test_escaped_and_lone_dollar() {
        let out = substitute("costs $$5 or $ 6 or ${ x}", &bindings());
        assert_eq!(out, "costs $5 or $ 6 or ${ x}");
    }

    #[test]
    fn test_identifier_ends_at_non_word() {
        let out = substitute("$title-text $title_text", &bindings());
        assert_eq!(out, "Hello-text $title_text");
    }

    #[test]
    fn test_values_not_rescanned() {
        let b = Bindings::new().with("a", "$b").with("b", "nope");
        assert_eq!(substitute("[$a]", &b), "[$b]");
    }

    #[test]
    fn test_multiline_text() {
        let out = substitute("line one\n$title\nline three", &bindings());
        assert_eq!(out, "line one\nHello\nline three");
    }
}
