//! Print tokens with as little whitespace as possible.

use super::lexer::{Token, TokenKind, is_id_continue};

pub(super) fn emit(tokens: &[Token<'_>]) -> String {
  let mut out = String::with_capacity(tokens.iter().map(|t| t.text.len() + 1).sum());
  let mut prev: Option<&Token<'_>> = None;

  for token in tokens {
    if let Some(p) = prev {
      if p.kind == TokenKind::Hashbang || (token.newline_before && can_end_statement(p) && can_begin_statement(token)) {
        // The line break may be load-bearing for automatic semicolon insertion.
        out.push('\n');
      } else if needs_space(p, token) {
        out.push(' ');
      }
    }
    out.push_str(token.text);
    prev = Some(token);
  }

  out
}

fn can_end_statement(token: &Token<'_>) -> bool {
  match token.kind {
    TokenKind::Word
    | TokenKind::Number
    | TokenKind::String
    | TokenKind::Template
    | TokenKind::TemplateTail
    | TokenKind::Regex => true,
    TokenKind::Punct => matches!(token.text, ")" | "]" | "}" | "++" | "--"),
    TokenKind::Hashbang | TokenKind::TemplateHead | TokenKind::TemplateMiddle => false,
  }
}

fn can_begin_statement(token: &Token<'_>) -> bool {
  match token.kind {
    TokenKind::Word
    | TokenKind::Number
    | TokenKind::String
    | TokenKind::Template
    | TokenKind::TemplateHead
    | TokenKind::Regex => true,
    TokenKind::Punct => matches!(token.text, "(" | "[" | "{" | "+" | "-" | "++" | "--" | "!" | "~"),
    TokenKind::Hashbang | TokenKind::TemplateMiddle | TokenKind::TemplateTail => false,
  }
}

/// Whether printing `next` directly after `prev` would fuse them into
/// different tokens.
fn needs_space(prev: &Token<'_>, next: &Token<'_>) -> bool {
  let (Some(a), Some(b)) = (prev.text.chars().last(), next.text.chars().next()) else {
    return false;
  };

  if is_id_continue(b) && (is_id_continue(a) || prev.kind == TokenKind::Regex) {
    return true;
  }

  match (a, b) {
    ('+', '+') | ('-', '-') => true,
    // `a / /re/` must not turn into a line comment.
    ('/', '/' | '*') => true,
    // `<!--` and `-->` open and close HTML-like comments in scripts.
    ('<', '!') => true,
    ('-', '>') => prev.text.ends_with("--"),
    // `1 .toString()` would otherwise read as `1.` followed by an identifier.
    (_, '.') => prev.kind == TokenKind::Number && prev.text.bytes().all(|c| c.is_ascii_digit() || c == b'_'),
    _ => false,
  }
}

#[cfg(test)]
mod tests {
  use super::super::{MinifyOptions, minify};

  fn run(source: &str) -> String {
    minify(source, &MinifyOptions::default()).unwrap()
  }

  #[test]
  fn words_stay_apart() {
    assert_eq!(run("var  x = typeof  y"), "var x=typeof y");
    assert_eq!(run("return /re/g in  o"), "return/re/g in o");
  }

  #[test]
  fn operators_that_would_fuse_are_spaced() {
    assert_eq!(run("a + +b"), "a+ +b");
    assert_eq!(run("a - -b"), "a- -b");
    assert_eq!(run("a - - b"), "a- -b");
    assert_eq!(run("x = a / /re/.source.length"), "x=a/ /re/.source.length");
    assert_eq!(run("a < !--b"), "a< !--b");
  }

  #[test]
  fn integer_member_access_keeps_space() {
    assert_eq!(run("1 .toString()"), "1 .toString()");
    assert_eq!(run("1.5 .toFixed()"), "1.5.toFixed()");
  }

  #[test]
  fn line_breaks_kept_for_asi() {
    assert_eq!(run("a = b\n(c)"), "a=b\n(c)");
    assert_eq!(run("return\nvalue"), "return\nvalue");
    assert_eq!(run("let a = 1\nlet b = 2"), "let a=1\nlet b=2");
    assert_eq!(run("i\n++\nj"), "i\n++\nj");
  }

  #[test]
  fn line_breaks_dropped_where_not_needed() {
    assert_eq!(run("foo(\n  a,\n  b\n)"), "foo(a,b)");
    assert_eq!(run("x = {\n  a: 1\n}\n"), "x={a:1}");
    assert_eq!(run("a\n.b\n.c()"), "a.b.c()");
  }

  #[test]
  fn hashbang_keeps_its_own_line() {
    assert_eq!(run("#!/usr/bin/env node\n\nmain()"), "#!/usr/bin/env node\nmain()");
  }

  #[test]
  fn literals_are_verbatim() {
    assert_eq!(run("s = 'a  b' + \"c\\\"d\" + `e ${ f } g`"), "s='a  b'+\"c\\\"d\"+`e ${f} g`");
  }
}
