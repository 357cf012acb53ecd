//! JavaScript tokenizer.
//!
//! Produces the significant tokens of a script (comments and whitespace are
//! dropped) while recording whether a line terminator preceded each token.
//! Literal tokens borrow their exact source text so they can be re-emitted
//! verbatim.
//!
//! Bracket nesting is checked while scanning; template substitutions
//! (`${ ... }`) take part in the same stack so that the `}` closing a
//! substitution resumes the surrounding template.

use super::{MinifyError, MinifyErrorKind};

/// Classification of a significant token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  /// `#!` line at the very start of the script.
  Hashbang,
  /// Identifier, keyword or `#private` name.
  Word,
  Number,
  String,
  /// Template literal without substitutions.
  Template,
  /// `` `...${ ``
  TemplateHead,
  /// `}...${`
  TemplateMiddle,
  /// `` }...` ``
  TemplateTail,
  Regex,
  Punct,
}

/// A significant token borrowed from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
  pub kind: TokenKind,
  pub text: &'a str,
  /// A line terminator (or a comment containing one) separates this token
  /// from the previous one.
  pub newline_before: bool,
}

impl<'a> Token<'a> {
  pub fn punct(text: &'a str, newline_before: bool) -> Self {
    Self {
      kind: TokenKind::Punct,
      text,
      newline_before,
    }
  }

  pub fn is_punct(&self, text: &str) -> bool {
    self.kind == TokenKind::Punct && self.text == text
  }

  pub fn is_word(&self, text: &str) -> bool {
    self.kind == TokenKind::Word && self.text == text
  }
}

/// Punctuators ordered so that the longest match wins.
const PUNCTUATORS: &[&str] = &[
  ">>>=", "...", "===", "!==", "**=", "<<=", ">>=", ">>>", "&&=", "||=", "??=", "=>", "==", "!=", "<=", ">=", "&&",
  "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "**", "{", "}", "(",
  ")", "[", "]", ";", ",", "<", ">", "+", "-", "*", "/", "%", "&", "|", "^", "!", "~", "?", ":", "=", ".",
];

/// Keywords after which a `/` starts a regular expression.
const EXPRESSION_KEYWORDS: &[&str] = &[
  "return",
  "typeof",
  "instanceof",
  "in",
  "of",
  "new",
  "delete",
  "void",
  "throw",
  "case",
  "do",
  "else",
  "yield",
  "await",
  "extends",
];

/// Keywords whose parenthesized header is followed by a statement.
const CONTROL_KEYWORDS: &[&str] = &["if", "while", "for", "with"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Open {
  Paren,
  /// Header of `if`, `while`, `for` or `with`.
  ControlParen,
  Bracket,
  Brace,
  Substitution,
}

impl Open {
  fn opener(self) -> char {
    match self {
      Open::Paren | Open::ControlParen => '(',
      Open::Bracket => '[',
      Open::Brace | Open::Substitution => '{',
    }
  }

  fn closer(self) -> char {
    match self {
      Open::Paren | Open::ControlParen => ')',
      Open::Bracket => ']',
      Open::Brace | Open::Substitution => '}',
    }
  }
}

/// Split `source` into significant tokens.
///
/// # Errors
///
/// Returns a [`MinifyError`] pointing at the offending position for
/// unterminated literals or comments, unknown characters and unbalanced
/// brackets.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, MinifyError> {
  Lexer::new(source).run()
}

pub(crate) fn is_line_terminator(c: char) -> bool {
  matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// ECMAScript `WhiteSpace`: tab, vertical tab, form feed, BOM and the
/// Unicode `Space_Separator` characters.
fn is_whitespace(c: char) -> bool {
  matches!(
    c,
    '\t'
      | '\u{000b}'
      | '\u{000c}'
      | ' '
      | '\u{00a0}'
      | '\u{feff}'
      | '\u{1680}'
      | '\u{2000}'..='\u{200a}'
      | '\u{202f}'
      | '\u{205f}'
      | '\u{3000}'
  )
}

/// Whether a `(` following `tokens` opens the header of `if`, `while`,
/// `for` (including `for await`) or `with`.
pub(crate) fn opens_control_header(tokens: &[Token<'_>]) -> bool {
  let keyword = match tokens {
    [.., for_kw, await_kw] if for_kw.is_word("for") && await_kw.is_word("await") => tokens.len() - 2,
    [.., prev] if prev.kind == TokenKind::Word && CONTROL_KEYWORDS.contains(&prev.text) => tokens.len() - 1,
    _ => return false,
  };
  // `obj.if(x)` is a method call.
  match keyword.checked_sub(1).map(|i| &tokens[i]) {
    Some(before) => !(before.is_punct(".") || before.is_punct("?.")),
    None => true,
  }
}

fn is_id_start(c: char) -> bool {
  c.is_ascii_alphabetic() || c == '_' || c == '$' || c == '\\' || (!c.is_ascii() && c.is_alphabetic())
}

/// Characters that may continue an identifier (or a numeric literal).
pub(crate) fn is_id_continue(c: char) -> bool {
  c.is_ascii_alphanumeric()
    || c == '_'
    || c == '$'
    || c == '\\'
    || (!c.is_ascii() && (c.is_alphanumeric() || c == '\u{200c}' || c == '\u{200d}'))
}

struct Lexer<'a> {
  src: &'a str,
  pos: usize,
  newline: bool,
  stack: Vec<(Open, usize)>,
  tokens: Vec<Token<'a>>,
  /// Index of the last `)` that closed a statement header.
  control_close: Option<usize>,
}

impl<'a> Lexer<'a> {
  fn new(src: &'a str) -> Self {
    Self {
      src,
      pos: 0,
      newline: false,
      stack: Vec::new(),
      tokens: Vec::new(),
      control_close: None,
    }
  }

  fn run(mut self) -> Result<Vec<Token<'a>>, MinifyError> {
    if self.src.starts_with("#!") {
      let end = self.src.find(is_line_terminator).unwrap_or(self.src.len());
      self.pos = end;
      self.push(TokenKind::Hashbang, 0);
    }

    while let Some(c) = self.peek() {
      if is_line_terminator(c) {
        self.newline = true;
        self.bump();
        continue;
      }
      if is_whitespace(c) {
        self.bump();
        continue;
      }

      let start = self.pos;
      match c {
        '/' if self.peek_byte(1) == Some(b'/') => self.line_comment(),
        '/' if self.peek_byte(1) == Some(b'*') => self.block_comment(start)?,
        '/' if self.regex_allowed() => self.regex(start)?,
        '\'' | '"' => self.string(start, c)?,
        '`' => {
          self.bump();
          self.template(start, true)?;
        }
        '0'..='9' => self.number(start),
        '.' if self.peek_byte(1).is_some_and(|b| b.is_ascii_digit()) => self.number(start),
        '#' => self.private_name(start)?,
        '}' if matches!(self.stack.last(), Some((Open::Substitution, _))) => {
          self.stack.pop();
          self.bump();
          self.template(start, false)?;
        }
        c if is_id_start(c) => self.word(start),
        _ => self.punct(start, c)?,
      }
    }

    if let Some(&(open, at)) = self.stack.last() {
      return Err(self.error(MinifyErrorKind::Unclosed(open.opener()), at));
    }

    Ok(self.tokens)
  }

  fn peek(&self) -> Option<char> {
    self.src[self.pos..].chars().next()
  }

  fn peek_byte(&self, offset: usize) -> Option<u8> {
    self.src.as_bytes().get(self.pos + offset).copied()
  }

  fn bump(&mut self) -> Option<char> {
    let c = self.peek()?;
    self.pos += c.len_utf8();
    Some(c)
  }

  fn push(&mut self, kind: TokenKind, start: usize) {
    let newline_before = std::mem::take(&mut self.newline);
    self.tokens.push(Token {
      kind,
      text: &self.src[start..self.pos],
      newline_before,
    });
  }

  fn error(&self, kind: MinifyErrorKind, at: usize) -> MinifyError {
    let before = &self.src[..at];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    MinifyError { kind, line, column }
  }

  /// Decide between a regular expression and a division operator from the
  /// previous significant token.
  fn regex_allowed(&self) -> bool {
    let Some(prev) = self.tokens.last() else {
      return true;
    };
    match prev.kind {
      TokenKind::Word => EXPRESSION_KEYWORDS.contains(&prev.text),
      TokenKind::Number | TokenKind::String | TokenKind::Template | TokenKind::TemplateTail | TokenKind::Regex => false,
      TokenKind::Hashbang | TokenKind::TemplateHead | TokenKind::TemplateMiddle => true,
      // `if (x) /re/.test(s)`: a regex may start a statement body.
      TokenKind::Punct if prev.text == ")" => self.control_close == Some(self.tokens.len() - 1),
      TokenKind::Punct => !matches!(prev.text, "]" | "++" | "--"),
    }
  }

  fn line_comment(&mut self) {
    while let Some(c) = self.peek() {
      if is_line_terminator(c) {
        break;
      }
      self.bump();
    }
  }

  fn block_comment(&mut self, start: usize) -> Result<(), MinifyError> {
    let body_start = start + 2;
    let Some(len) = self.src[body_start..].find("*/") else {
      return Err(self.error(MinifyErrorKind::UnterminatedComment, start));
    };
    if self.src[body_start..body_start + len].contains(is_line_terminator) {
      self.newline = true;
    }
    self.pos = body_start + len + 2;
    Ok(())
  }

  fn string(&mut self, start: usize, quote: char) -> Result<(), MinifyError> {
    self.bump();
    loop {
      match self.bump() {
        None => return Err(self.error(MinifyErrorKind::UnterminatedString, start)),
        Some('\n' | '\r') => return Err(self.error(MinifyErrorKind::UnterminatedString, start)),
        Some('\\') => {
          // Escaped character, including `\` + CRLF line continuations.
          if self.bump() == Some('\r') && self.peek() == Some('\n') {
            self.bump();
          }
        }
        Some(c) if c == quote => break,
        Some(_) => {}
      }
    }
    self.push(TokenKind::String, start);
    Ok(())
  }

  /// Scan template text up to the closing backtick or the next `${`.
  ///
  /// `head` is true when scanning started at a backtick, false when it
  /// resumed after the `}` of a substitution.
  fn template(&mut self, start: usize, head: bool) -> Result<(), MinifyError> {
    loop {
      match self.bump() {
        None => return Err(self.error(MinifyErrorKind::UnterminatedTemplate, start)),
        Some('\\') => {
          self.bump();
        }
        Some('`') => {
          let kind = if head {
            TokenKind::Template
          } else {
            TokenKind::TemplateTail
          };
          self.push(kind, start);
          return Ok(());
        }
        Some('$') if self.peek() == Some('{') => {
          self.bump();
          let kind = if head {
            TokenKind::TemplateHead
          } else {
            TokenKind::TemplateMiddle
          };
          self.push(kind, start);
          self.stack.push((Open::Substitution, self.pos - 2));
          return Ok(());
        }
        Some(_) => {}
      }
    }
  }

  fn regex(&mut self, start: usize) -> Result<(), MinifyError> {
    self.bump();
    let mut in_class = false;
    loop {
      match self.bump() {
        None => return Err(self.error(MinifyErrorKind::UnterminatedRegex, start)),
        Some(c) if is_line_terminator(c) => return Err(self.error(MinifyErrorKind::UnterminatedRegex, start)),
        Some('\\') => match self.bump() {
          Some(c) if !is_line_terminator(c) => {}
          _ => return Err(self.error(MinifyErrorKind::UnterminatedRegex, start)),
        },
        Some('[') => in_class = true,
        Some(']') => in_class = false,
        Some('/') if !in_class => break,
        Some(_) => {}
      }
    }
    while self.peek().is_some_and(is_id_continue) {
      self.bump();
    }
    self.push(TokenKind::Regex, start);
    Ok(())
  }

  fn number(&mut self, start: usize) {
    let radix_prefixed = self.src[start..].len() > 1
      && self.src.as_bytes()[start] == b'0'
      && matches!(self.src.as_bytes()[start + 1], b'x' | b'X' | b'o' | b'O' | b'b' | b'B');

    while let Some(b) = self.peek_byte(0) {
      if !(b.is_ascii_alphanumeric() || b == b'_' || b == b'.') {
        break;
      }
      self.pos += 1;
      if !radix_prefixed && matches!(b, b'e' | b'E') && matches!(self.peek_byte(0), Some(b'+' | b'-')) {
        self.pos += 1;
      }
    }
    self.push(TokenKind::Number, start);
  }

  fn word(&mut self, start: usize) {
    while let Some(c) = self.peek() {
      if !is_id_continue(c) {
        break;
      }
      self.bump();
      // `\u{...}` escapes carry braces that are part of the identifier.
      if c == '\\' && self.peek() == Some('u') && self.peek_byte(1) == Some(b'{') {
        match self.src[self.pos..].find('}') {
          Some(i) => self.pos += i + 1,
          None => break,
        }
      }
    }
    self.push(TokenKind::Word, start);
  }

  fn private_name(&mut self, start: usize) -> Result<(), MinifyError> {
    self.bump();
    match self.peek() {
      Some(c) if is_id_start(c) => {
        self.word(start);
        Ok(())
      }
      _ => Err(self.error(MinifyErrorKind::UnexpectedChar('#'), start)),
    }
  }

  fn punct(&mut self, start: usize, c: char) -> Result<(), MinifyError> {
    let rest = &self.src[start..];
    let Some(matched) = PUNCTUATORS.iter().copied().find(|p| {
      rest.starts_with(p) && !(*p == "?." && rest.as_bytes().get(2).is_some_and(|b| b.is_ascii_digit()))
    }) else {
      return Err(self.error(MinifyErrorKind::UnexpectedChar(c), start));
    };

    let mut closed = None;
    match matched {
      "(" if opens_control_header(&self.tokens) => self.stack.push((Open::ControlParen, start)),
      "(" => self.stack.push((Open::Paren, start)),
      "[" => self.stack.push((Open::Bracket, start)),
      "{" => self.stack.push((Open::Brace, start)),
      ")" | "]" | "}" => closed = Some(self.close(start, c)?),
      _ => {}
    }

    self.pos += matched.len();
    self.push(TokenKind::Punct, start);
    if closed == Some(Open::ControlParen) {
      self.control_close = Some(self.tokens.len() - 1);
    }
    Ok(())
  }

  fn close(&mut self, at: usize, found: char) -> Result<Open, MinifyError> {
    match self.stack.pop() {
      Some((open, _)) if open.closer() == found => Ok(open),
      Some((open, _)) => Err(self.error(
        MinifyErrorKind::MismatchedBracket {
          expected: open.closer(),
          found,
        },
        at,
      )),
      None => Err(self.error(MinifyErrorKind::UnmatchedClose(found), at)),
    }
  }
}
