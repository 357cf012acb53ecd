//! Statement-level rewrites on the token stream.
//!
//! Each rewrite only fires where the matched tokens are certainly a whole
//! statement. A statement removed from a statement list leaves nothing
//! behind, or an empty statement `;` when the next line could otherwise
//! glue onto the previous expression. A statement removed from the body of
//! `if`, `else`, a loop or a label is always replaced by `;`.

use super::MinifyOptions;
use super::lexer::{Token, TokenKind, opens_control_header};

/// Operator keywords that cannot end an expression.
const OPERATOR_KEYWORDS: &[&str] = &["in", "instanceof", "typeof", "new", "delete", "void", "of", "extends"];

enum Rewrite {
  /// Remove `tokens[start..end]` entirely.
  Drop { end: usize },
  /// Remove `tokens[start..end]` and keep processing the remainder, which
  /// is itself a statement (the `else` branch of a folded `if`).
  Unwrap { end: usize },
}

/// Where a statement starts, relative to its enclosing construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
  /// Script, block or `case` clause.
  List,
  /// The single statement required by `if (..)`, `else`, a loop or a label.
  Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
  Paren,
  /// Header of `if`, `while`, `for` or `with`.
  Control,
  Bracket,
  Block,
  Object,
  Class,
  Substitution,
}

impl Group {
  /// Statements cannot start directly inside this group.
  fn is_expression(self) -> bool {
    !matches!(self, Group::Block)
  }
}

/// Nesting state of the tokens emitted so far.
#[derive(Default)]
struct Scope {
  groups: Vec<Group>,
  /// The last emitted token is the `)` of a statement header.
  after_control: bool,
  /// Depth at which a `class` keyword awaits its body.
  class_at: Option<usize>,
}

impl Scope {
  fn in_expression(&self) -> bool {
    self.groups.last().is_some_and(|g| g.is_expression())
  }

  /// Record `token`, which is about to be appended to `out`.
  fn track(&mut self, out: &[Token<'_>], token: &Token<'_>) {
    self.after_control = false;
    match token.kind {
      TokenKind::Punct if token.text == "(" => {
        let group = if opens_control_header(out) {
          Group::Control
        } else {
          Group::Paren
        };
        self.groups.push(group);
      }
      TokenKind::Punct if token.text == "[" => self.groups.push(Group::Bracket),
      TokenKind::Punct if token.text == "{" => {
        let group = if self.class_at == Some(self.groups.len()) {
          self.class_at = None;
          Group::Class
        } else {
          brace_group(out.last())
        };
        self.groups.push(group);
      }
      TokenKind::Punct if matches!(token.text, ")" | "]" | "}") => {
        self.after_control = self.groups.pop() == Some(Group::Control);
      }
      TokenKind::Word if token.text == "class" && !follows_dot(out) => self.class_at = Some(self.groups.len()),
      TokenKind::TemplateHead => self.groups.push(Group::Substitution),
      TokenKind::TemplateTail => {
        self.groups.pop();
      }
      _ => {}
    }
  }
}

fn follows_dot(out: &[Token<'_>]) -> bool {
  out.last().is_some_and(|t| t.is_punct(".") || t.is_punct("?."))
}

/// Block or object literal, judged by the token before `{`.
fn brace_group(prev: Option<&Token<'_>>) -> Group {
  let Some(prev) = prev else {
    return Group::Block;
  };
  match prev.kind {
    TokenKind::Hashbang => Group::Block,
    TokenKind::Punct if matches!(prev.text, ";" | "{" | "}" | ")" | "=>") => Group::Block,
    TokenKind::Word if matches!(prev.text, "else" | "do" | "try" | "catch" | "finally") => Group::Block,
    _ => Group::Object,
  }
}

pub(super) fn compress<'a>(tokens: Vec<Token<'a>>, options: &MinifyOptions) -> Vec<Token<'a>> {
  let mut out: Vec<Token<'a>> = Vec::with_capacity(tokens.len());
  let mut scope = Scope::default();
  let mut pending_newline = false;
  let mut i = 0;

  while i < tokens.len() {
    let token = tokens[i];
    let slot = if scope.in_expression() {
      None
    } else {
      statement_slot(out.last(), &token, token.newline_before || pending_newline, scope.after_control)
    };

    let rewrite = slot.and_then(|slot| Some((slot, match_rewrite(&tokens, i, options)?)));

    let Some((slot, rewrite)) = rewrite else {
      scope.track(&out, &token);
      out.push(Token {
        newline_before: token.newline_before || std::mem::take(&mut pending_newline),
        ..token
      });
      i += 1;
      continue;
    };

    let (end, leave_empty) = match rewrite {
      Rewrite::Drop { end } => (end, slot == Slot::Body || needs_empty_statement(out.last())),
      // The alternative takes the place of the folded statement.
      Rewrite::Unwrap { end } => (end, slot == Slot::List && needs_empty_statement(out.last())),
    };
    pending_newline |= tokens[i..end].iter().any(|t| t.newline_before);
    if leave_empty {
      let empty = Token::punct(";", std::mem::take(&mut pending_newline));
      scope.track(&out, &empty);
      out.push(empty);
    }
    i = end;
  }

  out
}

fn match_rewrite(tokens: &[Token<'_>], i: usize, options: &MinifyOptions) -> Option<Rewrite> {
  let token = &tokens[i];
  if token.kind != TokenKind::Word {
    return None;
  }
  match token.text {
    "debugger" if options.drop_debugger => debugger_statement(tokens, i),
    "console" if options.drop_console => console_statement(tokens, i),
    "if" if options.dead_code => constant_false_if(tokens, i),
    _ => None,
  }
}

/// `debugger` ended by `;`, `}`, a line break or the end of input.
fn debugger_statement(tokens: &[Token<'_>], i: usize) -> Option<Rewrite> {
  match tokens.get(i + 1) {
    None => Some(Rewrite::Drop { end: i + 1 }),
    Some(next) if next.is_punct(";") => Some(Rewrite::Drop { end: i + 2 }),
    Some(next) if next.is_punct("}") || next.newline_before => Some(Rewrite::Drop { end: i + 1 }),
    // `debugger = 1`, `debugger() {}`
    Some(_) => None,
  }
}

/// `console.<method>(...)` terminated by `;`, `}` or the end of input.
fn console_statement(tokens: &[Token<'_>], i: usize) -> Option<Rewrite> {
  let dot = tokens.get(i + 1)?;
  let method = tokens.get(i + 2)?;
  let open = tokens.get(i + 3)?;
  if !dot.is_punct(".") || method.kind != TokenKind::Word || !open.is_punct("(") {
    return None;
  }

  let after_call = skip_group(tokens, i + 3)?;
  match tokens.get(after_call) {
    None => Some(Rewrite::Drop { end: after_call }),
    Some(next) if next.is_punct(";") => Some(Rewrite::Drop { end: after_call + 1 }),
    Some(next) if next.is_punct("}") => Some(Rewrite::Drop { end: after_call }),
    Some(_) => None,
  }
}

/// `if (false) { ... }` with an optional `else`.
///
/// Only braced consequents are folded. With an `else`, the `if` part and
/// the `else` keyword go away and the alternative becomes a statement of
/// its own.
fn constant_false_if(tokens: &[Token<'_>], i: usize) -> Option<Rewrite> {
  if !tokens.get(i + 1)?.is_punct("(") {
    return None;
  }
  let after_test = skip_group(tokens, i + 1)?;
  if !is_constant_false(&tokens[i + 2..after_test - 1]) {
    return None;
  }
  if !tokens.get(after_test)?.is_punct("{") {
    return None;
  }

  let after_block = skip_group(tokens, after_test)?;
  match tokens.get(after_block) {
    Some(next) if next.is_word("else") => Some(Rewrite::Unwrap { end: after_block + 1 }),
    _ => Some(Rewrite::Drop { end: after_block }),
  }
}

fn is_constant_false(test: &[Token<'_>]) -> bool {
  match test {
    [t] => t.is_word("false") || t.is_word("null") || (t.kind == TokenKind::Number && t.text == "0"),
    [not, one] => not.is_punct("!") && one.kind == TokenKind::Number && one.text == "1",
    _ => false,
  }
}

/// Index just past the group opened at `open`.
fn skip_group(tokens: &[Token<'_>], open: usize) -> Option<usize> {
  let mut depth = 0usize;
  for (j, t) in tokens.iter().enumerate().skip(open) {
    match t.kind {
      TokenKind::Punct if matches!(t.text, "(" | "[" | "{") => depth += 1,
      TokenKind::TemplateHead => depth += 1,
      TokenKind::Punct if matches!(t.text, ")" | "]" | "}") => depth = depth.checked_sub(1)?,
      TokenKind::TemplateTail => depth = depth.checked_sub(1)?,
      _ => {}
    }
    if depth == 0 {
      return Some(j + 1);
    }
  }
  None
}

/// Whether a statement may start at `token`, given the last emitted token.
fn statement_slot(prev: Option<&Token<'_>>, token: &Token<'_>, newline: bool, after_control: bool) -> Option<Slot> {
  let Some(prev) = prev else {
    return Some(Slot::List);
  };
  match prev.kind {
    TokenKind::Punct if matches!(prev.text, ";" | "{" | "}") => Some(Slot::List),
    TokenKind::Punct if prev.text == ")" && after_control => Some(Slot::Body),
    // `case 1: debugger;`, `label: if (0) {}`. Reserved words cannot be
    // an object value or the tail of a conditional expression.
    TokenKind::Punct if prev.text == ":" && (token.is_word("debugger") || token.is_word("if")) => Some(Slot::Body),
    TokenKind::Word if prev.text == "else" || prev.text == "do" => Some(Slot::Body),
    _ if newline && ends_expression(prev) => Some(Slot::List),
    _ => None,
  }
}

fn ends_expression(prev: &Token<'_>) -> bool {
  match prev.kind {
    TokenKind::Word => !OPERATOR_KEYWORDS.contains(&prev.text),
    TokenKind::Number | TokenKind::String | TokenKind::Template | TokenKind::TemplateTail | TokenKind::Regex => true,
    TokenKind::Punct => matches!(prev.text, ")" | "]" | "++" | "--"),
    TokenKind::Hashbang | TokenKind::TemplateHead | TokenKind::TemplateMiddle => false,
  }
}

/// Whether removing a statement from a list after `prev` must leave `;`.
fn needs_empty_statement(prev: Option<&Token<'_>>) -> bool {
  match prev {
    None => false,
    Some(t) => !(t.is_punct(";") || t.is_punct("{")),
  }
}

#[cfg(test)]
mod tests {
  use super::super::{MinifyOptions, minify};

  fn run(source: &str) -> String {
    minify(source, &MinifyOptions::default()).unwrap()
  }

  #[test]
  fn debugger_after_if_leaves_empty_statement() {
    assert_eq!(run("if (x) debugger;\nnext();"), "if(x);next();");
    assert_eq!(run("if (x) {} else debugger\nnext()"), "if(x){}else;next()");
  }

  #[test]
  fn debugger_after_expression_keeps_statement_boundary() {
    assert_eq!(run("x = function () {}\ndebugger\n(run)()"), "x=function(){};(run)()");
  }

  #[test]
  fn debugger_as_property_name_is_kept() {
    assert_eq!(run("a.debugger = { debugger: 1 };"), "a.debugger={debugger:1};");
  }

  #[test]
  fn debugger_inside_block_is_removed() {
    assert_eq!(run("function f() {\n  debugger;\n  return 1;\n}"), "function f(){return 1;}");
  }

  #[test]
  fn false_if_without_else_is_removed() {
    assert_eq!(run("a();\nif (false) { b(); }\nc();"), "a();c();");
    assert_eq!(run("if (0) { b() }"), "");
    assert_eq!(run("if (!1) { b() } c()"), "c()");
  }

  #[test]
  fn false_if_with_else_keeps_alternative() {
    assert_eq!(run("if (false) { a(); } else { b(); }"), "{b();}");
    assert_eq!(run("if (false) { a(); } else if (y) { b(); }"), "if(y){b();}");
  }

  #[test]
  fn folded_if_in_else_position_keeps_its_parent() {
    assert_eq!(
      run("if (a) { x(); } else if (false) { y(); } else { z(); }"),
      "if(a){x();}else{z();}"
    );
    assert_eq!(run("if (a) if (0) { y(); } else { z(); }"), "if(a){z();}");
    assert_eq!(run("while (a) if (null) { y(); } else z();"), "while(a)z();");
  }

  #[test]
  fn folded_if_in_body_position_leaves_empty_statement() {
    assert_eq!(run("if (a) { x(); } else if (false) { y(); }
next();"), "if(a){x();}else;next();");
    assert_eq!(run("for (;;) if (0) { a(); }"), "for(;;);");
  }

  #[test]
  fn folded_if_after_expression_line_keeps_boundary() {
    assert_eq!(run("x = function () {}
if (false) {} else (a)()"), "x=function(){};(a)()");
  }

  #[test]
  fn class_members_named_debugger_are_kept() {
    assert_eq!(run("class A { debugger = 1 }"), "class A{debugger=1}");
    assert_eq!(run("class A extends B { debugger() {} }"), "class A extends B{debugger(){}}");
    assert_eq!(run("class A {\n  debugger\n  x = 1\n}"), "class A{debugger\nx=1}");
  }

  #[test]
  fn debugger_inside_method_body_is_removed() {
    assert_eq!(run("class A { m() { debugger; return 1 } }"), "class A{m(){return 1}}");
    assert_eq!(run("x = { a: function () { debugger; } };"), "x={a:function(){}};");
  }

  #[test]
  fn debugger_after_case_or_label_is_removed() {
    assert_eq!(run("switch (a) { case 1: debugger; }"), "switch(a){case 1:;}");
    assert_eq!(run("switch (a) { default: debugger\n}"), "switch(a){default:;}");
    assert_eq!(run("outer: debugger;\nnext();"), "outer:;next();");
  }

  #[test]
  fn folded_if_after_label_keeps_alternative() {
    assert_eq!(run("outer: if (0) { a(); } else { b(); }"), "outer:{b();}");
  }

  #[test]
  fn truthy_or_unknown_tests_are_kept() {
    assert_eq!(run("if (true) { a(); }"), "if(true){a();}");
    assert_eq!(run("if (debug) { a(); }"), "if(debug){a();}");
    assert_eq!(run("if (false) a();"), "if(false)a();");
  }

  #[test]
  fn console_in_expression_is_kept() {
    let options = MinifyOptions {
      drop_console: true,
      ..MinifyOptions::default()
    };
    assert_eq!(
      minify("const log = console.log(1);", &options).unwrap(),
      "const log=console.log(1);"
    );
    assert_eq!(
      minify("function f() { console.warn(`x ${y}`) }", &options).unwrap(),
      "function f(){}"
    );
    assert_eq!(
      minify("console.log(1)\n(next)()", &options).unwrap(),
      "console.log(1)\n(next)()"
    );
    assert_eq!(
      minify("x = a ? b : console.log(1);", &options).unwrap(),
      "x=a?b:console.log(1);"
    );
    assert_eq!(
      minify("for (; console.log(1);) {}", &options).unwrap(),
      "for(;console.log(1);){}"
    );
  }
}
