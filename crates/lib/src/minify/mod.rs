//! Token-level JavaScript minifier.
//!
//! The minifier never builds a syntax tree. It tokenizes the script, applies
//! a few statement-level rewrites, and re-emits the tokens with the least
//! whitespace that keeps them apart. Identifiers are never renamed, so
//! function and class names always survive.
//!
//! # Submodules
//!
//! - [`lexer`] - tokenizer and bracket checking
//! - `compress` - `debugger`, `console.*` and constant-`if` rewrites
//! - `emit` - whitespace-minimal printing that keeps ASI line breaks

mod compress;
mod emit;
pub mod lexer;

use thiserror::Error;

pub use lexer::{Token, TokenKind, tokenize};

/// Rewrites applied on top of whitespace and comment removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinifyOptions {
  /// Remove `if (false) { ... }` blocks, keeping only a present `else` branch.
  pub dead_code: bool,
  /// Remove `console.<method>(...)` call statements.
  pub drop_console: bool,
  /// Remove `debugger` statements.
  pub drop_debugger: bool,
}

impl Default for MinifyOptions {
  /// Settings used for the distribution build: dead code removed, console
  /// output kept, debugger statements stripped.
  fn default() -> Self {
    Self {
      dead_code: true,
      drop_console: false,
      drop_debugger: true,
    }
  }
}

/// What the tokenizer could not make sense of.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MinifyErrorKind {
  #[error("unterminated string literal")]
  UnterminatedString,

  #[error("unterminated template literal")]
  UnterminatedTemplate,

  #[error("unterminated comment")]
  UnterminatedComment,

  #[error("unterminated regular expression")]
  UnterminatedRegex,

  #[error("unexpected character '{0}'")]
  UnexpectedChar(char),

  #[error("expected '{expected}' but found '{found}'")]
  MismatchedBracket { expected: char, found: char },

  #[error("unexpected '{0}'")]
  UnmatchedClose(char),

  #[error("unclosed '{0}'")]
  Unclosed(char),
}

/// A minification diagnostic with a 1-based source position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} (line {line}, column {column})")]
pub struct MinifyError {
  pub kind: MinifyErrorKind,
  pub line: usize,
  pub column: usize,
}

/// Minify `source`.
///
/// # Errors
///
/// Returns a [`MinifyError`] if the script cannot be tokenized or its
/// brackets do not balance. Nothing is produced in that case.
pub fn minify(source: &str, options: &MinifyOptions) -> Result<String, MinifyError> {
  let tokens = tokenize(source)?;
  let tokens = compress::compress(tokens, options);
  Ok(emit::emit(&tokens))
}

#[cfg(test)]
mod tests {
  use super::*;

  const THEME: &str = r#"// Tailwind CSS Configuration
// This file is loaded once and cached across all SkyCMS pages

tailwind.config = {
  theme: {
    extend: {
      // Custom brand colors
      colors: {
        brand: {
          50: '#E0F7FA',
          500: '#00BCD4',  // Primary brand color
        }
      },

      /* Custom fonts */
      fontFamily: {
        montserrat: ['Montserrat', 'sans-serif'],
      },

      animation: {
        'float': 'float 3s ease-in-out infinite',
      }
    }
  }
};
"#;

  fn significant(source: &str) -> Vec<&str> {
    tokenize(source).unwrap().into_iter().map(|t| t.text).collect()
  }

  #[test]
  fn minifies_theme_to_single_line() {
    let out = minify(THEME, &MinifyOptions::default()).unwrap();
    assert_eq!(
      out,
      "tailwind.config={theme:{extend:{colors:{brand:{50:'#E0F7FA',500:'#00BCD4',}},fontFamily:{montserrat:['Montserrat','sans-serif'],},animation:{'float':'float 3s ease-in-out infinite',}}}};"
    );
  }

  #[test]
  fn minified_output_keeps_every_significant_token() {
    let out = minify(THEME, &MinifyOptions::default()).unwrap();
    assert_eq!(significant(&out), significant(THEME));
  }

  #[test]
  fn keeps_console_and_names() {
    let source = "function greet(name) {\n  console.log('hi', name);\n}\nclass Theme {}\n";
    let out = minify(source, &MinifyOptions::default()).unwrap();
    assert_eq!(out, "function greet(name){console.log('hi',name);}\nclass Theme{}");
  }

  #[test]
  fn drops_console_when_asked() {
    let options = MinifyOptions {
      drop_console: true,
      ..MinifyOptions::default()
    };
    let out = minify("console.log('a');\nrun();\n", &options).unwrap();
    assert_eq!(out, "run();");
  }

  #[test]
  fn strips_debugger() {
    let out = minify("init();\ndebugger;\nstart();\n", &MinifyOptions::default()).unwrap();
    assert_eq!(out, "init();start();");
  }

  #[test]
  fn all_rewrites_disabled_only_strips_whitespace() {
    let options = MinifyOptions {
      dead_code: false,
      drop_console: false,
      drop_debugger: false,
    };
    let source = "if (false) { debugger; }\n";
    let out = minify(source, &options).unwrap();
    assert_eq!(out, "if(false){debugger;}");
  }

  #[test]
  fn malformed_input_is_an_error() {
    let err = minify("tailwind.config = { theme: { } } }", &MinifyOptions::default()).unwrap_err();
    assert_eq!(err.kind, MinifyErrorKind::UnmatchedClose('}'));
    assert_eq!(err.to_string(), "unexpected '}' (line 1, column 34)");
  }
}
