//! Title template parser using winnow.
//!
//! A rubric's title template is literal text around exactly one
//! `{slot}` placeholder, e.g. `"Купить {catalogue}"`. The slot's inner
//! name is documentation only. `{{` and `}}` escape literal braces.

use thiserror::Error;
use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{none_of, take_while};

/// Errors from parsing a title template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("template has no {{slot}} placeholder")]
    MissingSlot,

    #[error("template has more than one placeholder")]
    MultipleSlots,
}

/// A parsed title template: the literal text around the noun-phrase slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleTemplate {
    pub prefix: String,
    pub suffix: String,
}

impl TitleTemplate {
    /// Parse a template string.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut remaining = input;
        let segments = match template(&mut remaining) {
            Ok(segments) if remaining.is_empty() => segments,
            Ok(_) => {
                let (line, column) = calculate_position(input, remaining);
                return Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                });
            }
            Err(e) => {
                let (line, column) = calculate_position(input, remaining);
                return Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!("parse error: {e}"),
                });
            }
        };

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut slots = 0usize;
        for segment in segments {
            match segment {
                Segment::Literal(text) => {
                    if slots == 0 {
                        prefix.push_str(&text);
                    } else {
                        suffix.push_str(&text);
                    }
                }
                Segment::Slot => slots += 1,
            }
        }

        match slots {
            0 => Err(ParseError::MissingSlot),
            1 => Ok(Self { prefix, suffix }),
            _ => Err(ParseError::MultipleSlots),
        }
    }

    /// Substitute the noun phrase into the slot.
    pub fn render(&self, noun_phrase: &str) -> String {
        format!("{}{}{}", self.prefix, noun_phrase, self.suffix)
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let last_newline = consumed_str.rfind('\n');
    let column = match last_newline {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

#[derive(Clone)]
enum Segment {
    Literal(String),
    Slot,
}

fn template(input: &mut &str) -> ModalResult<Vec<Segment>> {
    repeat(0.., segment).parse_next(input)
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escape_sequence, slot, literal_char)).parse_next(input)
}

/// Escape sequences: {{ -> {, }} -> }
fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "{{".value(Segment::Literal("{".to_string())),
        "}}".value(Segment::Literal("}".to_string())),
    ))
    .parse_next(input)
}

fn slot(input: &mut &str) -> ModalResult<Segment> {
    delimited('{', take_while(0.., |c: char| c != '{' && c != '}'), '}')
        .map(|_| Segment::Slot)
        .parse_next(input)
}

fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    none_of(['{', '}'])
        .map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}
