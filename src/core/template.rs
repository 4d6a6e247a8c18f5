//! Positional text templates
//!
//! A printf-style template is compiled once, when a text writer is built, into
//! literal runs and value placeholders. Rendering walks the segments and
//! substitutes values in order.
//!
//! Supported syntax:
//! - `%s`, `%d`, `%v` and any other single-letter verb consume the next value
//!   and render it with `Display`
//! - flags `-` (left-justify), `0` (zero padding), `+` and space (sign on
//!   non-negative integers), `#` (accepted, no effect)
//! - an optional width and `.precision`; precision truncates `%s`/`%v`/`%q`
//!   values and is ignored for other verbs
//! - `%%` renders a literal `%`
//!
//! A placeholder without a value renders `%!<verb>(MISSING)` and a trailing
//! lone `%` renders `%!(NOVERB)`. Surplus values are ignored.

use std::fmt::{self, Display, Write};
use std::iter::Peekable;
use std::str::Chars;

/// One `%...` directive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Placeholder {
    verb: char,
    left: bool,
    zero: bool,
    plus: bool,
    space: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Value(Placeholder),
    NoVerb,
}

fn take_number(chars: &mut Peekable<Chars<'_>>, text: &mut String) -> Option<usize> {
    let mut number: Option<usize> = None;
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        text.push(c);
        let digit = c as usize - '0' as usize;
        number = Some(number.unwrap_or(0).saturating_mul(10).saturating_add(digit));
    }
    number
}

impl Placeholder {
    fn render<W: Write, V: Display>(&self, out: &mut W, value: &V) -> fmt::Result {
        let mut text = value.to_string();

        if let Some(precision) = self.precision {
            if matches!(self.verb, 's' | 'v' | 'q') {
                if let Some((cut, _)) = text.char_indices().nth(precision) {
                    text.truncate(cut);
                }
            }
        }

        let numeric = self.verb == 'd' && text.parse::<i64>().is_ok();
        if numeric && !text.starts_with(['-', '+']) {
            if self.plus {
                text.insert(0, '+');
            } else if self.space {
                text.insert(0, ' ');
            }
        }

        let len = text.chars().count();
        let pad = self.width.map_or(0, |width| width.saturating_sub(len));
        if pad == 0 {
            return out.write_str(&text);
        }

        if self.left {
            out.write_str(&text)?;
            (0..pad).try_for_each(|_| out.write_char(' '))
        } else if self.zero && numeric {
            // Zeros go between the sign and the digits.
            let digits_at = usize::from(text.starts_with(['-', '+', ' ']));
            out.write_str(&text[..digits_at])?;
            (0..pad).try_for_each(|_| out.write_char('0'))?;
            out.write_str(&text[digits_at..])
        } else {
            let fill = if self.zero { '0' } else { ' ' };
            (0..pad).try_for_each(|_| out.write_char(fill))?;
            out.write_str(&text)
        }
    }
}

/// A compiled positional template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl TextTemplate {
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            // Text consumed so far, kept in case this turns out not to be a directive.
            let mut raw = String::from('%');
            let mut placeholder = Placeholder::default();

            while let Some(&flag) = chars.peek() {
                match flag {
                    '-' => placeholder.left = true,
                    '0' => placeholder.zero = true,
                    '+' => placeholder.plus = true,
                    ' ' => placeholder.space = true,
                    '#' => {}
                    _ => break,
                }
                raw.push(flag);
                chars.next();
            }

            placeholder.width = take_number(&mut chars, &mut raw);
            if chars.peek() == Some(&'.') {
                raw.push('.');
                chars.next();
                placeholder.precision = Some(take_number(&mut chars, &mut raw).unwrap_or(0));
            }

            match chars.next() {
                Some('%') if raw == "%" => literal.push('%'),
                Some(letter) if letter.is_ascii_alphabetic() => {
                    placeholder.verb = letter;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Value(placeholder));
                }
                Some(other) => {
                    // Not a verb: keep the text as written.
                    literal.push_str(&raw);
                    literal.push(other);
                }
                None => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::NoVerb);
                }
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            source: template.to_string(),
            segments,
        }
    }

    /// The template text this was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of value placeholders
    pub fn arity(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Value(_)))
            .count()
    }

    /// Render into `out`, consuming `values` positionally
    pub fn render_into<W, V>(&self, out: &mut W, values: &[V]) -> fmt::Result
    where
        W: Write,
        V: Display,
    {
        let mut next = values.iter();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.write_str(text)?,
                Segment::Value(placeholder) => match next.next() {
                    Some(value) => placeholder.render(out, value)?,
                    None => write!(out, "%!{}(MISSING)", placeholder.verb)?,
                },
                Segment::NoVerb => out.write_str("%!(NOVERB)")?,
            }
        }
        Ok(())
    }

    pub fn render<V: Display>(&self, values: &[V]) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.render_into(&mut out, values);
        out
    }
}

impl From<&str> for TextTemplate {
    fn from(template: &str) -> Self {
        Self::parse(template)
    }
}
