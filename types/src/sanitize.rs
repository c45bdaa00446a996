//! Query sanitization for pasted and typed search text.
//!
//! The search box echoes the query back to the terminal (input line and the
//! empty-state message), so anything that would be interpreted by the
//! terminal must be removed before it reaches the query buffer.

use std::borrow::Cow;
use std::iter::Peekable;

/// ASCII escape character that starts ANSI sequences.
const ESC: char = '\x1b';

/// Strip escape sequences and control characters from query text.
///
/// Newlines and tabs are control characters too: the search box is a single
/// line, so they are dropped rather than preserved.
///
/// Returns `Cow::Borrowed` when the input is already clean.
///
/// # Examples
///
/// ```
/// use worldclock_types::sanitize_query;
///
/// assert_eq!(sanitize_query("tokyo"), "tokyo");
/// assert_eq!(sanitize_query("to\x1b[2Jkyo\n"), "tokyo");
/// ```
#[must_use]
pub fn sanitize_query(input: &str) -> Cow<'_, str> {
    if !input.chars().any(char::is_control) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ESC {
            skip_escape_sequence(&mut chars);
            continue;
        }
        if !c.is_control() {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Consume the remainder of an escape sequence whose ESC was already read.
fn skip_escape_sequence<I>(chars: &mut Peekable<I>)
where
    I: Iterator<Item = char>,
{
    match chars.peek() {
        // CSI: parameters and intermediates, terminated by a final byte in @..~
        Some('[') => {
            chars.next();
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        }
        // OSC: terminated by BEL or ST (ESC \)
        Some(']') => {
            chars.next();
            while let Some(c) = chars.next() {
                if c == '\x07' {
                    break;
                }
                if c == ESC {
                    if chars.peek() == Some(&'\\') {
                        chars.next();
                    }
                    break;
                }
            }
        }
        // Two-character sequence
        Some(_) => {
            chars.next();
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_input_is_borrowed() {
        assert!(matches!(sanitize_query("São Paulo"), Cow::Borrowed(_)));
    }

    #[test]
    fn strips_csi_sequences() {
        assert_eq!(sanitize_query("\x1b[31mred\x1b[0m"), "red");
    }

    #[test]
    fn strips_osc_with_bel_and_st() {
        assert_eq!(sanitize_query("a\x1b]0;title\x07b"), "ab");
        assert_eq!(sanitize_query("a\x1b]8;;http://x\x1b\\b"), "ab");
    }

    #[test]
    fn drops_newlines_and_tabs() {
        assert_eq!(sanitize_query("new\r\nyork\t"), "newyork");
    }

    #[test]
    fn trailing_escape_is_dropped() {
        assert_eq!(sanitize_query("abc\x1b"), "abc");
    }
}
