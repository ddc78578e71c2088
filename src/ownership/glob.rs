//! fnmatch-style globs compiled to anchored regular expressions.
//!
//! `*` matches any run of characters including `/`, `?` matches one
//! character, `[...]` is a bracket expression (`!` or `^` negates) and `\`
//! escapes the next character. An unterminated `[` is taken literally.

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The whole candidate must match the pattern.
    Exact,
    /// The pattern may match the candidate itself or any leading directory of
    /// it, so `/foo/*` covers `/foo/bar/baz` but `/foo` never covers `/foobar`.
    LeadingDir,
}

#[derive(Debug, Clone)]
pub struct Glob {
    regex: Regex,
}

impl Glob {
    pub fn new(pattern: &str, mode: MatchMode) -> Result<Self, regex::Error> {
        let tail = match mode {
            MatchMode::Exact => "$",
            MatchMode::LeadingDir => "(?:/.*)?$",
        };
        let source = format!("(?s)^{}{tail}", translate(pattern));
        let regex = Regex::new(&source)?;

        Ok(Self { regex })
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

/// Reports whether any of `globs` matches `candidate`.
pub fn matches_any(globs: &[Glob], candidate: &str) -> bool {
    globs.iter().any(|glob| glob.is_match(candidate))
}

/// Translates a glob into the body of a regular expression (no anchors).
pub fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                out.push_str(".*");
                i += 1;
            }
            '?' => {
                out.push('.');
                i += 1;
            }
            '\\' => {
                match chars.get(i + 1) {
                    Some(next) => push_literal(&mut out, *next),
                    None => push_literal(&mut out, '\\'),
                }
                i += 2;
            }
            '[' => match bracket_expression(&chars, i) {
                Some((class, next)) => {
                    out.push_str(&class);
                    i = next;
                }
                None => {
                    push_literal(&mut out, '[');
                    i += 1;
                }
            },
            c => {
                push_literal(&mut out, c);
                i += 1;
            }
        }
    }

    out
}

fn push_literal(out: &mut String, c: char) {
    let mut buf = [0u8; 4];
    out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

/// Parses a bracket expression starting at `chars[start] == '['`. Returns the
/// regex for it and the index just past the closing `]`.
///
/// A reversed range such as `z-a` contributes no characters, so a class made
/// only of reversed ranges matches nothing.
fn bracket_expression(chars: &[char], start: usize) -> Option<(String, usize)> {
    let mut i = start + 1;
    let negated = matches!(chars.get(i), Some('!') | Some('^'));
    if negated {
        i += 1;
    }

    let mut ranges = Vec::new();
    // A `]` right after the opening bracket is a member, not the terminator.
    let first = i;
    loop {
        if chars.get(i) == Some(&']') && i > first {
            return Some((render_class(negated, &ranges), i + 1));
        }

        let (low, next) = class_char(chars, i)?;
        i = next;

        let is_range = chars.get(i) == Some(&'-') && chars.get(i + 1).is_some_and(|c| *c != ']');
        if is_range {
            let (high, next) = class_char(chars, i + 1)?;
            i = next;
            if low <= high {
                ranges.push((low, high));
            }
        } else {
            ranges.push((low, low));
        }
    }
}

fn class_char(chars: &[char], i: usize) -> Option<(char, usize)> {
    match *chars.get(i)? {
        '\\' => chars.get(i + 1).map(|c| (*c, i + 2)),
        c => Some((c, i + 1)),
    }
}

fn render_class(negated: bool, ranges: &[(char, char)]) -> String {
    if ranges.is_empty() {
        return if negated { ".".to_string() } else { r"[^\s\S]".to_string() };
    }

    let mut class = String::from(if negated { "[^" } else { "[" });
    for &(low, high) in ranges {
        push_class_member(&mut class, low);
        if high != low {
            class.push('-');
            push_class_member(&mut class, high);
        }
    }
    class.push(']');
    class
}

fn push_class_member(class: &mut String, c: char) {
    if matches!(c, '[' | ']' | '\\' | '^' | '&' | '~' | '-') {
        class.push('\\');
    }
    class.push(c);
}
