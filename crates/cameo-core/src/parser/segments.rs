//! # Segment Extractor
//!
//! Splits a credit line into its title/year head and the optional
//! bracketed segments that follow it:
//!
//! ```text
//! "Casting Qs" (2010) {Episode (#2.14)}  (as Twinkie Byrd)  [Herself]  <3>
//! ^ title      ^ year ^ episode block    ^ note             ^ character ^ credit
//! ```
//!
//! Segments after the head are recognized by their opening delimiter in any
//! order. Text between them (stray punctuation included) is skipped.

use regex::Regex;
use tracing::{trace, warn};

use crate::error::{CameoError, Result};
use crate::parser::episode::EpisodeResolver;
use crate::types::EpisodeBlock;

/// Opening delimiters of the optional segments.
const OPENERS: &[char] = &['(', '{', '[', '<'];

/// Opening and closing byte of each segment kind.
const PAIRS: [(u8, u8); 4] = [(b'(', b')'), (b'{', b'}'), (b'[', b']'), (b'<', b'>')];

/// Content of a brace block that marks a suspended production.
const SUSPENDED: &str = "{SUSPENDED}";

/// Everything recognized in a single credit line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    /// Title with surrounding double quotes removed.
    pub title: String,
    /// Whether the title was double-quoted (the catalog's series marker).
    pub quoted: bool,
    /// Release year; `None` for `????`.
    pub year: Option<u16>,
    /// Text of the first `(as ...)` note.
    pub alias: Option<String>,
    /// Trimmed content of the `[...]` segment.
    pub character: Option<String>,
    /// Integer in the `<...>` segment.
    pub credit: Option<u32>,
    /// Resolved `{...}` block; `None` when absent or suspended.
    pub episode: Option<EpisodeBlock>,
    /// Whether the brace block was the `{{SUSPENDED}}` marker.
    pub suspended: bool,
}

impl Segments {
    fn new(title: String, quoted: bool, year: Option<u16>) -> Self {
        Self {
            title,
            quoted,
            year,
            alias: None,
            character: None,
            credit: None,
            episode: None,
            suspended: false,
        }
    }
}

/// Scans credit lines into [`Segments`].
#[derive(Debug, Clone)]
pub struct SegmentExtractor {
    re_head: Regex,
    episodes: EpisodeResolver,
}

impl SegmentExtractor {
    /// Constructs an extractor with pre-compiled patterns.
    ///
    /// # Errors
    ///
    /// Returns `CameoError::RegexError` if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            // Title, then (YYYY) or (????) with an optional /I, /II, /IV... tag.
            re_head: Regex::new(r"^\s*(\S.*?)\s*\((\d{4}|\?{4})(?:/[IVX]+)?\)")?,
            episodes: EpisodeResolver::new()?,
        })
    }

    /// Extracts all segments from one line.
    ///
    /// # Errors
    ///
    /// Returns `CameoError::ParseFailed` carrying the untouched line when it
    /// does not start with a title followed by a parenthesized year.
    pub fn extract(&self, line: &str) -> Result<Segments> {
        let caps = self
            .re_head
            .captures(line)
            .ok_or_else(|| CameoError::parse_failed(line))?;

        let (title, quoted) = unquote(caps[1].trim());
        if title.is_empty() {
            return Err(CameoError::parse_failed(line));
        }
        let year = caps[2].parse().ok();
        let mut segments = Segments::new(title.to_string(), quoted, year);

        let head_end = caps.get(0).map_or(line.len(), |m| m.end());
        self.scan(&line[head_end..], &mut segments);

        Ok(segments)
    }

    /// Walks the remainder of the line once, left to right.
    fn scan(&self, rest: &str, segments: &mut Segments) {
        let closers = pair_delimiters(rest);
        let mut brace_seen = false;
        let mut square_seen = false;
        let mut angle_seen = false;
        let mut pos = 0;

        while let Some(offset) = rest[pos..].find(OPENERS) {
            let start = pos + offset;
            let noise = rest[pos..start].trim();
            if !noise.is_empty() {
                trace!(noise, "skipping unrecognized text");
            }

            let open = rest.as_bytes()[start];
            let Some(end) = closers[start] else {
                trace!(delimiter = %char::from(open), "skipping unterminated segment");
                pos = start + 1;
                continue;
            };
            let content = &rest[start + 1..end];
            pos = end + 1;

            match open {
                b'(' => match alias(content) {
                    Some(alias) if segments.alias.is_none() => {
                        segments.alias = Some(alias.to_string());
                    }
                    _ => trace!(note = content.trim(), "discarding note"),
                },
                b'{' if !brace_seen => {
                    brace_seen = true;
                    let content = content.trim();
                    if content == SUSPENDED {
                        segments.suspended = true;
                    } else {
                        segments.episode = Some(self.episodes.resolve(content));
                    }
                }
                b'[' if !square_seen => {
                    square_seen = true;
                    let character = content.trim();
                    if !character.is_empty() {
                        segments.character = Some(character.to_string());
                    }
                }
                b'<' if !angle_seen => {
                    angle_seen = true;
                    match content.trim().parse::<u32>() {
                        Ok(credit) if credit >= 1 => segments.credit = Some(credit),
                        _ => warn!(credit = content, "ignoring malformed billing position"),
                    }
                }
                _ => trace!(segment = content, "discarding repeated segment"),
            }
        }

        let noise = rest[pos..].trim();
        if !noise.is_empty() {
            trace!(noise, "skipping unrecognized text");
        }
    }
}

/// Strips one pair of surrounding double quotes.
fn unquote(title: &str) -> (&str, bool) {
    match title
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
    {
        Some(inner) => (inner.trim(), true),
        None => (title, false),
    }
}

/// Returns the alias of an `(as ...)` note, matched case-insensitively.
fn alias(note: &str) -> Option<&str> {
    let note = note.trim();
    let prefix = note.get(..3)?;
    if !prefix.eq_ignore_ascii_case("as ") {
        return None;
    }
    let alias = note[3..].trim();
    (!alias.is_empty()).then_some(alias)
}

/// Pairs every opening delimiter with its closing one in a single pass.
///
/// Each kind nests only on itself. The returned vector is indexed by byte
/// offset and holds the closer's offset for every paired opener; unpaired
/// openers and every other byte map to `None`.
fn pair_delimiters(s: &str) -> Vec<Option<usize>> {
    let mut closers = vec![None; s.len()];
    let mut open: [Vec<usize>; PAIRS.len()] = Default::default();

    for (idx, &byte) in s.as_bytes().iter().enumerate() {
        if let Some(kind) = PAIRS.iter().position(|&(o, _)| o == byte) {
            open[kind].push(idx);
        } else if let Some(kind) = PAIRS.iter().position(|&(_, c)| c == byte) {
            if let Some(start) = open[kind].pop() {
                closers[start] = Some(idx);
            }
        }
    }
    closers
}
