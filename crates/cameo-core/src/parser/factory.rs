//! # Role Factory
//!
//! Decides whether a credit line describes a movie role or a television
//! episode role and builds the matching record.

use tracing::{debug, warn};

use crate::error::Result;
use crate::parser::builder::{build_role, build_tv_role};
use crate::parser::segments::{SegmentExtractor, Segments};
use crate::types::{Credit, EpisodeBlock, Role, TvRole};

/// How to classify an unquoted title paired with a freeform `{...}` block.
///
/// Such lines carry an episode title but nothing else marks them as
/// television work. They are always logged with a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmbiguousEpisode {
    /// Build a movie role and drop the block.
    #[default]
    Movie,
    /// Build a television role with the block as its episode title.
    Television,
}

/// Configuration for the parser.
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Classification of unquoted titles with a freeform episode block.
    pub ambiguous_episode: AmbiguousEpisode,
}

impl ParserConfig {
    /// Create a new parser configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how ambiguous episode lines are classified.
    pub fn with_ambiguous_episode(mut self, policy: AmbiguousEpisode) -> Self {
        self.ambiguous_episode = policy;
        self
    }
}

/// Parses credit lines into [`Credit`] records.
///
/// The parser holds only compiled patterns, so one instance can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct RoleParser {
    config: ParserConfig,
    extractor: SegmentExtractor,
}

impl RoleParser {
    /// Create a new parser with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `CameoError::RegexError` if a pattern fails to compile.
    pub fn new(config: ParserConfig) -> Result<Self> {
        Ok(Self {
            config,
            extractor: SegmentExtractor::new()?,
        })
    }

    /// Create a new parser with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ParserConfig::default())
    }

    /// Parse a credit line into a movie or television role.
    ///
    /// # Errors
    ///
    /// Returns `CameoError::ParseFailed` with the original line if it does
    /// not start with a title followed by a parenthesized year.
    ///
    /// # Examples
    /// ```
    /// use cameo_core::parser::RoleParser;
    ///
    /// let parser = RoleParser::with_defaults().unwrap();
    /// let credit = parser
    ///     .parse(r#""Buffy the Vampire Slayer" (1997) {After Life (#6.3)}  [Dawn Summers]  <4>"#)
    ///     .unwrap();
    ///
    /// assert!(credit.is_tv());
    /// assert_eq!(credit.title(), "Buffy the Vampire Slayer");
    /// assert_eq!(credit.season(), Some(6));
    /// assert_eq!(credit.episode(), Some(3));
    /// ```
    pub fn parse(&self, line: &str) -> Result<Credit> {
        let segments = self.extractor.extract(line)?;

        if self.is_tv(line, &segments) {
            debug!(
                title = %segments.title,
                suspended = segments.suspended,
                "parsed television role"
            );
            Ok(build_tv_role(segments).into())
        } else {
            debug!(
                title = %segments.title,
                suspended = segments.suspended,
                "parsed movie role"
            );
            Ok(build_role(segments).into())
        }
    }

    /// Parse a line as a movie role regardless of its shape.
    pub fn parse_role(&self, line: &str) -> Result<Role> {
        self.extractor.extract(line).map(build_role)
    }

    /// Parse a line as a television role regardless of its shape.
    pub fn parse_tv_role(&self, line: &str) -> Result<TvRole> {
        self.extractor.extract(line).map(build_tv_role)
    }

    /// Get the parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn is_tv(&self, line: &str, segments: &Segments) -> bool {
        match &segments.episode {
            _ if segments.quoted => true,
            Some(block) if block.is_addressed() => true,
            Some(EpisodeBlock::Freeform(_)) => {
                warn!(line, "unquoted title with a freeform episode block");
                self.config.ambiguous_episode == AmbiguousEpisode::Television
            }
            _ => false,
        }
    }
}

/// Convenience function to parse a credit line with default settings.
pub fn parse(line: &str) -> Result<Credit> {
    let parser = RoleParser::with_defaults()?;
    parser.parse(line)
}
