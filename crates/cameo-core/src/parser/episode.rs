//! # Episode Block Resolver
//!
//! Interprets the content of a `{...}` block as a dated, numbered or
//! freeform episode reference.

use regex::Regex;

use crate::error::Result;
use crate::types::EpisodeBlock;

/// Resolves the content of a curly-brace episode block.
#[derive(Debug, Clone)]
pub struct EpisodeResolver {
    re_dated: Regex,
    re_numbered: Regex,
}

impl EpisodeResolver {
    /// Constructs a resolver with pre-compiled patterns.
    ///
    /// # Errors
    ///
    /// Returns `CameoError::RegexError` if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_dated: Regex::new(r"^\((\d{4})-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])\)$")?,
            re_numbered: Regex::new(r"^(.*?)\s*\(#(\d+)\.(\d+)\)$")?,
        })
    }

    /// Resolves a block's content. Never fails: anything that is neither
    /// dated nor numbered is freeform.
    pub fn resolve(&self, content: &str) -> EpisodeBlock {
        let content = content.trim();

        if let Some(caps) = self.re_dated.captures(content) {
            if let Ok(year) = caps[1].parse() {
                let date = &content[1..content.len() - 1];
                return EpisodeBlock::Dated {
                    date: date.to_string(),
                    year,
                };
            }
        }

        if let Some(caps) = self.re_numbered.captures(content) {
            if let (Ok(season), Ok(episode)) = (caps[2].parse(), caps[3].parse()) {
                let title = caps[1].trim();
                return EpisodeBlock::Numbered {
                    title: (!title.is_empty()).then(|| title.to_string()),
                    season,
                    episode,
                };
            }
        }

        EpisodeBlock::Freeform(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> EpisodeResolver {
        EpisodeResolver::new().unwrap()
    }

    #[test]
    fn dated_block() {
        assert_eq!(
            resolver().resolve("(2011-03-23)"),
            EpisodeBlock::Dated {
                date: "2011-03-23".into(),
                year: 2011
            }
        );
    }

    #[test]
    fn dated_block_tolerates_padding() {
        assert_eq!(
            resolver().resolve("  (1998-12-19) "),
            EpisodeBlock::Dated {
                date: "1998-12-19".into(),
                year: 1998
            }
        );
    }

    #[test]
    fn impossible_date_is_freeform() {
        assert_eq!(
            resolver().resolve("(2011-13-40)"),
            EpisodeBlock::Freeform("(2011-13-40)".into())
        );
    }

    #[test]
    fn numbered_block_with_title() {
        assert_eq!(
            resolver().resolve("After Life (#6.3)"),
            EpisodeBlock::Numbered {
                title: Some("After Life".into()),
                season: 6,
                episode: 3
            }
        );
    }

    #[test]
    fn numbered_block_without_title() {
        assert_eq!(
            resolver().resolve("(#1.15)"),
            EpisodeBlock::Numbered {
                title: None,
                season: 1,
                episode: 15
            }
        );
    }

    #[test]
    fn numbered_title_keeps_inner_punctuation() {
        assert_eq!(
            resolver().resolve("An Interview with Tracy 'Twinkie' Byrd (#2.14)"),
            EpisodeBlock::Numbered {
                title: Some("An Interview with Tracy 'Twinkie' Byrd".into()),
                season: 2,
                episode: 14
            }
        );
        assert_eq!(
            resolver().resolve("Tulisa's Best and Worst (#8.34)"),
            EpisodeBlock::Numbered {
                title: Some("Tulisa's Best and Worst".into()),
                season: 8,
                episode: 34
            }
        );
    }

    #[test]
    fn freeform_block() {
        let content = "I Got No Shame, 'Cuz My Chest Gives Me All Game!";
        assert_eq!(
            resolver().resolve(content),
            EpisodeBlock::Freeform(content.into())
        );
    }

    #[test]
    fn marker_must_end_the_block() {
        assert_eq!(
            resolver().resolve("(#1.2) Reunion"),
            EpisodeBlock::Freeform("(#1.2) Reunion".into())
        );
    }
}
