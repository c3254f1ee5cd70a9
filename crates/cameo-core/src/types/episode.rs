use std::fmt;

use serde::{Deserialize, Serialize};

/// Episode addressing found inside a `{...}` block of a credit line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpisodeBlock {
    /// Episode addressed by air date: `{(2011-03-23)}`
    Dated {
        /// The ISO date text, without parentheses.
        date: String,
        /// Year component of the date.
        year: u32,
    },

    /// Episode addressed by number, optionally titled: `{After Life (#6.3)}`
    Numbered {
        /// Text preceding the `(#S.E)` marker, if any.
        title: Option<String>,
        /// Season number.
        season: u32,
        /// Episode number within the season.
        episode: u32,
    },

    /// Anything else: the whole block is the episode title.
    Freeform(String),
}

impl EpisodeBlock {
    /// Returns `true` if the block identifies an episode by date or number.
    #[must_use]
    pub fn is_addressed(&self) -> bool {
        !matches!(self, Self::Freeform(_))
    }

    /// Flattens the block into `(episode_title, season, episode)`.
    ///
    /// A dated block reports its year as the season and never an episode.
    /// An empty freeform block has no title.
    #[must_use]
    pub fn into_fields(self) -> (Option<String>, Option<u32>, Option<u32>) {
        match self {
            Self::Dated { date, year } => (Some(date), Some(year), None),
            Self::Numbered {
                title,
                season,
                episode,
            } => (title, Some(season), Some(episode)),
            Self::Freeform(title) => ((!title.is_empty()).then_some(title), None, None),
        }
    }
}

impl fmt::Display for EpisodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dated { date, .. } => write!(f, "({date})"),
            Self::Numbered {
                title: Some(title),
                season,
                episode,
            } => write!(f, "{title} (#{season}.{episode})"),
            Self::Numbered {
                title: None,
                season,
                episode,
            } => write!(f, "(#{season}.{episode})"),
            Self::Freeform(title) => write!(f, "{title}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dated_block_fields() {
        let block = EpisodeBlock::Dated {
            date: "2011-03-23".into(),
            year: 2011,
        };
        assert!(block.is_addressed());
        assert_eq!(
            block.into_fields(),
            (Some("2011-03-23".to_string()), Some(2011), None)
        );
    }

    #[test]
    fn numbered_block_fields() {
        let block = EpisodeBlock::Numbered {
            title: None,
            season: 1,
            episode: 15,
        };
        assert!(block.is_addressed());
        assert_eq!(block.into_fields(), (None, Some(1), Some(15)));
    }

    #[test]
    fn freeform_block_is_not_addressed() {
        let block = EpisodeBlock::Freeform("High Noon".into());
        assert!(!block.is_addressed());
        assert_eq!(block.into_fields(), (Some("High Noon".to_string()), None, None));
    }

    #[test]
    fn empty_freeform_block_has_no_title() {
        let block = EpisodeBlock::Freeform(String::new());
        assert_eq!(block.into_fields(), (None, None, None));
    }

    #[test]
    fn episode_block_display() {
        assert_eq!(
            EpisodeBlock::Numbered {
                title: Some("After Life".into()),
                season: 6,
                episode: 3
            }
            .to_string(),
            "After Life (#6.3)"
        );
        assert_eq!(
            EpisodeBlock::Numbered {
                title: None,
                season: 1,
                episode: 15
            }
            .to_string(),
            "(#1.15)"
        );
        assert_eq!(
            EpisodeBlock::Dated {
                date: "1998-12-19".into(),
                year: 1998
            }
            .to_string(),
            "(1998-12-19)"
        );
    }
}
