use std::fmt;

use serde::{Deserialize, Serialize};

use super::episode::EpisodeBlock;
use super::role::Role;

/// A television-episode acting credit: a [`Role`] plus episode context.
///
/// `title` and `year` on the inner role describe the series, not the episode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TvRole {
    /// Series-level fields.
    #[serde(flatten)]
    pub role: Role,

    /// Episode title, or the air date when the episode is addressed by date.
    pub episode_title: Option<String>,

    /// Season number, or the air year for date-addressed episodes.
    pub season: Option<u32>,

    /// Episode number within the season.
    pub episode: Option<u32>,
}

impl TvRole {
    /// Attaches episode context to a role. `None` leaves all episode fields absent.
    #[must_use]
    pub fn new(role: Role, block: Option<EpisodeBlock>) -> Self {
        let (episode_title, season, episode) = block
            .map(EpisodeBlock::into_fields)
            .unwrap_or((None, None, None));

        Self {
            role,
            episode_title,
            season,
            episode,
        }
    }

    /// Returns `true` if any episode field is present.
    #[must_use]
    pub fn has_episode(&self) -> bool {
        self.episode_title.is_some() || self.season.is_some() || self.episode.is_some()
    }
}

impl fmt::Display for TvRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.role)?;
        if let Some(ref title) = self.episode_title {
            write!(f, " {{{title}}}")?;
        }
        match (self.season, self.episode) {
            (Some(season), Some(episode)) => write!(f, " S{season:02}E{episode:02}"),
            (Some(season), None) => write!(f, " S{season}"),
            _ => Ok(()),
        }
    }
}
