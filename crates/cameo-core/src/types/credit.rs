use std::fmt;

use serde::{Deserialize, Serialize};

use super::role::Role;
use super::tv_role::TvRole;

/// The output of [`RoleParser::parse`](crate::parser::RoleParser::parse):
/// either a movie role or a television-episode role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Credit {
    /// Movie or other non-serial work.
    Movie(Role),
    /// Episode of a television series.
    Tv(TvRole),
}

impl Credit {
    /// The shared role fields of either variant.
    #[must_use]
    pub fn role(&self) -> &Role {
        match self {
            Self::Movie(role) => role,
            Self::Tv(tv) => &tv.role,
        }
    }

    /// Drops any episode context and returns the role fields.
    #[must_use]
    pub fn into_role(self) -> Role {
        match self {
            Self::Movie(role) => role,
            Self::Tv(tv) => tv.role,
        }
    }

    #[must_use]
    pub fn is_tv(&self) -> bool {
        matches!(self, Self::Tv(_))
    }

    #[must_use]
    pub fn as_tv(&self) -> Option<&TvRole> {
        match self {
            Self::Tv(tv) => Some(tv),
            Self::Movie(_) => None,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.role().title
    }

    #[must_use]
    pub fn year(&self) -> Option<u16> {
        self.role().year
    }

    #[must_use]
    pub fn character(&self) -> Option<&str> {
        self.role().character.as_deref()
    }

    #[must_use]
    pub fn credit(&self) -> Option<u32> {
        self.role().credit
    }

    /// Episode title; always `None` for movie roles.
    #[must_use]
    pub fn episode_title(&self) -> Option<&str> {
        self.as_tv().and_then(|tv| tv.episode_title.as_deref())
    }

    /// Season (or air year); always `None` for movie roles.
    #[must_use]
    pub fn season(&self) -> Option<u32> {
        self.as_tv().and_then(|tv| tv.season)
    }

    /// Episode number; always `None` for movie roles.
    #[must_use]
    pub fn episode(&self) -> Option<u32> {
        self.as_tv().and_then(|tv| tv.episode)
    }
}

impl From<Role> for Credit {
    fn from(role: Role) -> Self {
        Self::Movie(role)
    }
}

impl From<TvRole> for Credit {
    fn from(tv: TvRole) -> Self {
        Self::Tv(tv)
    }
}

impl fmt::Display for Credit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie(role) => write!(f, "{role}"),
            Self::Tv(tv) => write!(f, "{tv}"),
        }
    }
}
