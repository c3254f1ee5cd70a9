//! Assembles [`Role`] and [`TvRole`] records from extracted segments.

use crate::parser::segments::Segments;
use crate::types::{EpisodeBlock, Role, TvRole};

/// Builds a movie role. Any episode block is dropped.
#[must_use]
pub fn build_role(segments: Segments) -> Role {
    split(segments).0
}

/// Builds a television role. A missing or suspended block leaves the
/// episode fields absent.
#[must_use]
pub fn build_tv_role(segments: Segments) -> TvRole {
    let (role, block) = split(segments);
    TvRole::new(role, block)
}

fn split(segments: Segments) -> (Role, Option<EpisodeBlock>) {
    let Segments {
        title,
        year,
        alias,
        character,
        credit,
        episode,
        ..
    } = segments;

    // An `(as ...)` note overrides the bracketed character.
    let role = Role {
        title,
        year,
        character: alias.or(character),
        credit,
    };
    (role, episode)
}
