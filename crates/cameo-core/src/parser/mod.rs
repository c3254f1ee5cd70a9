pub mod builder;
pub mod episode;
pub mod factory;
pub mod segments;

pub use builder::{build_role, build_tv_role};
pub use episode::EpisodeResolver;
pub use factory::{AmbiguousEpisode, ParserConfig, RoleParser, parse};
pub use segments::{SegmentExtractor, Segments};
