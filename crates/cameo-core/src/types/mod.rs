pub mod credit;
pub mod episode;
pub mod role;
pub mod tv_role;

pub use credit::Credit;
pub use episode::EpisodeBlock;
pub use role::Role;
pub use tv_role::TvRole;
