//! # Cameo Core
//!
//! Turns one filmography credit line, as printed by online film and TV
//! catalogs, into a structured acting role. Movie credits become a
//! [`Role`]; credits for a television episode become a [`TvRole`].
//!
//! ## Quick Start
//!
//! ```rust
//! use cameo_core::parser::RoleParser;
//!
//! let parser = RoleParser::with_defaults().unwrap();
//! let credit = parser.parse("EuroTrip (2004)  [Jenny]  <6>").unwrap();
//!
//! assert_eq!(credit.title(), "EuroTrip");
//! assert_eq!(credit.year(), Some(2004));
//! assert_eq!(credit.character(), Some("Jenny"));
//! assert_eq!(credit.credit(), Some(6));
//! ```
pub mod error;
pub mod parser;
pub mod types;

// Re-export primary API
pub use error::{CameoError, Result};
pub use parser::{AmbiguousEpisode, ParserConfig, RoleParser, parse};
pub use types::{Credit, EpisodeBlock, Role, TvRole};
