//! Static word content and loaders.
//!
//! This crate houses the content the games draw from:
//! - The built-in fallback word pool used when generation fails
//! - The category list offered on the setup screen
//! - Custom word pools (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content feeds the session runtime and never appears in round state except
//! as the [`party_core::WordPair`] that was drawn.

pub mod categories;
pub mod words;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use categories::{CATEGORIES, is_known_category};
pub use words::{FALLBACK_WORDS, WordPool};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, WordPoolLoader};
