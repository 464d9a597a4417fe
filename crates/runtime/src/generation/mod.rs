//! Word-pair acquisition for a new round.
//!
//! [`WordSource`] asks the configured [`WordGenerator`] first and falls back
//! to the static [`WordPool`] whenever the generator fails or hands back a
//! pair without a secret word.
//!
//! [`build_prompt`] and [`parse_word_pair`] are not used by the bundled
//! generators; they are the building blocks for a [`WordGenerator`] backed by
//! a language-model service.

mod prompt;
mod response;

pub use prompt::{Prompt, build_prompt};
pub use response::parse_word_pair;

use std::sync::Arc;

use party_content::WordPool;
use party_core::env::context;
use party_core::{PcgRng, WordPair, compute_seed};
use tracing::{debug, warn};

use crate::api::{GenerationError, GenerationRequest, Result, RuntimeError, WordGenerator};

/// Where a drawn pair came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordOrigin {
    Generated,
    /// The generator failed with `reason` and the pool was used.
    Fallback { reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawnWords {
    pub pair: WordPair,
    pub origin: WordOrigin,
}

impl DrawnWords {
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, WordOrigin::Fallback { .. })
    }
}

/// Generator plus offline pool.
#[derive(Clone)]
pub struct WordSource {
    generator: Arc<dyn WordGenerator>,
    pool: WordPool,
}

impl WordSource {
    pub fn new(generator: Arc<dyn WordGenerator>, pool: WordPool) -> Self {
        Self { generator, pool }
    }

    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    /// Draws one pair for `request`.
    ///
    /// Only an empty pool after a generator failure is an error.
    pub async fn draw(&self, request: &GenerationRequest, seed: u64) -> Result<DrawnWords> {
        let generated = self.generator.generate(request).await.and_then(|pair| {
            let pair = pair.trimmed();
            if pair.secret_word.is_empty() {
                Err(GenerationError::MalformedResponse(
                    "secret word is empty".into(),
                ))
            } else {
                Ok(pair)
            }
        });

        match generated {
            Ok(pair) => {
                debug!(
                    target: "runtime::generation",
                    category = %pair.category,
                    "generator produced word pair"
                );
                Ok(DrawnWords {
                    pair,
                    origin: WordOrigin::Generated,
                })
            }
            Err(error) => {
                warn!(
                    target: "runtime::generation",
                    error = %error,
                    excluded = request.exclude_words.len(),
                    "word generation failed, using fallback pool"
                );

                let fallback_seed = compute_seed(seed, 0, 0, context::FALLBACK);
                let pair = self
                    .pool
                    .pick(&request.exclude_words, &PcgRng, fallback_seed)
                    .cloned()
                    .ok_or_else(|| {
                        RuntimeError::StartAborted(format!(
                            "{error}; fallback word pool is empty"
                        ))
                    })?;

                Ok(DrawnWords {
                    pair,
                    origin: WordOrigin::Fallback {
                        reason: error.to_string(),
                    },
                })
            }
        }
    }
}
