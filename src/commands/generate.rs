//! Puzzle generation command
//!
//! Retries the random walk until it produces a ladder or runs out of attempts.

use crate::errors::GeneratorError;
use crate::graph::GraphRegistry;
use crate::solver::{Generation, Generator};
use rand::Rng;

/// Attempts made before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Configuration for generating a puzzle
pub struct GenerateConfig {
    pub word_length: usize,
    pub ladder_length: usize,
    pub max_attempts: usize,
}

impl GenerateConfig {
    #[must_use]
    pub const fn new(word_length: usize, ladder_length: usize) -> Self {
        Self {
            word_length,
            ladder_length,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// A generated ladder
pub struct GenerateResult {
    /// Upper-case words, first to last
    pub words: Vec<String>,
    /// Attempts used, including the successful one
    pub attempts: usize,
}

impl GenerateResult {
    #[must_use]
    pub fn start(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    #[must_use]
    pub fn end(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }
}

/// Generate a ladder, retrying dead ends up to `config.max_attempts` times
///
/// # Errors
///
/// Returns `GeneratorError::RetriesExhausted` if every attempt hit a dead end,
/// or any error from setting up the [`Generator`].
pub fn generate_puzzle<R: Rng + ?Sized>(
    registry: &GraphRegistry,
    config: &GenerateConfig,
    rng: &mut R,
) -> Result<GenerateResult, GeneratorError> {
    let generator = Generator::new(registry, config.word_length, config.ladder_length)?;

    for attempt in 1..=config.max_attempts {
        match generator.generate(rng) {
            Generation::Ladder(words) => {
                return Ok(GenerateResult {
                    words: words.iter().map(|w| w.text().to_string()).collect(),
                    attempts: attempt,
                });
            }
            Generation::Retry => {
                log::debug!("Attempt {attempt} of {} hit a dead end", config.max_attempts);
            }
        }
    }

    log::warn!(
        "No {}-word ladder of {}-letter words after {} attempts",
        config.ladder_length,
        config.word_length,
        config.max_attempts
    );
    Err(GeneratorError::RetriesExhausted {
        attempts: config.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generates_requested_shape() {
        let registry = GraphRegistry::default();
        let mut config = GenerateConfig::new(4, 5);
        config.max_attempts = 100;
        let mut rng = StdRng::seed_from_u64(11);

        let result = generate_puzzle(&registry, &config, &mut rng).unwrap();

        assert_eq!(result.words.len(), 5);
        assert!(result.words.iter().all(|w| w.len() == 4));
        assert!((1..=100).contains(&result.attempts));
        assert_ne!(result.start(), result.end());
    }

    #[test]
    fn generated_puzzle_is_solvable_at_its_length() {
        let registry = GraphRegistry::default();
        let mut config = GenerateConfig::new(3, 4);
        config.max_attempts = 100;
        let mut rng = StdRng::seed_from_u64(5);

        let result = generate_puzzle(&registry, &config, &mut rng).unwrap();
        let (start, end) = (result.start().unwrap(), result.end().unwrap());
        let minimum = crate::commands::minimum_length(&registry, start, end)
            .unwrap()
            .unwrap();

        assert!(minimum <= result.words.len());
    }

    #[test]
    fn zero_attempts_exhausts_immediately() {
        let registry = GraphRegistry::default();
        let mut config = GenerateConfig::new(4, 5);
        config.max_attempts = 0;
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            generate_puzzle(&registry, &config, &mut rng),
            Err(GeneratorError::RetriesExhausted { attempts: 0 })
        ));
    }

    #[test]
    fn setup_errors_pass_through() {
        let registry = GraphRegistry::default();
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            generate_puzzle(&registry, &GenerateConfig::new(4, 0), &mut rng),
            Err(GeneratorError::InvalidLadderLength(0))
        ));
        assert!(matches!(
            generate_puzzle(&registry, &GenerateConfig::new(30, 4), &mut rng),
            Err(GeneratorError::Load(_))
        ));
    }
}
