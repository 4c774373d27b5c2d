use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use thiserror::Error;

use crate::models::PasswordSpec;

/// Longest password any front end will ask for.
pub const MAX_PASSWORD_LENGTH: usize = u16::MAX as usize;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Please select at least one character type")]
    InvalidConfiguration,

    #[error("Password length must be between 1 and 65535 characters")]
    InvalidLength,
}

pub struct PasswordGenerator<R = rand::rngs::ThreadRng> {
    rng: R,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    /// Draw `spec.length` characters independently and uniformly from the
    /// union of the selected classes.
    pub fn generate_password(&mut self, spec: &PasswordSpec) -> Result<String, GeneratorError> {
        let alphabet = spec.alphabet();
        if alphabet.is_empty() {
            return Err(GeneratorError::InvalidConfiguration);
        }
        if spec.length == 0 || spec.length > MAX_PASSWORD_LENGTH {
            return Err(GeneratorError::InvalidLength);
        }

        let index = Uniform::from(0..alphabet.len());
        let password: String = (0..spec.length)
            .map(|_| alphabet[index.sample(&mut self.rng)])
            .collect();

        log::debug!(
            "Generated {}-character password from a {}-character alphabet",
            spec.length,
            alphabet.len()
        );
        Ok(password)
    }
}
