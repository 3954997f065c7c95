//! Facade combining the generator and the analyzer.

use secrecy::SecretString;

use crate::analyzer::{analyze_password_depth, verify_password_depth};
use crate::config::DepthConfig;
use crate::error::DepthError;
use crate::generator::generate_password_with;
use crate::random::{OsRandom, RandomSource};
use crate::types::PasswordDepthAnalysis;

/// Generates, analyzes and verifies passwords by depth.
///
/// Holds no state besides its settings and random source; [`OsRandom`] is
/// thread-safe, so one `PasswordDepth` can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct PasswordDepth<R = OsRandom> {
    config: DepthConfig,
    rng: R,
}

impl PasswordDepth<OsRandom> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DepthConfig) -> Self {
        Self {
            config,
            rng: OsRandom,
        }
    }
}

impl<R: RandomSource> PasswordDepth<R> {
    /// Uses `rng` instead of OS entropy.
    pub fn with_source(config: DepthConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &DepthConfig {
        &self.config
    }

    /// Generates a password with the configured base length.
    pub fn generate(&self, depth: usize) -> Result<SecretString, DepthError> {
        self.generate_with_length(depth, self.config.base_length)
    }

    pub fn generate_with_length(
        &self,
        depth: usize,
        base_length: usize,
    ) -> Result<SecretString, DepthError> {
        generate_password_with(depth, base_length, &self.rng)
    }

    pub fn analyze(&self, password: &SecretString) -> PasswordDepthAnalysis {
        analyze_password_depth(password)
    }

    pub fn verify(&self, password: &SecretString, minimum_depth: usize) -> bool {
        verify_password_depth(password, minimum_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;
    use crate::types::DepthStrength;
    use secrecy::ExposeSecret;

    #[test]
    fn test_generate_uses_configured_length() {
        let depth = PasswordDepth::with_config(DepthConfig::new(20));
        let pwd = depth.generate(1).unwrap();
        assert_eq!(pwd.expose_secret().chars().count(), 20);
    }

    #[test]
    fn test_generate_default_length() {
        let pwd = PasswordDepth::new().generate(1).unwrap();
        assert_eq!(pwd.expose_secret().chars().count(), 8);
    }

    #[test]
    fn test_generate_invalid_depth() {
        let result = PasswordDepth::new().generate(0);
        assert!(matches!(result, Err(DepthError::InvalidArgument(_))));
    }

    #[test]
    fn test_with_source_is_deterministic() {
        let a = PasswordDepth::with_source(DepthConfig::new(6), SequenceRandom::new(&[5, 40, 99]));
        let b = PasswordDepth::with_source(DepthConfig::new(6), SequenceRandom::new(&[5, 40, 99]));
        let pa = a.generate(5).unwrap();
        let pb = b.generate(5).unwrap();
        assert_eq!(pa.expose_secret(), pb.expose_secret());
    }

    #[test]
    fn test_analyze_and_verify() {
        let depth = PasswordDepth::new();
        let pwd = SecretString::new("Hello123".to_string().into());
        let analysis = depth.analyze(&pwd);
        assert_eq!(analysis.strength(), DepthStrength::Strong);
        assert!(depth.verify(&pwd, 4));
        assert!(!depth.verify(&pwd, 5));
    }

    #[test]
    fn test_generated_password_round_trip_is_loose() {
        let depth = PasswordDepth::with_config(DepthConfig::new(16));
        let pwd = depth.generate(5).unwrap();
        let analysis = depth.analyze(&pwd);
        assert!(analysis.depth() >= 1 && analysis.depth() <= 5);
        assert!(depth.verify(&pwd, 1));
    }
}
