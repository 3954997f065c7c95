//! Layer detectors
//!
//! Each detector is an independent predicate recognising one layer
//! signature. The analyzer runs them in [`DepthLayer::ALL`] order.

mod base;
mod cryptographic;
mod diversity;
mod encoding;
mod positional;

pub use base::base_layer;
pub use cryptographic::cryptographic_depth;
pub use diversity::character_diversity;
pub use encoding::encoding_pattern;
pub use positional::positional_randomness;

use std::fmt;

/// Signature function type shared by all detectors.
pub type Detector = fn(&str) -> bool;

/// The five layer signatures recognised by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthLayer {
    Base,
    CharacterDiversity,
    PositionalRandomness,
    EncodingPattern,
    CryptographicDepth,
}

impl DepthLayer {
    /// Evaluation order.
    pub const ALL: [DepthLayer; 5] = [
        DepthLayer::Base,
        DepthLayer::CharacterDiversity,
        DepthLayer::PositionalRandomness,
        DepthLayer::EncodingPattern,
        DepthLayer::CryptographicDepth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DepthLayer::Base => "Base",
            DepthLayer::CharacterDiversity => "Character Diversity",
            DepthLayer::PositionalRandomness => "Positional Randomness",
            DepthLayer::EncodingPattern => "Encoding Pattern",
            DepthLayer::CryptographicDepth => "Cryptographic Depth",
        }
    }

    pub fn detector(&self) -> Detector {
        match self {
            DepthLayer::Base => base_layer,
            DepthLayer::CharacterDiversity => character_diversity,
            DepthLayer::PositionalRandomness => positional_randomness,
            DepthLayer::EncodingPattern => encoding_pattern,
            DepthLayer::CryptographicDepth => cryptographic_depth,
        }
    }

    /// Returns `true` if `password` shows this layer's signature.
    pub fn detect(&self, password: &str) -> bool {
        (self.detector())(password)
    }
}

impl fmt::Display for DepthLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_evaluation_order() {
        let names: Vec<&str> = DepthLayer::ALL.iter().map(|l| l.name()).collect();
        assert_eq!(
            names,
            vec![
                "Base",
                "Character Diversity",
                "Positional Randomness",
                "Encoding Pattern",
                "Cryptographic Depth",
            ]
        );
    }

    #[test]
    fn test_detect_dispatches() {
        assert!(DepthLayer::Base.detect("x"));
        assert!(!DepthLayer::CharacterDiversity.detect("abc"));
        assert!(DepthLayer::EncodingPattern.detect("a!"));
        assert_eq!(DepthLayer::CryptographicDepth.to_string(), "Cryptographic Depth");
    }
}
