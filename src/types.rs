//! Analysis result types.

use std::fmt;

use crate::detectors::DepthLayer;

const EMPTY_DESCRIPTION: &str = "Empty password";

/// Coarse strength label derived from depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthStrength {
    /// Empty input, nothing was analyzed.
    None,
    Unknown,
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl DepthStrength {
    pub fn from_depth(depth: usize) -> Self {
        match depth {
            1 => DepthStrength::VeryWeak,
            2 => DepthStrength::Weak,
            3 => DepthStrength::Moderate,
            4 => DepthStrength::Strong,
            d if d >= 5 => DepthStrength::VeryStrong,
            _ => DepthStrength::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DepthStrength::None => "None",
            DepthStrength::Unknown => "Unknown",
            DepthStrength::VeryWeak => "Very Weak",
            DepthStrength::Weak => "Weak",
            DepthStrength::Moderate => "Moderate",
            DepthStrength::Strong => "Strong",
            DepthStrength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for DepthStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a depth analysis. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDepthAnalysis {
    layers: Vec<DepthLayer>,
    description: String,
    strength: DepthStrength,
}

impl PasswordDepthAnalysis {
    pub(crate) fn empty() -> Self {
        Self {
            layers: Vec::new(),
            description: EMPTY_DESCRIPTION.to_string(),
            strength: DepthStrength::None,
        }
    }

    pub(crate) fn from_layers(layers: Vec<DepthLayer>) -> Self {
        let depth = layers.len();
        Self {
            layers,
            description: format!("Password has {} layers of depth", depth),
            strength: DepthStrength::from_depth(depth),
        }
    }

    /// Number of detected layers.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Detected layers in evaluation order.
    pub fn layers(&self) -> &[DepthLayer] {
        &self.layers
    }

    pub fn layer_names(&self) -> Vec<&'static str> {
        self.layers.iter().map(|l| l.name()).collect()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn strength(&self) -> DepthStrength {
        self.strength
    }
}

impl fmt::Display for PasswordDepthAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.description)?;
        write!(f, "Strength: {}", self.strength)?;
        for layer in &self.layers {
            write!(f, "\n  - {}", layer.name())?;
        }
        Ok(())
    }
}

/// Renders an analysis as a multi-line report.
pub fn format_analysis(analysis: &PasswordDepthAnalysis) -> String {
    analysis.to_string()
}
