//! Layered password generation and depth analysis
//!
//! Passwords are scored by the number of transformation layers they appear
//! to contain. Generation applies successive randomized layers on top of a
//! random alphanumeric base; analysis runs five independent detectors. The
//! two sides share one layer taxonomy but are not inverses of each other:
//! a password generated at depth 5 is not guaranteed to analyze as depth 5.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based generation and analysis with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DEPTH_BASE_LENGTH`: Base length read by [`DepthConfig::from_env`]
//!   (default: 8)
//!
//! # Example
//!
//! ```rust
//! use pwd_depth::{analyze_password_depth, format_analysis, generate_password, verify_password_depth};
//! use secrecy::SecretString;
//!
//! let generated = generate_password(4, 12).expect("depth is at least 1");
//! let analysis = analyze_password_depth(&generated);
//! println!("{}", format_analysis(&analysis));
//!
//! let password = SecretString::new("Hello123".to_string().into());
//! assert!(verify_password_depth(&password, 3));
//! ```

// Internal modules
mod analyzer;
mod config;
mod depth;
mod detectors;
mod error;
mod generator;
mod layers;
mod random;
mod types;

// Public API
pub use analyzer::{analyze_password_depth, verify_password_depth};
pub use config::{ConfigError, DepthConfig, BASE_LENGTH_ENV};
pub use depth::PasswordDepth;
pub use detectors::DepthLayer;
pub use error::DepthError;
pub use generator::{generate_password, generate_password_with, DEFAULT_BASE_LENGTH};
pub use layers::{apply_layer, TransformKind, SYMBOLS};
pub use random::{OsRandom, RandomSource};
pub use types::{format_analysis, DepthStrength, PasswordDepthAnalysis};

#[cfg(feature = "async")]
pub use analyzer::analyze_password_depth_tx;

#[cfg(feature = "async")]
pub use generator::generate_password_tx;
