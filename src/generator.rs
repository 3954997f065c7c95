//! Password generator - random base string plus successive layers.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::error::DepthError;
use crate::layers::TransformKind;
use crate::random::{OsRandom, RandomSource};

/// Default number of characters in the base string.
pub const DEFAULT_BASE_LENGTH: usize = 8;

const ALPHANUMERIC: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a password of the given depth from OS entropy.
///
/// # Arguments
/// * `depth` - Number of layers, the base string counts as the first
/// * `base_length` - Characters in the base string
///
/// # Errors
/// Returns `DepthError::InvalidArgument` if `depth` is zero.
pub fn generate_password(depth: usize, base_length: usize) -> Result<SecretString, DepthError> {
    generate_password_with(depth, base_length, &OsRandom)
}

/// Same as [`generate_password`] but draws randomness from `rng`.
pub fn generate_password_with<R: RandomSource + ?Sized>(
    depth: usize,
    base_length: usize,
    rng: &R,
) -> Result<SecretString, DepthError> {
    check_depth(depth)?;

    #[cfg(feature = "tracing")]
    tracing::debug!("Generating password: depth={}, base_length={}", depth, base_length);

    let mut password = base_string(base_length, rng);
    for layer in 1..depth {
        password = next_layer(&password, layer, rng);
    }

    Ok(SecretString::new(password.into()))
}

fn check_depth(depth: usize) -> Result<(), DepthError> {
    if depth < 1 {
        #[cfg(feature = "tracing")]
        tracing::warn!("Rejected generation request with depth {}", depth);
        return Err(DepthError::InvalidArgument(
            "depth must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn next_layer<R: RandomSource + ?Sized>(password: &str, layer: usize, rng: &R) -> String {
    let kind = TransformKind::for_layer(layer);
    let result = kind.apply(password, rng);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        "Applied layer {} ({}), length now {}",
        layer,
        kind.name(),
        result.chars().count()
    );

    result
}

fn base_string<R: RandomSource + ?Sized>(length: usize, rng: &R) -> String {
    rng.next_bytes(length)
        .into_iter()
        .map(|b| ALPHANUMERIC[b as usize % ALPHANUMERIC.len()] as char)
        .collect()
}

/// Async version that sends the generated password via channel.
///
/// Yields to the runtime after every layer and checks the token before the
/// next one. A cancelled run sends nothing; an invalid depth sends the error.
#[cfg(feature = "async")]
pub async fn generate_password_tx(
    depth: usize,
    base_length: usize,
    token: CancellationToken,
    tx: mpsc::Sender<Result<SecretString, DepthError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("generation is about to start...");

    let result = match check_depth(depth) {
        Ok(()) => {
            let rng = OsRandom;
            let mut password = base_string(base_length, &rng);
            for layer in 1..depth {
                if token.is_cancelled() {
                    #[cfg(feature = "tracing")]
                    tracing::info!("Generation cancelled before layer {}", layer);
                    return;
                }
                password = next_layer(&password, layer, &rng);
                tokio::task::yield_now().await;
            }
            Ok(SecretString::new(password.into()))
        }
        Err(e) => Err(e),
    };

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("Generation cancelled, result discarded");
        return;
    }

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send generated password: {}", _e);
    }
}
