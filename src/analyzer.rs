//! Depth analyzer - runs every layer detector and aggregates the result.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::detectors::DepthLayer;
use crate::types::PasswordDepthAnalysis;

/// Analyzes how many layer signatures a password exhibits.
///
/// Never fails: an empty password yields the degenerate analysis with
/// depth 0 and strength `None`.
pub fn analyze_password_depth(password: &SecretString) -> PasswordDepthAnalysis {
    analyze_str(password.expose_secret())
}

/// Returns `true` if the analyzed depth reaches `minimum_depth`.
pub fn verify_password_depth(password: &SecretString, minimum_depth: usize) -> bool {
    analyze_password_depth(password).depth() >= minimum_depth
}

pub(crate) fn analyze_str(pwd: &str) -> PasswordDepthAnalysis {
    if pwd.is_empty() {
        return PasswordDepthAnalysis::empty();
    }

    // Orchestrator: every detector runs, in fixed order
    let layers: Vec<DepthLayer> = DepthLayer::ALL
        .into_iter()
        .filter(|layer| layer.detect(pwd))
        .collect();

    let analysis = PasswordDepthAnalysis::from_layers(layers);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Password analyzed: depth={}, strength={}",
        analysis.depth(),
        analysis.strength()
    );

    analysis
}

/// Async version that sends the analysis via channel.
///
/// Nothing is sent if the token is cancelled before the analysis completes.
#[cfg(feature = "async")]
pub async fn analyze_password_depth_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordDepthAnalysis>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("Analysis cancelled");
        return;
    }

    let analysis = analyze_password_depth(password);

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("Analysis cancelled, result discarded");
        return;
    }

    if let Err(_e) = tx.send(analysis).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password depth analysis: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test]
    async fn test_analyze_password_depth_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let pwd = SecretString::new("Hello123".to_string().into());

        analyze_password_depth_tx(&pwd, token, tx).await;

        let analysis = rx.recv().await.expect("Should receive analysis");
        assert_eq!(analysis.depth(), 4);
    }

    #[tokio::test]
    async fn test_analyze_password_depth_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();
        let pwd = SecretString::new("Hello123".to_string().into());

        analyze_password_depth_tx(&pwd, token, tx).await;

        // Sender dropped without sending
        assert!(rx.recv().await.is_none());
    }
}
