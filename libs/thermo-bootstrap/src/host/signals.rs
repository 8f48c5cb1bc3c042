use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Root cancellation token, cancelled on the first Ctrl+C or SIGTERM.
///
/// Must be called from within a tokio runtime. A listener that cannot be
/// installed is logged and never fires; the other one still does.
#[must_use]
pub fn shutdown_token() -> CancellationToken {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();

    tokio::spawn(async move {
        let source = tokio::select! {
            source = ctrl_c() => source,
            source = terminate() => source,
        };
        tracing::info!(signal = source, "shutdown requested, draining connections");
        trigger.cancel();
    });

    cancel
}

async fn ctrl_c() -> &'static str {
    if let Err(e) = signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    "ctrl-c"
}

#[cfg(unix)]
async fn terminate() -> &'static str {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            tracing::warn!(error = %e, "cannot install SIGTERM handler");
            std::future::pending::<()>().await;
        }
    }
    "sigterm"
}

#[cfg(not(unix))]
async fn terminate() -> &'static str {
    std::future::pending::<&'static str>().await
}
