//! Cancellation tied to process shutdown signals, and channel receives that honor cancellation.

use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecvError {
    #[error("context cancelled")]
    Cancelled,

    #[error("channel closed")]
    ChannelClosed,
}

/// A child of some parent token, cancelled as well when the process receives SIGINT or SIGTERM
/// (Ctrl-C on non-unix targets).
///
/// Dropping it stops listening for signals without cancelling the token.
#[derive(Debug)]
pub struct NotifyContext {
    token: CancellationToken,
    listener: JoinHandle<()>,
}

impl NotifyContext {
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves once the token is cancelled, by a signal, the parent, or [`stop`](Self::stop).
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }

    /// Cancels the token and releases the signal listener.
    pub fn stop(self) {
        self.token.cancel();
    }
}

impl Drop for NotifyContext {
    fn drop(&mut self) {
        self.listener.abort();
    }
}

/// Derives a token from `parent` that is also cancelled on the first shutdown signal.
///
/// Must be called from within a tokio runtime.
pub fn with_notify_context(parent: &CancellationToken) -> NotifyContext {
    let token = parent.child_token();
    let listener = tokio::spawn(cancel_on_signal(token.clone()));

    NotifyContext { token, listener }
}

async fn cancel_on_signal(token: CancellationToken) {
    tokio::select! {
        _ = token.cancelled() => {}
        signal = shutdown_signal() => match signal {
            Ok(name) => {
                tracing::info!(signal = name, "shutdown signal received, cancelling context");
                token.cancel();
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for shutdown signals");
            }
        },
    }
}

#[cfg(unix)]
async fn shutdown_signal() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    let mut interrupt = signal(SignalKind::interrupt())?;

    tokio::select! {
        _ = terminate.recv() => Ok("SIGTERM"),
        _ = interrupt.recv() => Ok("SIGINT"),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("ctrl-c")
}

/// Channel receivers [`recv_context`] can wait on.
pub trait Receiver<T> {
    fn recv(&mut self) -> impl Future<Output = Option<T>>;
}

impl<T> Receiver<T> for mpsc::Receiver<T> {
    fn recv(&mut self) -> impl Future<Output = Option<T>> {
        mpsc::Receiver::recv(self)
    }
}

impl<T> Receiver<T> for mpsc::UnboundedReceiver<T> {
    fn recv(&mut self) -> impl Future<Output = Option<T>> {
        mpsc::UnboundedReceiver::recv(self)
    }
}

/// Receives the next value from `rx`, giving up when `token` is cancelled.
///
/// Cancellation wins if a value is ready at the same time. A closed and drained channel yields
/// [`RecvError::ChannelClosed`].
pub async fn recv_context<T, R>(token: &CancellationToken, rx: &mut R) -> Result<T, RecvError>
where
    R: Receiver<T>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(RecvError::Cancelled),
        value = rx.recv() => value.ok_or(RecvError::ChannelClosed),
    }
}
