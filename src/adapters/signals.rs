use crate::domain::model::AbortReason;
use crate::domain::ports::AbortSource;
use async_trait::async_trait;
use std::io;

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

/// Turns process termination signals into an abort request.
///
/// Handlers are registered by [`SignalAbort::install`] and stay in place
/// until the process exits, so a signal arriving between polls is not lost.
#[cfg(unix)]
pub struct SignalAbort {
    interrupt: Signal,
    hangup: Signal,
    abort: Signal,
    terminate: Signal,
}

#[cfg(unix)]
impl SignalAbort {
    pub fn install() -> io::Result<Self> {
        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            hangup: signal(SignalKind::hangup())?,
            abort: signal(SignalKind::from_raw(libc::SIGABRT))?,
            terminate: signal(SignalKind::terminate())?,
        })
    }
}

#[cfg(unix)]
#[async_trait]
impl AbortSource for SignalAbort {
    async fn aborted(&mut self) -> AbortReason {
        tokio::select! {
            _ = self.interrupt.recv() => AbortReason::Interrupt,
            _ = self.hangup.recv() => AbortReason::Hangup,
            _ = self.abort.recv() => AbortReason::Abort,
            _ = self.terminate.recv() => AbortReason::Terminate,
        }
    }
}

/// Only Ctrl-C can be intercepted here.
#[cfg(not(unix))]
pub struct SignalAbort {
    _private: (),
}

#[cfg(not(unix))]
impl SignalAbort {
    pub fn install() -> io::Result<Self> {
        Ok(Self { _private: () })
    }
}

#[cfg(not(unix))]
#[async_trait]
impl AbortSource for SignalAbort {
    async fn aborted(&mut self) -> AbortReason {
        match tokio::signal::ctrl_c().await {
            Ok(()) => AbortReason::Interrupt,
            Err(err) => {
                tracing::error!("failed to listen for Ctrl+C: {}", err);
                std::future::pending().await
            }
        }
    }
}
