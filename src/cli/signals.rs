//! Termination signal handling for the relay

use std::fmt;
use std::io;

/// Signals that stop the relay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    /// SIGINT / Ctrl+C
    Interrupt,
    /// SIGTERM
    Terminate,
}

impl fmt::Display for TerminationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interrupt => write!(f, "SIGINT"),
            Self::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// Registered handlers for SIGINT and SIGTERM.
///
/// Registration happens in `new` so that a signal arriving between startup
/// and the first `recv` is not lost.
#[cfg(unix)]
pub struct TerminationSignals {
    sigint: tokio::signal::unix::Signal,
    sigterm: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl TerminationSignals {
    pub fn new() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            sigint: signal(SignalKind::interrupt())?,
            sigterm: signal(SignalKind::terminate())?,
        })
    }

    /// Wait for the next termination signal
    pub async fn recv(&mut self) -> TerminationSignal {
        tokio::select! {
            _ = self.sigint.recv() => TerminationSignal::Interrupt,
            _ = self.sigterm.recv() => TerminationSignal::Terminate,
        }
    }
}

/// Ctrl+C only on platforms without Unix signals
#[cfg(not(unix))]
pub struct TerminationSignals;

#[cfg(not(unix))]
impl TerminationSignals {
    pub fn new() -> io::Result<Self> {
        Ok(Self)
    }

    pub async fn recv(&mut self) -> TerminationSignal {
        let _ = tokio::signal::ctrl_c().await;
        TerminationSignal::Interrupt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_names() {
        assert_eq!(TerminationSignal::Interrupt.to_string(), "SIGINT");
        assert_eq!(TerminationSignal::Terminate.to_string(), "SIGTERM");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn sigterm_is_received() {
        use nix::sys::signal::{raise, Signal};

        let mut signals = TerminationSignals::new().unwrap();
        raise(Signal::SIGTERM).unwrap();
        let received = tokio::time::timeout(std::time::Duration::from_secs(5), signals.recv())
            .await
            .expect("signal delivered");
        assert_eq!(received, TerminationSignal::Terminate);
    }
}
