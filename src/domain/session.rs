//! Relay session value objects

use std::fmt;
use std::io;
use std::time::Duration;

/// How the read phase of a session ended
#[derive(Debug)]
pub enum ReadEnd {
    /// Peer closed its side
    EndOfStream,
    /// Read deadline elapsed; the data read so far is the payload
    Timeout,
    /// Transport failure other than the deadline
    Failed(io::Error),
}

impl ReadEnd {
    /// Whether the payload should be forwarded to the clipboard
    pub fn is_complete(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for ReadEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfStream => write!(f, "end of stream"),
            Self::Timeout => write!(f, "read deadline elapsed"),
            Self::Failed(e) => write!(f, "{}", e),
        }
    }
}

/// Result of reading one session's payload
#[derive(Debug)]
pub struct ReadOutcome {
    pub data: Vec<u8>,
    pub ended_by: ReadEnd,
}

impl ReadOutcome {
    /// Payload interpreted as text. Invalid UTF-8 is replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

/// What happens to in-flight sessions when the server stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShutdownPolicy {
    /// Stop accepting and return immediately. In-flight sessions are
    /// abandoned when the process exits.
    #[default]
    Hard,
    /// Stop accepting, then wait up to the grace period for sessions to end
    Drain(Duration),
}

impl ShutdownPolicy {
    /// Build from a grace period in milliseconds (0 means hard)
    pub fn from_grace_millis(ms: u64) -> Self {
        if ms == 0 {
            Self::Hard
        } else {
            Self::Drain(Duration::from_millis(ms))
        }
    }
}

impl fmt::Display for ShutdownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hard => write!(f, "hard"),
            Self::Drain(grace) => write!(f, "drain ({}ms)", grace.as_millis()),
        }
    }
}

/// Build metadata reported in the startup banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub commit: String,
    pub date: String,
}

impl BuildInfo {
    /// Metadata baked in at compile time
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            commit: option_env!("COPIER_COMMIT").unwrap_or("unknown").to_string(),
            date: option_env!("COPIER_BUILD_DATE")
                .unwrap_or("unknown")
                .to_string(),
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "version: {}, commit: {}, date: {}",
            self.version, self.commit, self.date
        )
    }
}
