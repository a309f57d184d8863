//! Stderr log writer that goes quiet while the TUI owns the terminal

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

static SCREEN_CLAIMED: AtomicBool = AtomicBool::new(false);

/// Marks the terminal as taken by the TUI until dropped
#[derive(Debug)]
pub struct ScreenClaim(());

impl ScreenClaim {
    #[must_use]
    pub fn acquire() -> Self {
        SCREEN_CLAIMED.store(true, Ordering::Release);
        Self(())
    }
}

impl Drop for ScreenClaim {
    fn drop(&mut self) {
        SCREEN_CLAIMED.store(false, Ordering::Release);
    }
}

/// Destination for one stderr log record
#[derive(Debug)]
pub enum LogTarget {
    Stderr(io::Stderr),
    Discard,
}

impl Write for LogTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stderr(stderr) => stderr.write(buf),
            Self::Discard => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stderr(stderr) => stderr.flush(),
            Self::Discard => Ok(()),
        }
    }
}

/// Writer factory for the stderr log layer
///
/// Records emitted while a [`ScreenClaim`] is held are dropped so they
/// cannot scribble over the alternate screen.
#[must_use]
pub fn stderr_log_target() -> LogTarget {
    if SCREEN_CLAIMED.load(Ordering::Acquire) {
        LogTarget::Discard
    } else {
        LogTarget::Stderr(io::stderr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_silences_stderr_until_dropped() {
        assert!(matches!(stderr_log_target(), LogTarget::Stderr(_)));

        let claim = ScreenClaim::acquire();
        let mut target = stderr_log_target();
        assert!(matches!(target, LogTarget::Discard));
        assert_eq!(target.write(b"hidden").unwrap(), 6);
        target.flush().unwrap();

        drop(claim);
        assert!(matches!(stderr_log_target(), LogTarget::Stderr(_)));
    }
}
