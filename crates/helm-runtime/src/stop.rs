//! Cooperative stop flag shared between the loop and its callers

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle to a loop's running flag.
///
/// Stopping never interrupts a frame: the loop checks the flag only between
/// frames, so the frame in progress always completes.
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    running: Arc<AtomicBool>,
}

impl StopHandle {
    /// A handle in the not-running state
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the loop exit after its current frame
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub(crate) fn arm(&self) {
        self.running.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_flag() {
        let handle = StopHandle::new();
        let other = handle.clone();
        assert!(!handle.is_running());

        handle.arm();
        assert!(other.is_running());

        other.stop();
        assert!(!handle.is_running());
    }

    #[test]
    fn test_stop_from_other_thread() {
        let handle = StopHandle::new();
        handle.arm();
        let remote = handle.clone();
        std::thread::spawn(move || remote.stop()).join().unwrap();
        assert!(!handle.is_running());
    }
}
