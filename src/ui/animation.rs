//! Animation pacing.
//!
//! The ticker thread emits [`Command::Step`] at a fixed interval; the
//! owner loop does the actual algorithm stepping and repainting, so the
//! working array is never touched off-thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

use super::app::Command;

/// Handle to a running animation ticker.
///
/// Dropping the handle stops the thread: the stop flag is set and the
/// thread joined, which takes at most one pacing interval. Ticks already
/// queued when an animation completes are ignored by the state machine.
pub struct Ticker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawn a ticker sending [`Command::Step`] every `interval`.
    pub fn spawn(tx: Sender<Command>, interval: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            debug!(?interval, "ticker started");
            while !flag.load(Ordering::Relaxed) {
                if tx.send(Command::Step).is_err() {
                    break;
                }
                thread::sleep(interval);
            }
            debug!("ticker stopped");
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn ticker_sends_steps_until_dropped() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::spawn(tx, Duration::from_millis(1));
        // At least one step arrives promptly.
        let cmd = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert_eq!(cmd, Command::Step);
        drop(ticker);
        // After the drop joins the thread, the channel drains and closes.
        while rx.try_recv().is_ok() {}
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn ticker_exits_when_channel_closes() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::spawn(tx, Duration::from_millis(1));
        drop(rx);
        // Dropping joins; the thread must have noticed the closed channel.
        drop(ticker);
    }
}
