//! Periodic tick loop with Ctrl+C shutdown.

use std::time::Duration;

use anyhow::{Context, Result};
use crossbeam::channel::{self, Receiver};

use crate::debug;

/// Fires a callback at a fixed interval on the calling thread.
///
/// The first tick fires one full interval after `run` starts, not at
/// once. Each callback runs to completion before the next tick is awaited;
/// ticks that elapse meanwhile collapse into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    interval: Duration,
    limit: Option<u64>,
}

impl Ticker {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            limit: None,
        }
    }

    /// Stop after `limit` ticks (`None` runs until shutdown).
    pub const fn with_limit(mut self, limit: Option<u64>) -> Self {
        self.limit = limit;
        self
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Run until the limit is reached or `shutdown` fires (or disconnects).
    ///
    /// Returns the number of ticks fired.
    pub fn run(&self, shutdown: &Receiver<()>, mut on_tick: impl FnMut()) -> u64 {
        let ticks = channel::tick(self.interval);
        let mut fired = 0;

        while !self.is_done(fired) {
            crossbeam::select! {
                recv(ticks) -> _ => {
                    on_tick();
                    fired += 1;
                    debug!("clock"; "tick {}", fired);
                }
                recv(shutdown) -> _ => {
                    debug!("clock"; "shutdown after {} ticks", fired);
                    break;
                }
            }
        }

        fired
    }

    fn is_done(&self, fired: u64) -> bool {
        self.limit.is_some_and(|limit| fired >= limit)
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

/// Install a Ctrl+C handler and return the receiving end of its signal.
///
/// Can only be called once per process.
pub fn shutdown_channel() -> Result<Receiver<()>> {
    let (tx, rx) = channel::bounded(1);
    ctrlc::set_handler(move || {
        let _ = tx.try_send(());
    })
    .context("failed to set Ctrl+C handler")?;
    Ok(rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_ticker_limit() {
        let (_tx, rx) = channel::bounded::<()>(1);
        let mut count = 0;
        let fired = Ticker::new(Duration::from_millis(1))
            .with_limit(Some(3))
            .run(&rx, || count += 1);
        assert_eq!(fired, 3);
        assert_eq!(count, 3);
    }

    #[test]
    fn test_ticker_zero_limit() {
        let (_tx, rx) = channel::bounded::<()>(1);
        let fired = Ticker::new(Duration::from_millis(1))
            .with_limit(Some(0))
            .run(&rx, || panic!("should not tick"));
        assert_eq!(fired, 0);
    }

    #[test]
    fn test_ticker_stops_on_shutdown() {
        let (tx, rx) = channel::bounded::<()>(1);
        tx.send(()).unwrap();
        let fired = Ticker::new(Duration::from_secs(60)).run(&rx, || panic!("should not tick"));
        assert_eq!(fired, 0);
    }

    #[test]
    fn test_ticker_stops_on_disconnect() {
        let (tx, rx) = channel::bounded::<()>(1);
        drop(tx);
        let fired = Ticker::new(Duration::from_secs(60)).run(&rx, || panic!("should not tick"));
        assert_eq!(fired, 0);
    }

    #[test]
    fn test_ticker_first_tick_waits_one_interval() {
        let (_tx, rx) = channel::bounded::<()>(1);
        let interval = Duration::from_millis(30);
        let start = Instant::now();
        let mut first = None;
        Ticker::new(interval)
            .with_limit(Some(1))
            .run(&rx, || first = Some(start.elapsed()));
        assert!(first.is_some_and(|elapsed| elapsed >= interval));
    }

    #[test]
    fn test_ticker_default_interval() {
        assert_eq!(Ticker::default().interval(), Duration::from_millis(1000));
    }
}
