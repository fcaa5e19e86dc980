//! Auto-navigation timer
//!
//! A repeating ticker runs as a `smol` task and posts [`Tick`]s into a
//! one-slot channel. The host drains the channel and feeds each tick back
//! into the carousel, so every state change still happens on the host's
//! thread. Ticks coalesce while the host is busy.

use std::fmt;
use std::time::Duration;

use smol::Task;
use smol::channel::{self, Receiver, Sender};

/// One tick period elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// Idle-time accounting plus the cancellable ticker task
pub struct AutoNav {
    delay: Duration,
    interval: Duration,
    elapsed: Duration,
    ticker: Option<Task<()>>,
    tx: Sender<Tick>,
    rx: Receiver<Tick>,
}

impl AutoNav {
    pub fn new(delay: Duration, interval: Duration) -> Self {
        let (tx, rx) = channel::bounded(1);
        Self {
            delay,
            interval,
            elapsed: Duration::ZERO,
            ticker: None,
            tx,
            rx,
        }
    }

    /// Start ticking. Returns `false` if already running.
    pub fn play(&mut self) -> bool {
        if self.ticker.is_some() {
            return false;
        }
        // Ticks queued before a stop must not count toward the new run
        while self.rx.try_recv().is_ok() {}
        self.ticker = Some(spawn_ticker(self.interval, self.tx.clone()));
        true
    }

    /// Cancel the ticker. Returns `false` if it was not running.
    pub fn stop(&mut self) -> bool {
        // Dropping a smol task cancels it
        self.ticker.take().is_some()
    }

    pub fn is_playing(&self) -> bool {
        self.ticker.is_some()
    }

    /// Restart the idle window
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Account one tick; `true` once the idle window is used up
    pub fn advance(&mut self) -> bool {
        self.elapsed += self.interval;
        self.elapsed >= self.delay
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Receiving end of the tick channel
    pub fn ticks(&self) -> Receiver<Tick> {
        self.rx.clone()
    }

    /// Wait for the next tick
    pub async fn recv(&self) -> Option<Tick> {
        self.rx.recv().await.ok()
    }
}

impl fmt::Debug for AutoNav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoNav")
            .field("delay", &self.delay)
            .field("interval", &self.interval)
            .field("elapsed", &self.elapsed)
            .field("playing", &self.is_playing())
            .finish()
    }
}

fn spawn_ticker(interval: Duration, tx: Sender<Tick>) -> Task<()> {
    smol::spawn(async move {
        loop {
            smol::Timer::after(interval).await;
            if tx.send(Tick).await.is_err() {
                break;
            }
        }
    })
}
