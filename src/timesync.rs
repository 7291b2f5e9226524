//! One-shot acquisition of wall-clock time and commit to the hardware
//! clock.

use log::{info, warn};

/// Network time source seam. `begin` prepares the underlying transport;
/// `fetch_epoch` performs one synchronous exchange and may block for the
/// transport's own timeout.
pub trait TimeSource {
    type Error;

    fn begin(&mut self) -> Result<(), Self::Error>;
    fn fetch_epoch(&mut self) -> Result<u64, Self::Error>;
}

/// Battery-backed hardware clock seam. `begin` is idempotent.
pub trait WallClock {
    type Error;

    fn begin(&mut self) -> Result<(), Self::Error>;
    fn set_epoch(&mut self, epoch_secs: u64) -> Result<(), Self::Error>;
    fn epoch(&mut self) -> Result<u64, Self::Error>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyncError {
    ClockUnavailable,
    TransportUnavailable,
    FetchFailed,
    CommitFailed,
}

/// Runs exactly one fetch-and-commit cycle against an already
/// associated link.
///
/// There is no internal retry: a failed fetch leaves the clock at its
/// prior value and the caller re-invokes [`synchronize`] after
/// re-establishing the link.
///
/// [`synchronize`]: TimeSyncCoordinator::synchronize
pub struct TimeSyncCoordinator<T: TimeSource, C: WallClock> {
    source: T,
    clock: C,
}

impl<T: TimeSource, C: WallClock> TimeSyncCoordinator<T, C> {
    pub const fn new(source: T, clock: C) -> Self {
        Self { source, clock }
    }

    /// Fetches epoch time once and commits it to the clock.
    ///
    /// Caller must hold an associated link. The clock is written at
    /// most once per call, and only from a successful fetch. Returns
    /// the confirmed clock reading after the commit.
    pub fn synchronize(&mut self) -> Result<u64, SyncError> {
        self.clock.begin().map_err(|_| SyncError::ClockUnavailable)?;
        self.source
            .begin()
            .map_err(|_| SyncError::TransportUnavailable)?;

        let epoch_secs = self.source.fetch_epoch().map_err(|_| {
            warn!("time fetch failed; clock left untouched");
            SyncError::FetchFailed
        })?;

        self.clock
            .set_epoch(epoch_secs)
            .map_err(|_| SyncError::CommitFailed)?;

        let confirmed = self.clock.epoch().map_err(|_| SyncError::CommitFailed)?;
        info!("clock set to epoch {}", confirmed);
        Ok(confirmed)
    }
}
