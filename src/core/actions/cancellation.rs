use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// How many pixels a render worker computes between cancellation polls.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "render cancelled")
    }
}

impl std::error::Error for Cancelled {}

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Cancels a render once a newer frame generation is published or the
/// owner shuts down.
///
/// The render started as `generation`; it stays wanted only while `latest`
/// still holds that value.
#[derive(Debug, Clone, Copy)]
pub struct SupersededToken<'a> {
    generation: u64,
    latest: &'a AtomicU64,
    shutdown: &'a AtomicBool,
}

impl<'a> SupersededToken<'a> {
    #[must_use]
    pub fn new(generation: u64, latest: &'a AtomicU64, shutdown: &'a AtomicBool) -> Self {
        Self {
            generation,
            latest,
            shutdown,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl CancelToken for SupersededToken<'_> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed)
            || self.latest.load(Ordering::Relaxed) != self.generation
    }
}
