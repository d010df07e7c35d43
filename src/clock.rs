use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Time source for the registry. Injected so tests (and replays) can drive
/// the clock instead of the host.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock under caller control. Whole-second resolution, which is all the
/// deadline checks care about.
#[derive(Debug)]
pub struct ManualClock {
    seconds: AtomicI64,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> ManualClock {
        ManualClock::at_epoch_seconds(start.timestamp())
    }

    pub fn at_epoch_seconds(seconds: i64) -> ManualClock {
        ManualClock {
            seconds: AtomicI64::new(seconds),
        }
    }

    pub fn set(&self, to: DateTime<Utc>) {
        self.seconds.store(to.timestamp(), Ordering::SeqCst);
    }

    pub fn advance(&self, seconds: i64) {
        self.seconds.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.seconds.load(Ordering::SeqCst), 0)
            .expect("manual clock seconds out of range")
    }
}
