//! Time source for signing.
//!
//! The signer needs "now" twice: to back-fill an unset timestamp and to
//! reject timestamps the network would refuse. Both go through [`Clock`] so
//! tests and offline tooling can pin time.

use chrono::Utc;

/// A source of Unix time in milliseconds.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        Utc::now().timestamp_millis().max(0) as u64
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_frozen() {
        let clock = FixedClock(1_577_836_800_000);
        assert_eq!(clock.now_millis(), 1_577_836_800_000);
        assert_eq!(clock.now_millis(), clock.now_millis());
    }

    #[test]
    fn system_clock_tracks_chrono() {
        let before = Utc::now().timestamp_millis() as u64;
        let now = SystemClock.now_millis();
        let after = Utc::now().timestamp_millis() as u64;
        assert!(before <= now && now <= after);
    }
}
