//! Time sources for token expiry.

use chrono::{DateTime, Utc};

/// Supplies the current time.
///
/// Passed explicitly to [`capability::generate`](crate::capability::generate)
/// so that expiry is deterministic under test.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
///
/// # Examples
///
/// ```
/// use callwire::clock::{Clock, FixedClock};
///
/// let clock = FixedClock::from_unix(1257894000).unwrap();
/// assert_eq!(clock.now().timestamp(), 1257894000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Freezes the clock at `at`.
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Returns `None` if `secs` is outside the representable range.
    pub fn from_unix(secs: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(secs, 0).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
