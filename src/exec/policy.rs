//! # Pacing policy for poll retries.
//!
//! [`PollPolicy`] controls how long the poller sleeps between unsuccessful
//! attempts. The interval is fixed (no exponential growth — an empty result
//! one second from now is just as likely as one ten seconds from now when
//! waiting on a converging cluster), with optional [`Jitter`] so many
//! pollers watching the same resource do not wake in lockstep.
//!
//! ## Defaults
//! - `interval = 1s`
//! - `jitter = Jitter::None`

use std::time::Duration;

use rand::Rng;

/// Randomization applied to the poll interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jitter {
    /// No jitter: sleep exactly the configured interval.
    None,
    /// Random sleep in `[0, interval]`.
    Full,
    /// Sleep `interval/2 + random[0, interval/2]` (balanced).
    Equal,
}

impl Default for Jitter {
    fn default() -> Self {
        Jitter::None
    }
}

impl Jitter {
    /// Applies this jitter mode to the given interval.
    pub fn apply(&self, interval: Duration) -> Duration {
        let ms = interval.as_millis() as u64;
        if ms == 0 {
            return Duration::ZERO;
        }
        let mut rng = rand::rng();
        match self {
            Jitter::None => interval,
            Jitter::Full => Duration::from_millis(rng.random_range(0..=ms)),
            Jitter::Equal => {
                let half = ms / 2;
                Duration::from_millis(half + rng.random_range(0..=half))
            }
        }
    }
}

/// Pacing between unsuccessful poll attempts.
#[derive(Clone, Copy, Debug)]
pub struct PollPolicy {
    /// Base sleep between attempts.
    pub interval: Duration,
    /// Randomization applied to each sleep.
    pub jitter: Jitter,
}

impl Default for PollPolicy {
    /// Returns the standard pacing: fixed one-second interval, no jitter.
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            jitter: Jitter::None,
        }
    }
}

impl PollPolicy {
    /// Policy with the given interval and no jitter.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            jitter: Jitter::None,
        }
    }

    /// Computes the next sleep duration.
    pub(crate) fn next_delay(&self) -> Duration {
        self.jitter.apply(self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval_is_one_second() {
        let policy = PollPolicy::default();
        assert_eq!(policy.interval, Duration::from_secs(1));
        assert_eq!(policy.next_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_full_jitter_bounds() {
        let policy = PollPolicy {
            interval: Duration::from_millis(1000),
            jitter: Jitter::Full,
        };
        for _ in 0..100 {
            assert!(policy.next_delay() <= Duration::from_millis(1000));
        }
    }

    #[test]
    fn test_equal_jitter_bounds() {
        let policy = PollPolicy {
            interval: Duration::from_millis(1000),
            jitter: Jitter::Equal,
        };
        for _ in 0..100 {
            let delay = policy.next_delay();
            assert!(delay >= Duration::from_millis(500), "delay {delay:?} below half");
            assert!(delay <= Duration::from_millis(1000), "delay {delay:?} above interval");
        }
    }

    #[test]
    fn test_zero_interval_stays_zero() {
        for jitter in [Jitter::None, Jitter::Full, Jitter::Equal] {
            assert_eq!(jitter.apply(Duration::ZERO), Duration::ZERO);
        }
    }
}
