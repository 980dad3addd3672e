//! Retry policy for remote calls
//!
//! Wraps one remote call with a bounded number of attempts and a backoff
//! between them. Only errors that report themselves as retryable are tried
//! again.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::ports::RemoteCallError;

/// Delay between attempts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Backoff {
    /// Same delay every time
    Fixed { delay_ms: u64 },

    /// Delay grows by `increment_ms` per attempt, capped at `max_delay_ms`
    Linear {
        initial_delay_ms: u64,
        increment_ms: u64,
        max_delay_ms: u64,
    },

    /// Delay multiplies per attempt, capped at `max_delay_ms`
    Exponential {
        initial_delay_ms: u64,
        max_delay_ms: u64,
        #[serde(default = "default_multiplier")]
        multiplier: f64,
    },
}

const fn default_multiplier() -> f64 {
    2.0
}

impl Default for Backoff {
    fn default() -> Self {
        Self::Exponential {
            initial_delay_ms: 500,
            max_delay_ms: 10_000,
            multiplier: 2.0,
        }
    }
}

impl Backoff {
    /// Delay after the given failed attempt (1-based)
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let step = attempt.saturating_sub(1);
        match self {
            Self::Fixed { delay_ms } => Duration::from_millis(*delay_ms),
            Self::Linear {
                initial_delay_ms,
                increment_ms,
                max_delay_ms,
            } => {
                let delay = initial_delay_ms.saturating_add(increment_ms.saturating_mul(u64::from(step)));
                Duration::from_millis(delay.min(*max_delay_ms))
            }
            Self::Exponential {
                initial_delay_ms,
                max_delay_ms,
                multiplier,
            } => {
                let factor = multiplier.powi(i32::try_from(step).unwrap_or(i32::MAX));
                let delay = (*initial_delay_ms as f64 * factor).min(*max_delay_ms as f64);
                Duration::from_millis(delay.max(0.0) as u64)
            }
        }
    }
}

/// Bounded retry around a single remote call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Total attempts, including the first; 0 is treated as 1
    pub max_attempts: u32,
    pub backoff: Backoff,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::once()
    }
}

impl RetryPolicy {
    /// A single attempt, no retry
    pub fn once() -> Self {
        Self {
            max_attempts: 1,
            backoff: Backoff::default(),
        }
    }

    pub fn new(max_attempts: u32, backoff: Backoff) -> Self {
        Self {
            max_attempts,
            backoff,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Run `call` until it succeeds, fails permanently or runs out of attempts
    ///
    /// Returns the value or the last error, each with the number of attempts made.
    pub fn run<T>(
        &self,
        label: &str,
        mut call: impl FnMut(u32) -> Result<T, RemoteCallError>,
    ) -> Result<(T, u32), (RemoteCallError, u32)> {
        let max = self.attempts();
        let mut attempt = 1;
        loop {
            match call(attempt) {
                Ok(value) => return Ok((value, attempt)),
                Err(err) if attempt < max && err.is_retryable() => {
                    let delay = self.backoff.delay_for_attempt(attempt);
                    tracing::warn!(
                        call = label,
                        attempt,
                        max_attempts = max,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "remote call failed, retrying"
                    );
                    std::thread::sleep(delay);
                    attempt += 1;
                }
                Err(err) => return Err((err, attempt)),
            }
        }
    }
}
