use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Failures allowed per email within one window.
const MAX_FAILURES: u32 = 5;
const WINDOW: Duration = Duration::from_secs(15 * 60);

/// Per-email login brute force limiter.
pub struct LoginRateLimiter {
    /// email -> (failed_count, window_start)
    entries: DashMap<String, (u32, Instant)>,
}

impl Default for LoginRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginRateLimiter {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Check if a login attempt is allowed. Does NOT increment the
    /// counter — call `record_failure()` on invalid password.
    pub fn check(&self, email: &str) -> Result<(), u64> {
        let now = Instant::now();

        let entry = self.entries.get(&email.to_lowercase());
        let Some(entry) = entry else {
            return Ok(());
        };

        let (count, start) = entry.value();

        if now.duration_since(*start) > WINDOW {
            return Ok(());
        }

        if *count >= MAX_FAILURES {
            let elapsed = now.duration_since(*start).as_secs();
            return Err(WINDOW.as_secs().saturating_sub(elapsed));
        }

        Ok(())
    }

    /// Record a failed login attempt for the given email. Expired windows
    /// are pruned on the way in so the map stays bounded by the set of
    /// emails failing within the current window.
    pub fn record_failure(&self, email: &str) {
        let now = Instant::now();

        self.entries
            .retain(|_, (_, start)| now.duration_since(*start) <= WINDOW);

        let mut entry = self.entries.entry(email.to_lowercase()).or_insert((0, now));
        let (count, start) = entry.value_mut();

        if now.duration_since(*start) > WINDOW {
            *count = 1;
            *start = now;
        } else {
            *count += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_after_max_failures_for_that_email_only() {
        let limiter = LoginRateLimiter::new();

        for _ in 0..MAX_FAILURES {
            assert!(limiter.check("a@x.com").is_ok());
            limiter.record_failure("a@x.com");
        }

        assert!(limiter.check("a@x.com").is_err());
        assert!(limiter.check("b@x.com").is_ok());
    }

    #[test]
    fn record_failure_prunes_expired_windows() {
        let limiter = LoginRateLimiter::new();

        // Fabricate an entry whose window closed a minute ago. On a host
        // whose monotonic clock is younger than the window this cannot be
        // represented; there is nothing to prune then either.
        let Some(stale) = Instant::now().checked_sub(WINDOW + Duration::from_secs(60)) else {
            return;
        };
        limiter
            .entries
            .insert("old@x.com".to_string(), (MAX_FAILURES, stale));

        limiter.record_failure("fresh@x.com");

        assert!(!limiter.entries.contains_key("old@x.com"));
        assert!(limiter.entries.contains_key("fresh@x.com"));
    }
}
