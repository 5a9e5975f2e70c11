use crate::errors::ApiError;
use dashmap::DashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct Window {
    started_at: Instant,
    count: u32,
}

/// Fixed-window rate limiter keyed by client address.
///
/// A window opens on the first request from a key and closes `window` later;
/// requests inside an open window beyond `max_requests` are rejected. Clock
/// skew and window-boundary bursts are explicitly out of scope.
#[derive(Debug)]
pub struct RateLimiter {
    windows: DashMap<String, Window>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            windows: DashMap::new(),
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    /// Count one request against `key`, failing once the window quota is
    /// spent.
    pub fn check(&self, key: &str) -> Result<(), ApiError> {
        let now = Instant::now();
        let mut entry = self
            .windows
            .entry(key.to_string())
            .or_insert(Window {
                started_at: now,
                count: 0,
            });

        if now.duration_since(entry.started_at) >= self.window {
            entry.started_at = now;
            entry.count = 0;
        }

        if entry.count >= self.max_requests {
            tracing::info!("Rate limit exceeded for {}", key);
            return Err(ApiError::RateLimit);
        }

        entry.count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_limit() {
        let limiter = RateLimiter::new(3, 3600);
        for _ in 0..3 {
            assert!(limiter.check("1.2.3.4").is_ok());
        }
        assert!(matches!(limiter.check("1.2.3.4"), Err(ApiError::RateLimit)));
    }

    #[test]
    fn test_keys_are_independent() {
        let limiter = RateLimiter::new(1, 3600);
        assert!(limiter.check("1.2.3.4").is_ok());
        assert!(limiter.check("5.6.7.8").is_ok());
        assert!(limiter.check("1.2.3.4").is_err());
    }

    #[test]
    fn test_window_resets() {
        let limiter = RateLimiter::new(1, 0);
        assert!(limiter.check("1.2.3.4").is_ok());
        // Zero-length window: every request starts a fresh one.
        assert!(limiter.check("1.2.3.4").is_ok());
    }
}
