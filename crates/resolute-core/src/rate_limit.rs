//! Per-token request rate limiting.
//!
//! Counts requests per client token in a bounded in-memory cache. A token's
//! window opens with its first request and lasts one interval; the next
//! request after that opens a fresh window. Idle entries are dropped from the
//! cache one interval after their last write, and the cache holds at most
//! `unique_token_per_interval` tokens, evicting the least recently used one
//! when full.
//!
//! # Consistency
//!
//! This is an abuse deterrent, not a hard quota. When the cache is full, a
//! new token evicts an older entry, and an evicted token starts counting from
//! zero again. State is process-local and lost on restart.

use std::time::{Duration, Instant};

use moka::policy::EvictionPolicy;
use moka::sync::Cache;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RateLimitExceeded;

/// Response header carrying the applied limit.
pub const LIMIT_HEADER: &str = "X-RateLimit-Limit";

/// Response header carrying the remaining quota.
pub const REMAINING_HEADER: &str = "X-RateLimit-Remaining";

/// Quota left after an admitted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RateLimitStatus {
    /// The limit that was applied.
    pub limit: u32,
    /// Requests still allowed in the current window.
    pub remaining: u32,
}

impl RateLimitStatus {
    /// Header pairs to attach to the response.
    pub fn headers(&self) -> [(&'static str, String); 2] {
        quota_headers(self.limit, self.remaining)
    }
}

impl RateLimitExceeded {
    /// Header pairs to attach to the denial response.
    pub fn headers(&self) -> [(&'static str, String); 2] {
        quota_headers(self.limit, self.remaining)
    }
}

fn quota_headers(limit: u32, remaining: u32) -> [(&'static str, String); 2] {
    [
        (LIMIT_HEADER, limit.to_string()),
        (REMAINING_HEADER, remaining.to_string()),
    ]
}

/// Request count for one token.
#[derive(Debug, Clone, Copy)]
struct RateLimitEntry {
    count: u32,
    window_start: Instant,
}

impl RateLimitEntry {
    fn first(now: Instant) -> Self {
        Self {
            count: 1,
            window_start: now,
        }
    }

    fn window_expired(&self, now: Instant, interval: Duration) -> bool {
        now.duration_since(self.window_start) >= interval
    }
}

/// Fixed-capacity, time-windowed request counter keyed by client token.
///
/// Cheap to clone; clones share the same counters.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    cache: Cache<String, RateLimitEntry>,
    interval: Duration,
    capacity: u64,
}

impl RateLimiter {
    /// Create a limiter tracking up to `unique_token_per_interval` tokens,
    /// each forgotten `interval` after its last request.
    pub fn new(interval: Duration, unique_token_per_interval: u64) -> Self {
        let cache = Cache::builder()
            .name("rate-limit")
            .max_capacity(unique_token_per_interval)
            .time_to_live(interval)
            .eviction_policy(EvictionPolicy::lru())
            .build();
        Self {
            cache,
            interval,
            capacity: unique_token_per_interval,
        }
    }

    /// Window length.
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Maximum number of tokens tracked at once.
    pub const fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Record a request from `token` and decide whether to admit it.
    ///
    /// The first `limit` requests in a window are admitted, reporting
    /// `limit - count` remaining; later ones are denied with zero remaining.
    /// Denied requests are counted but never move the window start, so a
    /// token is admitted again once `interval` has passed since its window
    /// opened. The count is updated atomically per token.
    ///
    /// # Errors
    ///
    /// Returns [`RateLimitExceeded`] when the token is over its limit.
    #[tracing::instrument(skip(self, token))]
    pub fn check(&self, token: &str, limit: u32) -> Result<RateLimitStatus, RateLimitExceeded> {
        let interval = self.interval;
        let entry = self
            .cache
            .entry(token.to_string())
            .and_upsert_with(|existing| {
                let now = Instant::now();
                match existing.map(|e| e.into_value()) {
                    Some(mut entry) if !entry.window_expired(now, interval) => {
                        entry.count = entry.count.saturating_add(1);
                        entry
                    }
                    _ => RateLimitEntry::first(now),
                }
            })
            .into_value();

        if entry.count > limit {
            tracing::info!(
                count = entry.count,
                window_age_ms = entry.window_start.elapsed().as_millis() as u64,
                "rate limit exceeded"
            );
            return Err(RateLimitExceeded {
                limit,
                remaining: 0,
            });
        }

        let remaining = limit - entry.count;
        tracing::debug!(count = entry.count, remaining, "request admitted");
        Ok(RateLimitStatus { limit, remaining })
    }

    /// Number of tokens currently tracked, after pending evictions run.
    pub fn tracked_tokens(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}
