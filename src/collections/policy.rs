//! Resize thresholds for [`BucketedMap`](super::BucketedMap).
//!
//! The map checks its load factor (live elements divided by bucket count)
//! before every `put`. A [`ResizePolicy`] decides what that check does:
//!
//! - above `grow_above`, the bucket count doubles
//! - below `shrink_below`, and only while the bucket count exceeds
//!   `min_shrink_buckets`, the bucket count halves
//!
//! # Examples
//!
//! ```rust
//! use linkhash::collections::{BucketedMap, ResizePolicy};
//!
//! let policy = ResizePolicy::default()
//!     .with_initial_buckets(16)
//!     .with_grow_above(0.9);
//! assert!(policy.validate().is_ok());
//!
//! let map: BucketedMap<&str, i32> = BucketedMap::try_with_policy(policy).unwrap();
//! assert_eq!(map.bucket_count(), 16);
//! ```

use super::MapError;

/// Load factor above which the bucket count doubles.
const DEFAULT_GROW_ABOVE: f64 = 0.7;

/// Load factor below which the bucket count halves.
const DEFAULT_SHRINK_BELOW: f64 = 0.3;

/// Bucket count at or below which shrinking stops.
const DEFAULT_MIN_SHRINK_BUCKETS: usize = 10;

/// Bucket count of a freshly constructed map.
const DEFAULT_INITIAL_BUCKETS: usize = 1;

/// Thresholds driving the grow/shrink decision of a
/// [`BucketedMap`](super::BucketedMap).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResizePolicy {
    /// Grow when the load factor is strictly greater than this.
    pub grow_above: f64,
    /// Shrink when the load factor is strictly less than this.
    pub shrink_below: f64,
    /// Shrink only while the bucket count is strictly greater than this.
    pub min_shrink_buckets: usize,
    /// Number of buckets a new map starts with (at least 1).
    pub initial_buckets: usize,
}

impl ResizePolicy {
    /// Creates the default policy: grow above 0.7, shrink below 0.3, keep
    /// more than 10 buckets before shrinking, start with 1 bucket.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grow_above: DEFAULT_GROW_ABOVE,
            shrink_below: DEFAULT_SHRINK_BELOW,
            min_shrink_buckets: DEFAULT_MIN_SHRINK_BUCKETS,
            initial_buckets: DEFAULT_INITIAL_BUCKETS,
        }
    }

    /// Sets the grow threshold.
    #[must_use]
    pub const fn with_grow_above(mut self, grow_above: f64) -> Self {
        self.grow_above = grow_above;
        self
    }

    /// Sets the shrink threshold.
    #[must_use]
    pub const fn with_shrink_below(mut self, shrink_below: f64) -> Self {
        self.shrink_below = shrink_below;
        self
    }

    /// Sets the bucket count at or below which shrinking stops.
    #[must_use]
    pub const fn with_min_shrink_buckets(mut self, min_shrink_buckets: usize) -> Self {
        self.min_shrink_buckets = min_shrink_buckets;
        self
    }

    /// Sets the initial bucket count. Zero is raised to one.
    #[must_use]
    pub const fn with_initial_buckets(mut self, initial_buckets: usize) -> Self {
        self.initial_buckets = if initial_buckets == 0 {
            1
        } else {
            initial_buckets
        };
        self
    }

    /// Checks that the thresholds describe a usable policy.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidPolicy`] if a threshold is not finite, if
    /// `grow_above` is not positive, if `shrink_below` is not below
    /// `grow_above`, or if `min_shrink_buckets` or `initial_buckets` is zero.
    pub fn validate(&self) -> Result<(), MapError> {
        if !self.grow_above.is_finite() || !self.shrink_below.is_finite() {
            return Err(MapError::InvalidPolicy {
                reason: "thresholds must be finite",
            });
        }
        if self.grow_above <= 0.0 {
            return Err(MapError::InvalidPolicy {
                reason: "grow threshold must be positive",
            });
        }
        if self.shrink_below >= self.grow_above {
            return Err(MapError::InvalidPolicy {
                reason: "shrink threshold must be below grow threshold",
            });
        }
        if self.min_shrink_buckets == 0 {
            return Err(MapError::InvalidPolicy {
                reason: "shrink floor must be at least one bucket",
            });
        }
        if self.initial_buckets == 0 {
            return Err(MapError::InvalidPolicy {
                reason: "initial bucket count must be at least one",
            });
        }
        Ok(())
    }

    /// Returns the bucket count a map holding `total_elements` in
    /// `bucket_count` buckets should move to, or `None` to stay.
    ///
    /// Never returns zero.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn next_bucket_count(&self, total_elements: usize, bucket_count: usize) -> Option<usize> {
        let load_factor = total_elements as f64 / bucket_count as f64;
        if load_factor > self.grow_above {
            Some(bucket_count * 2)
        } else if load_factor < self.shrink_below && bucket_count > self.min_shrink_buckets.max(1) {
            Some(bucket_count / 2)
        } else {
            None
        }
    }
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self::new()
    }
}
