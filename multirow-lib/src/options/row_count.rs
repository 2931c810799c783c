//! Minimum/maximum row count resolution.

use log::debug;

use crate::error::{Result, WidgetError};

/// Row limit used when no maximum is configured.
pub const UNBOUNDED: u32 = u32::MAX;

/// Resolved row count limits.
///
/// `allow_empty_list` is true exactly when `min` is zero, and `max` is
/// never below `min` or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCountPolicy {
    min: u32,
    max: u32,
    allow_empty_list: bool,
}

impl RowCountPolicy {
    /// Resolves raw limits into a consistent policy.
    ///
    /// An unset `min` follows `allow_empty_list`. A set `min` wins over the
    /// flag when the two disagree. A negative `min` is the only error; values
    /// past [`UNBOUNDED`] are clamped to it.
    pub fn resolve(min: Option<i64>, max: Option<i64>, allow_empty_list: bool) -> Result<Self> {
        let (min, allow_empty_list) = match min {
            None => (if allow_empty_list { 0 } else { 1 }, allow_empty_list),
            Some(min) if min < 0 => {
                return Err(WidgetError::invalid(
                    "min",
                    format!("minimum row count must not be negative, got {}", min),
                ));
            }
            Some(min) => {
                let min = u32::try_from(min).unwrap_or_else(|_| {
                    debug!("min={} clamped to {}", min, UNBOUNDED);
                    UNBOUNDED
                });
                if (min == 0) != allow_empty_list {
                    debug!(
                        "min={} overrides allowEmptyList={}",
                        min, allow_empty_list
                    );
                }
                (min, min == 0)
            }
        };

        let max = match max {
            None => UNBOUNDED,
            Some(max) => u32::try_from(max.max(1)).unwrap_or(UNBOUNDED),
        };
        let max = max.max(min);

        Ok(Self {
            min,
            max,
            allow_empty_list,
        })
    }

    /// Minimum number of rows.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Maximum number of rows.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Whether the list may be submitted with no rows.
    pub fn allow_empty_list(&self) -> bool {
        self.allow_empty_list
    }

    /// Returns `true` if no maximum was configured.
    pub fn is_unbounded(&self) -> bool {
        self.max == UNBOUNDED
    }
}

impl Default for RowCountPolicy {
    fn default() -> Self {
        Self {
            min: 1,
            max: UNBOUNDED,
            allow_empty_list: false,
        }
    }
}
