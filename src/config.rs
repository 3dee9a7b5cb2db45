//! Engine configuration.

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 64;

/// Settings for a [`MatchingEngine`](crate::engine::MatchingEngine).
///
/// ## Example
///
/// ```
/// use dark_book::EngineConfig;
///
/// let config = EngineConfig::with_capacity(6).with_verification(true);
/// assert_eq!(config.capacity, 6);
/// assert!(config.verify_invariants);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fixed number of slots in each container. Never grows.
    pub capacity: usize,

    /// Reveal and check both containers after every round.
    ///
    /// This decrypts the whole book, so it only makes sense with the
    /// plaintext backend (tests, demos).
    pub verify_invariants: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            verify_invariants: false,
        }
    }
}

impl EngineConfig {
    /// Default configuration with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Enable or disable the post-round invariant check
    pub fn with_verification(mut self, enabled: bool) -> Self {
        self.verify_invariants = enabled;
        self
    }
}
