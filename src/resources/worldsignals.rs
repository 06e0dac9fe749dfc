//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource is a world-wide key/value board used for
//! cross-system communication: the acorn counter and the quit flag live here.

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

/// Key of the integer counting collected pickups.
pub const ACORNS_COLLECTED: &str = "acorns_collected";
/// Flag set once the quit hook has run; the main loop exits on it.
pub const QUIT_GAME: &str = "quit_game";

/// Global signal storage for cross-system communication.
#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    /// Integer numeric signals addressed by string keys.
    pub integers: FxHashMap<String, i32>,
    /// Presence-only boolean flags; a key being present means "true".
    pub flags: FxHashSet<String>,
}

impl WorldSignals {
    /// Set an integer signal value.
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }
    /// Get an integer signal by key.
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }
    /// Add `by` to an integer signal, starting from zero, and return the new value.
    pub fn increment(&mut self, key: impl Into<String>, by: i32) -> i32 {
        let value = self.integers.entry(key.into()).or_insert(0);
        *value += by;
        *value
    }
    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    /// Remove a flag (make it false/absent).
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}
