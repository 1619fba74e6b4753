//! Process-wide lazily-initialised state.
//!
//! The idiomatic Rust container for "build on first use, never tear down"
//! state is `std::sync::LazyLock<T>`.  This module re-exports it and
//! provides [`define_singleton!`] for declaring such statics.

/// Re-export `LazyLock` as the canonical singleton container.
pub use std::sync::LazyLock;

/// Define a singleton instance of type `$ty`.
///
/// The instance is lazily initialised on first access via `LazyLock`.
/// Singletons declared this way must be immutable after construction (or
/// use interior, write-once cells) so that concurrent readers need no lock.
///
/// # Example
/// ```
/// use pn_core::define_singleton;
///
/// struct Registry { data: Vec<String> }
/// define_singleton!(pub REGISTRY, Registry, Registry { data: Vec::new() });
///
/// assert!(REGISTRY.data.is_empty());
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($vis:vis $name:ident, $ty:ty, $init:expr) => {
        /// Lazily-initialised global singleton.
        $vis static $name: std::sync::LazyLock<$ty> = std::sync::LazyLock::new(|| $init);
    };
}
