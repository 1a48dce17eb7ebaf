//! Interfaces for the host-runtime facilities that consume search results.
//!
//! The search core never calls these. A typical consumer walks a finished
//! path and acquires one pooled marker instance per coordinate to visualize
//! it, releasing the markers when the path is discarded. Implementations are
//! handed to such consumers explicitly; nothing in this crate reaches for a
//! process-wide locator.

/// Object pool handing out renderable instances keyed by a type name.
pub trait InstancePool {
    type Handle;

    /// Takes an instance of the given kind out of the pool, or `None` when
    /// the pool cannot provide one.
    fn acquire(&mut self, kind: &str) -> Option<Self::Handle>;

    /// Returns a previously acquired instance to the pool.
    fn release(&mut self, handle: Self::Handle);
}

/// Maps a string path to an instantiated asset, synchronously or through a
/// completion callback.
pub trait AssetLoader {
    type Asset;

    /// Loads the asset at `path`, or `None` when it does not resolve.
    fn load(&mut self, path: &str) -> Option<Self::Asset>;

    /// Loads the asset at `path` and hands the outcome to `done` once it is
    /// available.
    fn load_async(&mut self, path: &str, done: Box<dyn FnOnce(Option<Self::Asset>)>);
}
