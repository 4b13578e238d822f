//! Bounded lock-free object pools.
//!
//! Objects are rented as [`Pooled`] guards and go back to the pool when the
//! guard drops, including during unwinding. A returned object whose capacity
//! has grown past [`PoolConfig::max_retained_capacity`] is discarded instead,
//! so one huge input does not pin a huge buffer for the rest of the process.
//!
//! In debug builds every pool counts outstanding rentals; a non-zero count
//! after all guards are gone points at a leaked (`detach`ed) object.

use std::fmt;
use std::ops::{Deref, DerefMut};
#[cfg(debug_assertions)]
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use crossbeam::queue::ArrayQueue;
use tracing::debug;

use crate::builders::StringBuffer;

/// An object that can be cleared and reused.
pub trait Recycle: Default {
    fn with_capacity(capacity: usize) -> Self;

    fn capacity(&self) -> usize;

    /// Clear contents, keeping the allocation.
    fn reset(&mut self);
}

impl Recycle for Vec<u8> {
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }

    fn reset(&mut self) {
        self.clear();
    }
}

/// Pool sizing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Objects kept around between rentals.
    pub retained: usize,
    /// Capacity of freshly allocated objects.
    pub initial_capacity: usize,
    /// Objects larger than this are dropped on return.
    pub max_retained_capacity: usize,
}

impl PoolConfig {
    pub const fn new(retained: usize, initial_capacity: usize, max_retained_capacity: usize) -> Self {
        PoolConfig {
            retained,
            initial_capacity,
            max_retained_capacity,
        }
    }
}

/// A bounded pool of reusable `T`s.
pub struct ObjectPool<T> {
    items: ArrayQueue<T>,
    config: PoolConfig,
    #[cfg(debug_assertions)]
    outstanding: AtomicUsize,
}

impl<T> fmt::Debug for ObjectPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPool")
            .field("config", &self.config)
            .field("retained", &self.items.len())
            .finish_non_exhaustive()
    }
}

impl<T: Recycle> ObjectPool<T> {
    pub fn new(config: PoolConfig) -> Self {
        ObjectPool {
            // ArrayQueue cannot be empty.
            items: ArrayQueue::new(config.retained.max(1)),
            config,
            #[cfg(debug_assertions)]
            outstanding: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> PoolConfig {
        self.config
    }

    /// Objects currently waiting in the pool.
    pub fn retained(&self) -> usize {
        self.items.len()
    }

    /// Rentals not yet returned.
    #[cfg(debug_assertions)]
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Relaxed)
    }

    /// Take an object from the pool, allocating one if the pool is empty.
    pub fn rent(&self) -> Pooled<'_, T> {
        let item = self
            .items
            .pop()
            .unwrap_or_else(|| T::with_capacity(self.config.initial_capacity));
        #[cfg(debug_assertions)]
        self.outstanding.fetch_add(1, Ordering::Relaxed);
        Pooled {
            pool: self,
            item,
            detached: false,
        }
    }

    fn give_back(&self, mut item: T) {
        self.release();
        let capacity = item.capacity();
        if capacity > self.config.max_retained_capacity {
            debug!(
                capacity,
                max = self.config.max_retained_capacity,
                "discarding oversized pooled object"
            );
            return;
        }
        item.reset();
        if self.items.push(item).is_err() {
            debug!(retained = self.config.retained, "pool full, dropping returned object");
        }
    }

    #[inline]
    fn release(&self) {
        #[cfg(debug_assertions)]
        self.outstanding.fetch_sub(1, Ordering::Relaxed);
    }
}

/// A rented object; returns itself to its pool on drop.
pub struct Pooled<'a, T: Recycle> {
    pool: &'a ObjectPool<T>,
    item: T,
    detached: bool,
}

impl<T: Recycle> Pooled<'_, T> {
    /// Keep the object instead of returning it to the pool.
    pub fn detach(mut self) -> T {
        self.detached = true;
        self.pool.release();
        std::mem::take(&mut self.item)
    }
}

impl<T: Recycle> Deref for Pooled<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.item
    }
}

impl<T: Recycle> DerefMut for Pooled<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.item
    }
}

impl<T: Recycle + fmt::Debug> fmt::Debug for Pooled<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.item.fmt(f)
    }
}

impl<T: Recycle> Drop for Pooled<'_, T> {
    fn drop(&mut self) {
        if !self.detached {
            self.pool.give_back(std::mem::take(&mut self.item));
        }
    }
}

static BYTE_POOL: OnceLock<ObjectPool<Vec<u8>>> = OnceLock::new();
static STRING_POOL: OnceLock<ObjectPool<StringBuffer>> = OnceLock::new();

/// Process-wide pool of byte buffers (scratch bytes and lexer windows).
pub fn global_byte_pool() -> &'static ObjectPool<Vec<u8>> {
    BYTE_POOL.get_or_init(|| ObjectPool::new(PoolConfig::new(64, 256, 64 * 1024)))
}

/// Process-wide pool of string buffers (debug rendering).
pub fn global_string_pool() -> &'static ObjectPool<StringBuffer> {
    STRING_POOL.get_or_init(|| ObjectPool::new(PoolConfig::new(16, 128, 16 * 1024)))
}
