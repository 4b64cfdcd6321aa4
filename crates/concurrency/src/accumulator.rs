//! Sharded accumulator for parallel ranking
//!
//! Replaces a single `Mutex<BTreeMap>` with N independently locked shards.
//! Workers updating keys in different shards never contend.
//!
//! # Design
//!
//! - Key routing: `key mod shard_count` (Euclidean, so negative keys land
//!   in a valid shard too)
//! - Shard: `parking_lot::Mutex<BTreeMap<K, V>>`
//! - `at()` returns an [`Access`] guard; the shard lock is held exactly as
//!   long as the guard lives
//! - `snapshot()` visits shards one at a time; no global lock exists

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Deref, DerefMut};

// ============================================================================
// ShardKey
// ============================================================================

/// Keys that can be routed to a shard
///
/// Implemented for the primitive integer types.
pub trait ShardKey: Copy + Ord {
    /// Index of the shard owning this key, in `0..shard_count`
    fn shard_index(self, shard_count: usize) -> usize;
}

macro_rules! impl_shard_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl ShardKey for $t {
                #[inline]
                fn shard_index(self, shard_count: usize) -> usize {
                    (self as i128).rem_euclid(shard_count as i128) as usize
                }
            }
        )*
    };
}

impl_shard_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// ============================================================================
// Access
// ============================================================================

/// Scoped access to one accumulator cell
///
/// Holds the owning shard's lock. Dropping the guard releases it.
pub struct Access<'a, V> {
    cell: MappedMutexGuard<'a, V>,
}

impl<V> Deref for Access<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        &self.cell
    }
}

impl<V> DerefMut for Access<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        &mut self.cell
    }
}

impl<V: fmt::Debug> fmt::Debug for Access<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Access").field(&*self.cell).finish()
    }
}

// ============================================================================
// ConcurrentAccumulator
// ============================================================================

/// Lock-sharded map from integer keys to accumulating values
///
/// # Thread Safety
///
/// `ConcurrentAccumulator<K, V>` is `Sync` whenever `K` and `V` are `Send`:
/// every shard is guarded by its own mutex.
pub struct ConcurrentAccumulator<K, V> {
    shards: Box<[Mutex<BTreeMap<K, V>>]>,
}

impl<K: ShardKey, V> ConcurrentAccumulator<K, V> {
    /// Create an accumulator with `shard_count` shards
    ///
    /// A shard count of zero is raised to one.
    pub fn new(shard_count: usize) -> Self {
        let shards = (0..shard_count.max(1))
            .map(|_| Mutex::new(BTreeMap::new()))
            .collect();
        Self { shards }
    }

    /// Number of shards
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Lock the shard owning `key` and return its cell
    ///
    /// The cell is default-initialized on first access. Do not call `at()`
    /// again on the same thread while holding an `Access` to a key routed
    /// to the same shard: the shard lock is not reentrant.
    pub fn at(&self, key: K) -> Access<'_, V>
    where
        V: Default,
    {
        let shard = self.shards[key.shard_index(self.shards.len())].lock();
        Access {
            cell: MutexGuard::map(shard, |map| map.entry(key).or_default()),
        }
    }

    /// Copy all entries into an ordinary ordered map
    ///
    /// Each shard is locked, copied and released before the next one is
    /// visited.
    pub fn snapshot(&self) -> BTreeMap<K, V>
    where
        V: Clone,
    {
        let mut result = BTreeMap::new();
        for shard in self.shards.iter() {
            let guard = shard.lock();
            result.extend(guard.iter().map(|(k, v)| (*k, v.clone())));
        }
        result
    }

    /// Consume the accumulator and merge its shards without locking
    pub fn into_map(self) -> BTreeMap<K, V> {
        let mut result = BTreeMap::new();
        for shard in self.shards.into_vec() {
            result.append(&mut shard.into_inner());
        }
        result
    }
}

impl<K, V> fmt::Debug for ConcurrentAccumulator<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentAccumulator")
            .field("shard_count", &self.shards.len())
            .finish_non_exhaustive()
    }
}
