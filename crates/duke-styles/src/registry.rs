//! Concurrent style registry
//!
//! The registry maps [`StyleKey`]s to dense, sequential [`StyleHandle`]s.
//! Keys are spread over a power-of-two number of shards, each behind its
//! own mutex, so interning unrelated styles does not contend on one lock.
//! A new handle is only allocated while the owning shard is locked, which
//! makes first-time interns of the same key from several threads agree on
//! one handle.

use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, AtomicUsize, Ordering};

use ahash::{AHashMap, RandomState};
use duke_styles_core::{Error, Result, StyleKey, StyleKeyEncoder, ValidatedStyle};
use parking_lot::{Mutex, MutexGuard};

use crate::table::FinalStyleTable;

/// Reference to one interned style
///
/// Ids are sequential from 0 in allocation order. The generation ties the
/// handle to the registry session that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleHandle {
    id: u32,
    generation: u32,
}

impl StyleHandle {
    /// Sequential id, usable as an index into the final style table
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Registry session that issued this handle
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub(crate) fn new(id: u32, generation: u32) -> Self {
        Self { id, generation }
    }
}

impl fmt::Display for StyleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}

/// Lifecycle state of a [`StyleRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryState {
    /// Interning allowed
    Open,
    /// Interning forbidden until reset
    Sealed,
}

/// Counters describing registry activity since the last reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistryStats {
    /// Calls to [`StyleRegistry::intern`]
    pub intern_calls: u64,
    /// Handles allocated
    pub allocations: usize,
    /// Interns answered with an existing handle
    pub hits: u64,
}

#[derive(Debug)]
struct Entry {
    handle: StyleHandle,
    style: ValidatedStyle,
}

type Shard = AHashMap<StyleKey, Entry>;

/// Deduplicating, thread-safe style table
pub struct StyleRegistry {
    shards: Box<[Mutex<Shard>]>,
    hasher: RandomState,
    max_styles: usize,
    allocated: AtomicUsize,
    sealed: AtomicBool,
    generation: AtomicU32,
    intern_calls: AtomicU64,
    hits: AtomicU64,
}

impl StyleRegistry {
    /// Create a registry holding at most `max_styles` distinct styles
    pub fn new(max_styles: usize) -> Self {
        let shards = std::thread::available_parallelism()
            .map(|n| n.get() * 4)
            .unwrap_or(16);
        Self::with_shards(max_styles, shards)
    }

    /// Create a registry with an explicit shard count
    ///
    /// The count is rounded up to a power of two.
    pub fn with_shards(max_styles: usize, shards: usize) -> Self {
        let shards = shards.clamp(1, 1024).next_power_of_two();
        Self {
            shards: (0..shards).map(|_| Mutex::new(Shard::default())).collect(),
            hasher: RandomState::new(),
            max_styles: max_styles.min(u32::MAX as usize),
            allocated: AtomicUsize::new(0),
            sealed: AtomicBool::new(false),
            generation: AtomicU32::new(0),
            intern_calls: AtomicU64::new(0),
            hits: AtomicU64::new(0),
        }
    }

    /// Intern a style, returning the handle of its structurally equal twin
    /// if one was interned before
    pub fn intern(&self, style: ValidatedStyle) -> Result<StyleHandle> {
        let key = StyleKeyEncoder::encode(&style);
        self.intern_keyed(key, style)
    }

    /// Intern a style whose key was already computed
    ///
    /// `key` must be [`StyleKeyEncoder::encode`] of `style`.
    pub(crate) fn intern_keyed(
        &self,
        key: StyleKey,
        style: ValidatedStyle,
    ) -> Result<StyleHandle> {
        debug_assert_eq!(
            key,
            StyleKeyEncoder::encode(&style),
            "key does not encode style"
        );
        self.intern_calls.fetch_add(1, Ordering::Relaxed);

        let mut shard = self.shard(&key).lock();
        if self.sealed.load(Ordering::Acquire) {
            return Err(Error::Sealed { key: key.to_hex() });
        }

        if let Some(entry) = shard.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            log::trace!("style {} reused for key {}", entry.handle, key);
            return Ok(entry.handle);
        }

        let id = match self.reserve_id() {
            Some(id) => id,
            None => {
                log::warn!(
                    "style table full ({} styles), rejecting key {}",
                    self.max_styles,
                    key
                );
                return Err(Error::CapacityExceeded {
                    limit: self.max_styles,
                    key: key.to_hex(),
                });
            }
        };

        let handle = StyleHandle::new(id, self.generation.load(Ordering::Acquire));
        log::debug!("allocated style {handle} for key {key}");
        shard.insert(key, Entry { handle, style });
        Ok(handle)
    }

    /// Freeze the registry and return its styles ordered by handle id
    ///
    /// Sealing an already sealed registry returns the same table again.
    pub fn seal(&self) -> FinalStyleTable {
        let shards = self.lock_all();
        if !self.sealed.swap(true, Ordering::AcqRel) {
            log::debug!(
                "sealed style registry with {} styles",
                self.allocated.load(Ordering::Acquire)
            );
        }

        let len = self.allocated.load(Ordering::Acquire);
        let mut slots: Vec<Option<ValidatedStyle>> = vec![None; len];
        for shard in &shards {
            for entry in shard.values() {
                slots[entry.handle.id as usize] = Some(entry.style.clone());
            }
        }
        let styles: Vec<ValidatedStyle> = slots.into_iter().flatten().collect();
        debug_assert_eq!(styles.len(), len);

        FinalStyleTable::new(styles, self.generation.load(Ordering::Acquire))
    }

    /// Discard every entry and reopen the registry
    ///
    /// Handles issued before the reset are rejected by tables sealed after
    /// it.
    pub fn reset(&self) {
        let mut shards = self.lock_all();
        for shard in shards.iter_mut() {
            shard.clear();
        }
        self.allocated.store(0, Ordering::Release);
        self.intern_calls.store(0, Ordering::Relaxed);
        self.hits.store(0, Ordering::Relaxed);
        let generation = self.generation.fetch_add(1, Ordering::AcqRel).wrapping_add(1);
        self.sealed.store(false, Ordering::Release);
        log::debug!("style registry reset, generation {generation}");
    }

    /// Current lifecycle state
    pub fn state(&self) -> RegistryState {
        if self.sealed.load(Ordering::Acquire) {
            RegistryState::Sealed
        } else {
            RegistryState::Open
        }
    }

    /// Check whether the registry is sealed
    pub fn is_sealed(&self) -> bool {
        self.state() == RegistryState::Sealed
    }

    /// Number of distinct styles interned
    pub fn len(&self) -> usize {
        self.allocated.load(Ordering::Acquire)
    }

    /// Check if no style has been interned
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distinct-style ceiling
    pub fn max_styles(&self) -> usize {
        self.max_styles
    }

    /// Current session generation
    pub fn generation(&self) -> u32 {
        self.generation.load(Ordering::Acquire)
    }

    /// Number of shards
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Activity counters since the last reset
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            intern_calls: self.intern_calls.load(Ordering::Relaxed),
            allocations: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
        }
    }

    fn shard(&self, key: &StyleKey) -> &Mutex<Shard> {
        let mut hasher = self.hasher.build_hasher();
        key.hash(&mut hasher);
        &self.shards[hasher.finish() as usize & (self.shards.len() - 1)]
    }

    // Caller must hold the shard lock of the key being allocated.
    fn reserve_id(&self) -> Option<u32> {
        self.allocated
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < self.max_styles).then_some(n + 1)
            })
            .ok()
            .map(|n| n as u32)
    }

    fn lock_all(&self) -> Vec<MutexGuard<'_, Shard>> {
        self.shards.iter().map(|shard| shard.lock()).collect()
    }
}

impl fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleRegistry")
            .field("shards", &self.shards.len())
            .field("max_styles", &self.max_styles)
            .field("len", &self.len())
            .field("state", &self.state())
            .field("generation", &self.generation())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duke_styles_core::{normalize, Color, ErrorKind, FormatDescriptor, ResolvedStyle};

    fn validated(style: ResolvedStyle) -> ValidatedStyle {
        normalize(&style, &FormatDescriptor::xlsx()).unwrap()
    }

    #[test]
    fn test_deduplication() {
        let registry = StyleRegistry::new(16);

        let h1 = registry
            .intern(validated(ResolvedStyle::default().locked(false)))
            .unwrap();
        let h2 = registry
            .intern(validated(ResolvedStyle::default().locked(false)))
            .unwrap();
        let h3 = registry
            .intern(validated(ResolvedStyle::default().hidden(true)))
            .unwrap();

        assert_eq!(h1, h2);
        assert_ne!(h1, h3);
        assert_eq!(h1.id(), 0);
        assert_eq!(h3.id(), 1);
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.stats(),
            RegistryStats {
                intern_calls: 3,
                allocations: 2,
                hits: 1
            }
        );
    }

    #[test]
    fn test_intern_keyed_shares_entries_with_intern() {
        let registry = StyleRegistry::new(4);
        let style = validated(ResolvedStyle::default().fill_color(Color::Indexed(10)));

        let h1 = registry.intern(style.clone()).unwrap();
        let h2 = registry
            .intern_keyed(StyleKeyEncoder::encode(&style), style)
            .unwrap();
        assert_eq!(h1, h2);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "key does not encode style")]
    fn test_intern_keyed_rejects_mismatched_key() {
        let registry = StyleRegistry::new(4);
        let other = validated(ResolvedStyle::default().hidden(true));
        let _ = registry.intern_keyed(
            StyleKeyEncoder::encode(&other),
            validated(ResolvedStyle::default()),
        );
    }

    #[test]
    fn test_shard_count_is_power_of_two() {
        assert_eq!(StyleRegistry::with_shards(10, 5).shard_count(), 8);
        assert_eq!(StyleRegistry::with_shards(10, 0).shard_count(), 1);
        assert!(StyleRegistry::new(10).shard_count().is_power_of_two());
    }

    #[test]
    fn test_seal_orders_by_id() {
        let registry = StyleRegistry::with_shards(16, 4);
        let styles: Vec<_> = (0..10u16)
            .map(|i| validated(ResolvedStyle::default().fill_color(Color::Indexed(8 + i))))
            .collect();
        for style in &styles {
            registry.intern(style.clone()).unwrap();
        }

        let table = registry.seal();
        assert_eq!(table.styles(), styles.as_slice());
        assert_eq!(registry.state(), RegistryState::Sealed);
    }

    #[test]
    fn test_intern_after_seal_fails() {
        let registry = StyleRegistry::new(16);
        let style = validated(ResolvedStyle::default());
        registry.intern(style.clone()).unwrap();
        registry.seal();

        let err = registry.intern(style).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Sealed);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_reset_reopens_and_bumps_generation() {
        let registry = StyleRegistry::new(16);
        let old = registry.intern(validated(ResolvedStyle::default())).unwrap();
        registry.seal();
        registry.reset();

        assert_eq!(registry.state(), RegistryState::Open);
        assert!(registry.is_empty());
        assert_eq!(registry.stats(), RegistryStats::default());

        let new = registry.intern(validated(ResolvedStyle::default())).unwrap();
        assert_eq!(new.id(), old.id());
        assert_ne!(new.generation(), old.generation());
    }

    #[test]
    fn test_capacity_error_carries_key() {
        let registry = StyleRegistry::new(1);
        registry.intern(validated(ResolvedStyle::default())).unwrap();

        let style = validated(ResolvedStyle::default().hidden(true));
        let key = StyleKeyEncoder::encode(&style);
        let err = registry.intern(style).unwrap_err();
        assert_eq!(
            err,
            Error::CapacityExceeded {
                limit: 1,
                key: key.to_hex()
            }
        );
    }
}
