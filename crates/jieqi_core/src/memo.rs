//! Opt-in memoization in front of any [`EphemerisProvider`].
//!
//! The longitude solver revisits nearby instants and the solar-term generator
//! asks for the same reference state 24 times, so a small cache in front of
//! an expensive backend pays for itself. Keys use `jd_et.to_bits()`: callers
//! that reuse an instant pass bit-identical values.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use log::warn;

use crate::body::Body;
use crate::error::ProviderError;
use crate::flags::CalcFlags;
use crate::provider::EphemerisProvider;

/// Entry limit used by [`MemoProvider::new`].
pub const DEFAULT_MEMO_CAPACITY: usize = 4096;

/// Telemetry from a memoizing provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryStats {
    /// Calls forwarded to the wrapped provider.
    pub evaluations: u64,
    pub cache_hits: u64,
}

#[derive(Default)]
struct MemoState {
    bodies: HashMap<(i32, u64, u32), [f64; 6]>,
    nutation: HashMap<(u64, u32), [f64; 4]>,
    stats: QueryStats,
}

impl MemoState {
    fn len(&self) -> usize {
        self.bodies.len() + self.nutation.len()
    }

    fn make_room(&mut self, capacity: usize) {
        if self.len() >= capacity {
            warn!(
                "memo cache reached {capacity} entries, clearing {} body and {} nutation entries",
                self.bodies.len(),
                self.nutation.len()
            );
            self.bodies.clear();
            self.nutation.clear();
        }
    }
}

/// Caching wrapper around another provider.
///
/// Successful results are cached per `(body, epoch, flags)`; errors are
/// always forwarded and never cached. When the cache holds `capacity`
/// entries it is cleared wholesale before the next insert. ΔT is passed
/// through uncached.
pub struct MemoProvider<P> {
    inner: P,
    capacity: usize,
    state: Mutex<MemoState>,
}

impl<P: std::fmt::Debug> std::fmt::Debug for MemoProvider<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("MemoProvider")
            .field("inner", &self.inner)
            .field("capacity", &self.capacity)
            .field("entries", &state.len())
            .field("stats", &state.stats)
            .finish()
    }
}

impl<P: EphemerisProvider> MemoProvider<P> {
    pub fn new(inner: P) -> Self {
        Self::with_capacity(inner, DEFAULT_MEMO_CAPACITY)
    }

    /// Wrap `inner` with room for `capacity` entries (at least one).
    pub fn with_capacity(inner: P, capacity: usize) -> Self {
        Self {
            inner,
            capacity: capacity.max(1),
            state: Mutex::new(MemoState::default()),
        }
    }
}

impl<P> MemoProvider<P> {
    // A panic while holding the lock cannot leave a half-written entry, so
    // a poisoned cache is still usable.
    fn lock(&self) -> MutexGuard<'_, MemoState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Cached entries currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> QueryStats {
        self.lock().stats
    }

    /// Drop all cached entries and reset the counters.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.bodies.clear();
        state.nutation.clear();
        state.stats = QueryStats::default();
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: EphemerisProvider> EphemerisProvider for MemoProvider<P> {
    fn calc_body(
        &self,
        jd_et: f64,
        body: Body,
        flags: CalcFlags,
    ) -> Result<[f64; 6], ProviderError> {
        let key = (body.code(), jd_et.to_bits(), flags.bits());
        {
            let mut state = self.lock();
            if let Some(cached) = state.bodies.get(&key).copied() {
                state.stats.cache_hits = state.stats.cache_hits.saturating_add(1);
                return Ok(cached);
            }
        }

        let result = self.inner.calc_body(jd_et, body, flags);
        let mut state = self.lock();
        state.stats.evaluations = state.stats.evaluations.saturating_add(1);
        if let Ok(value) = result {
            state.make_room(self.capacity);
            state.bodies.insert(key, value);
        }
        result
    }

    fn calc_ecliptic_nutation(
        &self,
        jd_et: f64,
        flags: CalcFlags,
    ) -> Result<[f64; 4], ProviderError> {
        let key = (jd_et.to_bits(), flags.bits());
        {
            let mut state = self.lock();
            if let Some(cached) = state.nutation.get(&key).copied() {
                state.stats.cache_hits = state.stats.cache_hits.saturating_add(1);
                return Ok(cached);
            }
        }

        let result = self.inner.calc_ecliptic_nutation(jd_et, flags);
        let mut state = self.lock();
        state.stats.evaluations = state.stats.evaluations.saturating_add(1);
        if let Ok(value) = result {
            state.make_room(self.capacity);
            state.nutation.insert(key, value);
        }
        result
    }

    fn delta_t(&self, jd_ut: f64) -> f64 {
        self.inner.delta_t(jd_ut)
    }
}
