// 🗃️ Reading Cache - optional memoization owned by the caller
//
// Every derivation is a pure function of its input, so any entry may be dropped
// at any time. Eviction is first-in first-out at a fixed capacity.

use crate::derivations::{birth_day_number, expression_number, life_path_number, soul_urge_number};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Derivation {
    LifePath,
    BirthDay,
    Expression,
    SoulUrge,
}

type CacheKey = (Derivation, String);

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<CacheKey, u32>,
    order: VecDeque<CacheKey>,
    hits: u64,
    misses: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

// ============================================================================
// READING CACHE
// ============================================================================

/// Bounded cache keyed by (derivation, input). Clones share storage.
#[derive(Debug, Clone)]
pub struct ReadingCache {
    capacity: usize,
    state: Arc<RwLock<CacheState>>,
}

impl ReadingCache {
    pub fn new(capacity: usize) -> Self {
        ReadingCache {
            capacity,
            state: Arc::new(RwLock::new(CacheState::default())),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, kind: Derivation, input: &str) -> Option<u32> {
        let state = self.state.read().ok()?;
        state.entries.get(&(kind, input.to_string())).copied()
    }

    /// Cached value for `(kind, input)`, computing and storing it on a miss
    pub fn get_or_compute<F>(&self, kind: Derivation, input: &str, compute: F) -> u32
    where
        F: FnOnce() -> u32,
    {
        if let Some(value) = self.get(kind, input) {
            if let Ok(mut state) = self.state.write() {
                state.hits += 1;
            }
            return value;
        }

        let value = compute();

        if let Ok(mut state) = self.state.write() {
            state.misses += 1;
            if self.capacity > 0 {
                let key = (kind, input.to_string());
                if state.entries.insert(key.clone(), value).is_none() {
                    state.order.push_back(key);
                }
                while state.order.len() > self.capacity {
                    if let Some(oldest) = state.order.pop_front() {
                        state.entries.remove(&oldest);
                    }
                }
            }
        }

        value
    }

    pub fn len(&self) -> usize {
        self.state.read().map(|s| s.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut state) = self.state.write() {
            state.entries.clear();
            state.order.clear();
        }
    }

    pub fn stats(&self) -> CacheStats {
        self.state
            .read()
            .map(|s| CacheStats {
                entries: s.entries.len(),
                hits: s.hits,
                misses: s.misses,
            })
            .unwrap_or(CacheStats { entries: 0, hits: 0, misses: 0 })
    }
}

// ============================================================================
// CALCULATOR
// ============================================================================

/// The four derivations, optionally routed through a shared cache
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    cache: Option<ReadingCache>,
}

impl Calculator {
    /// No caching; every call computes
    pub fn new() -> Self {
        Calculator { cache: None }
    }

    pub fn with_cache(cache: ReadingCache) -> Self {
        Calculator { cache: Some(cache) }
    }

    pub fn cache(&self) -> Option<&ReadingCache> {
        self.cache.as_ref()
    }

    fn run<F>(&self, kind: Derivation, input: &str, compute: F) -> u32
    where
        F: FnOnce() -> u32,
    {
        match &self.cache {
            Some(cache) => cache.get_or_compute(kind, input, compute),
            None => compute(),
        }
    }

    pub fn life_path(&self, birthdate: &str) -> u32 {
        self.run(Derivation::LifePath, birthdate, || life_path_number(birthdate))
    }

    pub fn birth_day(&self, day: u32) -> u32 {
        self.run(Derivation::BirthDay, &day.to_string(), || birth_day_number(day))
    }

    pub fn expression(&self, name: &str) -> u32 {
        self.run(Derivation::Expression, name, || expression_number(name))
    }

    pub fn soul_urge(&self, name: &str) -> u32 {
        self.run(Derivation::SoulUrge, name, || soul_urge_number(name))
    }
}
