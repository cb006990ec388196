//! cache.rs — tables de mémoïsation pour `fib`.
//!
//! Une table = `FIB_CACHE_CAPACITY` slots indexés par `fib(i)`. Un slot vaut
//! `0` tant qu’il n’a pas été calculé (toutes les valeurs de Fibonacci sont ≥ 1,
//! donc `0` ne peut pas être une vraie valeur).
//!
//! Invariant : un slot non nul n’est jamais réécrit avec une autre valeur.
//! `publish` est idempotent ; une valeur différente donne `CacheInvariant`.
//!
//! Deux implémentations :
//!   - `FibCache`       : tableau possédé par un seul évaluateur
//!   - `SharedFibCache` : un `OnceCell` par slot, partageable entre threads
//!     (calcul puis publication unique, le premier publié gagne)

use once_cell::sync::OnceCell;
use ray_runtime::Int64;

use crate::error::{MemoError, Result};

/// Nombre de slots d’une table (indices `0..=63`).
pub const FIB_CACHE_CAPACITY: usize = 64;

/// Ce dont l’évaluateur a besoin d’une table de mémoïsation.
pub trait MemoTable {
    fn capacity(&self) -> usize;

    /// Valeur publiée pour `index`, `None` si le slot est vide ou hors table.
    fn lookup(&self, index: usize) -> Option<Int64>;

    /// Publie `value` au slot `index` et renvoie la valeur désormais stockée.
    fn publish(&mut self, index: usize, value: Int64) -> Result<Int64>;
}

fn out_of_range(index: usize, capacity: usize) -> MemoError {
    MemoError::IndexOutOfRange { index: i64::try_from(index).unwrap_or(i64::MAX), capacity }
}

/* ─────────────────────────── FibCache (possédé) ─────────────────────────── */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibCache {
    slots: [Int64; FIB_CACHE_CAPACITY],
}

impl Default for FibCache {
    fn default() -> Self {
        Self::new()
    }
}

impl FibCache {
    /// Table vide : tous les slots à zéro.
    pub const fn new() -> Self {
        Self { slots: [0; FIB_CACHE_CAPACITY] }
    }

    /// Nombre de slots déjà calculés.
    pub fn len_filled(&self) -> usize {
        self.slots.iter().filter(|v| **v != 0).count()
    }

    pub fn slots(&self) -> &[Int64] {
        &self.slots
    }

    pub fn clear(&mut self) {
        self.slots = [0; FIB_CACHE_CAPACITY];
    }
}

impl MemoTable for FibCache {
    fn capacity(&self) -> usize {
        FIB_CACHE_CAPACITY
    }

    fn lookup(&self, index: usize) -> Option<Int64> {
        self.slots.get(index).copied().filter(|v| *v != 0)
    }

    fn publish(&mut self, index: usize, value: Int64) -> Result<Int64> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or_else(|| out_of_range(index, FIB_CACHE_CAPACITY))?;
        match *slot {
            0 => {
                *slot = value;
                Ok(value)
            }
            stored if stored == value => Ok(stored),
            stored => Err(MemoError::CacheInvariant { index, stored, computed: value }),
        }
    }
}

/* ───────────────────────── SharedFibCache (Sync) ───────────────────────── */

/// Table partageable : chaque slot est initialisé au plus une fois.
///
/// Deux threads peuvent calculer le même slot en même temps ; un seul publie,
/// l’autre relit la valeur gagnante (identique, `fib` est déterministe).
#[derive(Debug)]
pub struct SharedFibCache {
    slots: [OnceCell<Int64>; FIB_CACHE_CAPACITY],
}

impl Default for SharedFibCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedFibCache {
    pub fn new() -> Self {
        Self { slots: std::array::from_fn(|_| OnceCell::new()) }
    }

    pub fn get(&self, index: usize) -> Option<Int64> {
        self.slots.get(index)?.get().copied().filter(|v| *v != 0)
    }

    /// Publie si le slot est vide ; sinon vérifie que la valeur concorde.
    pub fn publish_once(&self, index: usize, value: Int64) -> Result<Int64> {
        let cell = self
            .slots
            .get(index)
            .ok_or_else(|| out_of_range(index, FIB_CACHE_CAPACITY))?;
        let stored = *cell.get_or_init(|| value);
        if stored == value {
            Ok(stored)
        } else {
            Err(MemoError::CacheInvariant { index, stored, computed: value })
        }
    }

    pub fn len_filled(&self) -> usize {
        self.slots.iter().filter(|c| c.get().is_some()).count()
    }

    /// Copie figée de la table (slots vides à zéro).
    pub fn snapshot(&self) -> FibCache {
        let mut out = FibCache::new();
        for (dst, cell) in out.slots.iter_mut().zip(&self.slots) {
            *dst = cell.get().copied().unwrap_or(0);
        }
        out
    }
}

impl MemoTable for &SharedFibCache {
    fn capacity(&self) -> usize {
        FIB_CACHE_CAPACITY
    }

    fn lookup(&self, index: usize) -> Option<Int64> {
        SharedFibCache::get(*self, index)
    }

    fn publish(&mut self, index: usize, value: Int64) -> Result<Int64> {
        SharedFibCache::publish_once(*self, index, value)
    }
}

/* ───────────────────────────── Tests ───────────────────────────── */
