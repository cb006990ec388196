//! fib.rs — évaluateur Fibonacci mémoïsé.
//!
//! Convention du système (à ne pas "corriger") :
//!   fib(0) = fib(1) = 1, fib(2) = 2, fib(i) = fib(i-2) + fib(i-1)
//!
//! Ordre d’évaluation d’un appel :
//!   1. slot non nul dans la table → on le renvoie
//!   2. sinon cas de base (`i <= 1`, `i == 2`), puis récurrence
//!   3. publication du résultat dans le slot
//!
//! Les appels récursifs passent eux aussi par la table : le coût total est
//! linéaire en l’index maximal jamais demandé.

use ray_runtime::{Int64, Int8};

use crate::cache::{FibCache, MemoTable};
use crate::error::{MemoError, Result};

/// Compteurs d’instrumentation (utiles aux tests et au log final de la CLI).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalStats {
    /// Entrées dans l’évaluation d’un slot (appels récursifs compris).
    pub calls: u64,
    /// Slots servis directement par la table.
    pub hits: u64,
    /// Slots réellement calculés puis publiés.
    pub computed: u64,
}

#[derive(Debug, Default)]
pub struct FibEvaluator<M: MemoTable = FibCache> {
    table: M,
    stats: EvalStats,
}

impl FibEvaluator<FibCache> {
    /// Évaluateur avec sa propre table vide.
    pub fn new() -> Self {
        Self::with_table(FibCache::new())
    }
}

impl<M: MemoTable> FibEvaluator<M> {
    /// Évaluateur sur une table fournie par l’appelant (ex. `&SharedFibCache`).
    pub fn with_table(table: M) -> Self {
        Self { table, stats: EvalStats::default() }
    }

    pub fn table(&self) -> &M {
        &self.table
    }

    pub fn into_table(self) -> M {
        self.table
    }

    pub fn stats(&self) -> EvalStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = EvalStats::default();
    }

    /// `fib(i)` selon la convention du système.
    ///
    /// # Errors
    /// `IndexOutOfRange` si `i < 0` ou `i >= capacity` ; la table n’est pas touchée.
    pub fn fib(&mut self, i: Int8) -> Result<Int64> {
        let index = self.slot_for(i)?;
        self.eval(index)
    }

    /// `[fib(0), …, fib(max-1)]`, en s’appuyant uniquement sur la table.
    ///
    /// # Errors
    /// `IndexOutOfRange` si `max < 0` ou `max > capacity` ; rien n’est calculé.
    pub fn fib_range(&mut self, max: Int8) -> Result<Vec<Int64>> {
        let cap = self.table.capacity();
        match usize::try_from(max) {
            Ok(len) if len <= cap => {}
            _ => return Err(MemoError::IndexOutOfRange { index: i64::from(max), capacity: cap }),
        }
        (0..max).map(|k| self.fib(k)).collect()
    }

    fn slot_for(&self, i: Int8) -> Result<usize> {
        let cap = self.table.capacity();
        usize::try_from(i)
            .ok()
            .filter(|ix| *ix < cap)
            .ok_or(MemoError::IndexOutOfRange { index: i64::from(i), capacity: cap })
    }

    fn eval(&mut self, index: usize) -> Result<Int64> {
        self.stats.calls += 1;

        if let Some(cached) = self.table.lookup(index) {
            self.stats.hits += 1;
            log::trace!(target: "ray-memo", "fib({index}) servi par le cache: {cached}");
            return Ok(cached);
        }

        // Sous la capacité (64), fib(63) tient largement dans un Int64.
        let value = match index {
            0 | 1 => 1,
            2 => 2,
            _ => self.eval(index - 2)? + self.eval(index - 1)?,
        };

        self.stats.computed += 1;
        log::debug!(target: "ray-memo", "fib({index}) = {value} (publié)");
        self.table.publish(index, value)
    }
}

/* --------------------------------- Tests --------------------------------- */
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{SharedFibCache, FIB_CACHE_CAPACITY};

    #[test]
    fn base_values_follow_system_convention() {
        let mut ev = FibEvaluator::new();
        let got: Vec<Int64> = (0..6).map(|i| ev.fib(i).unwrap()).collect();
        assert_eq!(got, vec![1, 1, 2, 3, 5, 8]);
    }

    #[test]
    fn largest_index_fits() {
        let mut ev = FibEvaluator::new();
        assert_eq!(ev.fib(63).unwrap(), 10_610_209_857_723);
    }

    #[test]
    fn out_of_range_is_reported() {
        let mut ev = FibEvaluator::new();
        assert_eq!(
            ev.fib(-1),
            Err(MemoError::IndexOutOfRange { index: -1, capacity: FIB_CACHE_CAPACITY })
        );
        assert_eq!(
            ev.fib(64),
            Err(MemoError::IndexOutOfRange { index: 64, capacity: FIB_CACHE_CAPACITY })
        );
        assert_eq!(ev.stats(), EvalStats::default());
        assert_eq!(ev.table().len_filled(), 0);
    }

    #[test]
    fn second_call_is_a_pure_hit() {
        let mut ev = FibEvaluator::new();
        let first = ev.fib(10).unwrap();
        ev.fib(5).unwrap();
        let computed = ev.stats().computed;
        // slots 1..=10 ; le slot 0 n’est jamais atteint par la récurrence
        assert_eq!(computed, 10);

        let again = ev.fib(10).unwrap();
        assert_eq!(first, again);
        assert_eq!(ev.stats().computed, computed);
    }

    #[test]
    fn recursion_is_linear_on_cold_cache() {
        let mut ev = FibEvaluator::new();
        ev.fib(40).unwrap();
        let s = ev.stats();
        assert_eq!(s.computed, 40);
        assert!(s.calls <= 2 * 40, "trop d’appels: {s:?}");
    }

    #[test]
    fn range_matches_single_values() {
        let mut ev = FibEvaluator::new();
        let range = ev.fib_range(12).unwrap();
        assert_eq!(range.len(), 12);
        let mut fresh = FibEvaluator::new();
        for (k, v) in range.iter().enumerate() {
            assert_eq!(*v, fresh.fib(Int8::try_from(k).unwrap()).unwrap());
        }
    }

    #[test]
    fn range_bounds() {
        let mut ev = FibEvaluator::new();
        assert!(ev.fib_range(0).unwrap().is_empty());
        assert_eq!(ev.fib_range(64).unwrap().len(), 64);
        assert!(ev.fib_range(65).is_err());
        assert!(ev.fib_range(-3).is_err());
    }

    #[test]
    fn failed_range_caches_nothing() {
        let mut ev = FibEvaluator::new();
        assert!(ev.fib_range(100).is_err());
        assert_eq!(ev.table().len_filled(), 0);
    }

    #[test]
    fn preseeded_table_is_trusted() {
        let mut table = FibCache::new();
        table.publish(9, 55).unwrap();
        let mut ev = FibEvaluator::with_table(table);
        assert_eq!(ev.fib(9).unwrap(), 55);
        assert_eq!(ev.stats(), EvalStats { calls: 1, hits: 1, computed: 0 });
        assert_eq!(ev.into_table().len_filled(), 1);
    }

    #[test]
    fn shared_table_across_threads() {
        let shared = SharedFibCache::new();
        let results: Vec<Int64> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let table = &shared;
                    s.spawn(move || FibEvaluator::with_table(table).fib(50).unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(results.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(shared.len_filled(), 50);

        let mut late = FibEvaluator::with_table(&shared);
        late.fib(50).unwrap();
        assert_eq!(late.stats().computed, 0);
        assert_eq!(late.stats().hits, 1);
    }
}
