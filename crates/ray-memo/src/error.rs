use ray_runtime::Int64;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoError {
    /// Index ou longueur hors de `0..capacity`.
    #[error("index {index} hors limites (capacité {capacity})")]
    IndexOutOfRange { index: i64, capacity: usize },

    /// Le slot contenait déjà une autre valeur non nulle.
    #[error("cache incohérent au slot {index}: {stored} déjà publié, {computed} calculé")]
    CacheInvariant { index: usize, stored: Int64, computed: Int64 },

    /// Dépassement de l’entier 32 bits (évaluateur naïf).
    #[error("dépassement arithmétique pour fib({index})")]
    Overflow { index: i64 },
}

pub type Result<T, E = MemoError> = core::result::Result<T, E>;
