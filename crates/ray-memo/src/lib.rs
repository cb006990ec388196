//! ray-memo — module `Test` des programmes de démonstration ray
//!
//! Contient la partie "calcul" des programmes émis :
//!   - `iota(max)`         : suite 0..max
//!   - `fib(i)`            : Fibonacci mémoïsé (convention `fib(2) = 2`)
//!   - `fib_range(max)`    : `[fib(0), …, fib(max-1)]`, porté par le cache
//!   - `naive_fib(i)`      : version récursive sans cache du tout premier programme
//!
//! La table de mémoïsation n’est plus un global : elle appartient à un
//! `FibEvaluator` (`FibCache`), ou est partagée explicitement entre threads
//! (`SharedFibCache`).
//!
//! ```
//! use ray_memo::{iota, FibEvaluator};
//!
//! let mut ev = FibEvaluator::new();
//! assert_eq!(ev.fib(5).unwrap(), 8);
//! assert_eq!(ev.fib_range(4).unwrap(), vec![1, 1, 2, 3]);
//! assert_eq!(iota(3).unwrap(), vec![0, 1, 2]);
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, unused_must_use)]

pub mod cache;
pub mod error;
pub mod fib;
pub mod iota;
pub mod naive;

// ---------- Reexports de confort ----------
pub use cache::{FibCache, MemoTable, SharedFibCache, FIB_CACHE_CAPACITY};
pub use error::{MemoError, Result};
pub use fib::{EvalStats, FibEvaluator};
pub use iota::iota;
pub use naive::naive_fib;
