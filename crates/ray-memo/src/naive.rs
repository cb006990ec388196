//! naive.rs — Fibonacci du tout premier programme émis : récursif, sans cache.
//!
//! Convention canonique, indexée à partir de 1 : fib(1) = fib(2) = 1.
//! Coût exponentiel ; sert de référence et au sous-commande `fib --naive`.

use ray_runtime::Int32;

use crate::error::{MemoError, Result};

/// # Errors
/// `IndexOutOfRange` si `i < 1` (la récurrence d’origine ne termine pas),
/// `Overflow` si le résultat dépasse un `Int32` (à partir de `i = 47`).
pub fn naive_fib(i: Int32) -> Result<Int32> {
    if i < 1 {
        return Err(MemoError::IndexOutOfRange {
            index: i64::from(i),
            capacity: Int32::MAX.unsigned_abs() as usize,
        });
    }
    step(i)
}

fn step(i: Int32) -> Result<Int32> {
    if i == 1 || i == 2 {
        return Ok(1);
    }
    let a = step(i - 2)?;
    let b = step(i - 1)?;
    a.checked_add(b).ok_or(MemoError::Overflow { index: i64::from(i) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_values() {
        let got: Vec<Int32> = (1..=8).map(|i| naive_fib(i).unwrap()).collect();
        assert_eq!(got, vec![1, 1, 2, 3, 5, 8, 13, 21]);
    }

    #[test]
    fn shifted_against_memoized_convention() {
        let mut ev = crate::FibEvaluator::new();
        for i in 1..20_i8 {
            let memo = ev.fib(i - 1).unwrap();
            assert_eq!(i64::from(naive_fib(i32::from(i)).unwrap()), memo, "i={i}");
        }
    }

    #[test]
    fn zero_and_negative_are_rejected() {
        assert!(naive_fib(0).is_err());
        assert!(naive_fib(-5).is_err());
    }
}
