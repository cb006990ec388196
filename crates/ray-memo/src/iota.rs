use ray_runtime::{Int32, Int8};

use crate::error::{MemoError, Result};

/// Suite croissante `0, 1, …, max-1`.
///
/// Toujours indexée à partir de 0 : une variante émise commençait à 1 et
/// laissait le slot 0 à sa valeur par défaut, ce n’est pas reproduit.
///
/// # Errors
/// `IndexOutOfRange` si `max` est négatif.
pub fn iota(max: Int8) -> Result<Vec<Int32>> {
    if max < 0 {
        return Err(MemoError::IndexOutOfRange {
            index: i64::from(max),
            capacity: Int8::MAX.unsigned_abs().into(),
        });
    }
    Ok((0..Int32::from(max)).collect())
}
