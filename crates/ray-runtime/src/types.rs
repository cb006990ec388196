//! Alias primitifs du runtime.
//!
//! Les programmes émis n’écrivent jamais `i32` ou `f64` directement : ils passent
//! par ces noms, qui fixent la largeur de chaque type indépendamment de la cible.

pub type Int8 = i8;
pub type Int16 = i16;
pub type Int32 = i32;
pub type Int64 = i64;

pub type UInt8 = u8;
pub type UInt16 = u16;
pub type UInt32 = u32;
pub type UInt64 = u64;

pub type Float32 = f32;
pub type Float64 = f64;

pub type Char = char;
pub type Void = ();

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn widths_are_fixed() {
        assert_eq!(size_of::<Int8>(), 1);
        assert_eq!(size_of::<Int16>(), 2);
        assert_eq!(size_of::<Int32>(), 4);
        assert_eq!(size_of::<Int64>(), 8);
        assert_eq!(size_of::<UInt64>(), 8);
        assert_eq!(size_of::<Float32>(), 4);
        assert_eq!(size_of::<Void>(), 0);
    }
}
