//! ray-runtime — Shim runtime des programmes émis par `ray`
//!
//! Chaque programme généré embarque le même petit socle : des alias de types
//! primitifs, trois primitives de sortie et les singletons booléens `True` /
//! `False`. Ce crate en est la version Rust, partagée par tous les programmes.
//!
//! ## Modules
//! - `types`   : alias `Int8` … `Float64`, `Char`, `Void`.
//! - `console` : `print`, `println`, `printv` (+ `Console` capturable pour tests).
//! - `boolean` : `Bool { True, False }`, types unitaires `True` / `False`.
//!
//! ## Features
//! - **serde** : `PrintStyle` (dé)sérialisable, pour les fichiers de config.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, unused_must_use)]

pub mod boolean;
pub mod console;
pub mod types;

// ---------- Reexports de confort ----------
pub use boolean::{make_false, make_true, Bool, False, True};
pub use console::{print, println, printv, Console, ParseStyleError, PrintStyle};
pub use types::*;

/// Version du crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------- Prelude ----------
pub mod prelude {
    pub use crate::boolean::{make_false, make_true, Bool, False, True};
    pub use crate::console::{print, println, printv, Console, PrintStyle};
    pub use crate::types::*;
}
