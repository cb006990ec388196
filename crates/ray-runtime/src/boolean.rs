//! boolean.rs — les deux singletons logiques du runtime.
//!
//! Dans le langage source, `True` et `False` sont des objets à part entière,
//! avec un nom affichable. On les garde comme deux types unitaires distincts
//! (`True`, `False`) et on les réunit dans l’enum fermé `Bool`, qui est ce que
//! les programmes manipulent vraiment.
//!
//! Les conversions sont explicites : `to_bool()` et `to_display()`.
//! Aucune algèbre booléenne n’est définie ici.

use std::fmt;

/// Valeur logique du runtime : exactement deux habitants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bool {
    True,
    False,
}

/// Singleton `True`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct True;

/// Singleton `False`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct False;

/// Construit la valeur `True`.
pub const fn make_true() -> Bool {
    Bool::True
}

/// Construit la valeur `False`.
pub const fn make_false() -> Bool {
    Bool::False
}

impl Bool {
    /// Projection vers le booléen natif.
    pub const fn to_bool(self) -> bool {
        match self {
            Bool::True => true,
            Bool::False => false,
        }
    }

    /// Nom affichable : `"True"` ou `"False"`.
    pub const fn to_display(self) -> &'static str {
        match self {
            Bool::True => "True",
            Bool::False => "False",
        }
    }
}

impl True {
    pub const fn to_bool(self) -> bool {
        Bool::True.to_bool()
    }
    pub const fn to_display(self) -> &'static str {
        Bool::True.to_display()
    }
}

impl False {
    pub const fn to_bool(self) -> bool {
        Bool::False.to_bool()
    }
    pub const fn to_display(self) -> &'static str {
        Bool::False.to_display()
    }
}

impl From<True> for Bool {
    fn from(_: True) -> Self {
        Bool::True
    }
}

impl From<False> for Bool {
    fn from(_: False) -> Self {
        Bool::False
    }
}

impl From<bool> for Bool {
    fn from(b: bool) -> Self {
        if b { Bool::True } else { Bool::False }
    }
}

impl From<Bool> for bool {
    fn from(b: Bool) -> Self {
        b.to_bool()
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_display())
    }
}

impl fmt::Display for True {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_display())
    }
}

impl fmt::Display for False {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_display())
    }
}

/* --------------------------------- Tests --------------------------------- */
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projections_are_exact() {
        assert!(make_true().to_bool());
        assert!(!make_false().to_bool());
        assert_eq!(make_true().to_display(), "True");
        assert_eq!(make_false().to_display(), "False");
    }

    #[test]
    fn singletons_match_enum() {
        assert_eq!(Bool::from(True), make_true());
        assert_eq!(Bool::from(False), make_false());
        assert_eq!(True.to_display(), "True");
        assert!(!False.to_bool());
    }

    #[test]
    fn native_conversions_are_explicit() {
        let b: Bool = true.into();
        assert_eq!(b, Bool::True);
        let n: bool = Bool::False.into();
        assert!(!n);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(format!("{}", make_true()), "True");
        assert_eq!(False.to_string(), "False");
    }
}
