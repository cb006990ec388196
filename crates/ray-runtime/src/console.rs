//! console.rs — primitives de sortie du runtime.
//!
//! Trois primitives, toutes "fire-and-forget" du point de vue du programme :
//!   - `print(msg)`   : fragment sans fin de ligne
//!   - `println(msg)` : ligne complète
//!   - `printv(seq)`  : un élément par ligne, étiqueté par sa position (base 0)
//!
//! Une erreur d’écriture n’est jamais remontée à l’appelant : elle est tracée
//! (`log::warn!`) et comptée dans `Console::write_errors()`.
//!
//! `Console::capture()` écrit dans un buffer mémoire, pratique pour les tests.

use std::fmt::Display;
use std::io::{self, Write};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Format des étiquettes de `printv`.
///
/// Les programmes émis ont connu deux formats ; les deux restent disponibles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum PrintStyle {
    /// `element 0:1`
    #[default]
    Stream,
    /// `Element(0): 1`
    Printf,
}

impl PrintStyle {
    /// Formate une ligne de `printv` (sans le `\n`).
    pub fn label<T: Display>(self, pos: usize, val: &T) -> String {
        match self {
            PrintStyle::Stream => format!("element {pos}:{val}"),
            PrintStyle::Printf => format!("Element({pos}): {val}"),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PrintStyle::Stream => "stream",
            PrintStyle::Printf => "printf",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("style d’affichage inconnu: `{0}` (attendu: stream|printf)")]
pub struct ParseStyleError(pub String);

impl FromStr for PrintStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stream" => Ok(PrintStyle::Stream),
            "printf" => Ok(PrintStyle::Printf),
            other => Err(ParseStyleError(other.to_string())),
        }
    }
}

/// Collaborateur de sortie : un writer + un style d’étiquettes.
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
    style: PrintStyle,
    write_errors: usize,
}

impl Console<io::Stdout> {
    /// Console branchée sur la sortie standard.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), PrintStyle::default())
    }
}

impl Console<Vec<u8>> {
    /// Console qui capture tout en mémoire.
    pub fn capture() -> Self {
        Self::new(Vec::new(), PrintStyle::default())
    }

    /// Contenu capturé jusqu’ici (UTF-8, pertes remplacées).
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, style: PrintStyle) -> Self {
        Self { out, style, write_errors: 0 }
    }

    #[must_use]
    pub fn with_style(mut self, style: PrintStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> PrintStyle {
        self.style
    }

    /// Nombre d’écritures qui ont échoué (et ont été ignorées).
    pub fn write_errors(&self) -> usize {
        self.write_errors
    }

    /// Fragment sans fin de ligne. Flushé tout de suite : la sortie standard
    /// est bufferisée par ligne.
    pub fn print(&mut self, msg: &str) {
        let res = self.out.write_all(msg.as_bytes()).and_then(|()| self.out.flush());
        self.record(res);
    }

    pub fn println(&mut self, msg: &str) {
        let res = writeln!(self.out, "{msg}");
        self.record(res);
    }

    /// Un élément par ligne, étiqueté par sa position.
    pub fn printv<T: Display>(&mut self, seq: &[T]) {
        for (pos, val) in seq.iter().enumerate() {
            let line = self.style.label(pos, val);
            let res = writeln!(self.out, "{line}");
            self.record(res);
        }
    }

    pub fn flush(&mut self) {
        let res = self.out.flush();
        self.record(res);
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn record(&mut self, res: io::Result<()>) {
        if let Err(e) = res {
            self.write_errors += 1;
            log::warn!(target: "ray-runtime", "écriture console ignorée: {e}");
        }
    }
}

/// `print` direct sur stdout.
pub fn print(msg: &str) {
    Console::stdout().print(msg);
}

/// `println` direct sur stdout.
pub fn println(msg: &str) {
    Console::stdout().println(msg);
}

/// `printv` direct sur stdout, style par défaut.
pub fn printv<T: Display>(seq: &[T]) {
    Console::stdout().printv(seq);
}

/* --------------------------------- Tests --------------------------------- */
#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Broken;
    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "fermé"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn print_and_println() {
        let mut c = Console::capture();
        c.print("a");
        c.print("b");
        c.println("c");
        assert_eq!(c.contents(), "abc\n");
    }

    #[test]
    fn printv_labels_from_zero() {
        let mut c = Console::capture();
        c.printv(&[10, 20]);
        assert_eq!(c.contents(), "element 0:10\nelement 1:20\n");

        let mut c = Console::capture().with_style(PrintStyle::Printf);
        c.printv(&[7_i64]);
        assert_eq!(c.contents(), "Element(0): 7\n");
    }

    #[test]
    fn printv_empty_prints_nothing() {
        let mut c = Console::capture();
        c.printv::<i32>(&[]);
        assert!(c.contents().is_empty());
    }

    #[test]
    fn style_parse() {
        assert_eq!("Printf".parse::<PrintStyle>(), Ok(PrintStyle::Printf));
        assert_eq!(" stream ".parse::<PrintStyle>(), Ok(PrintStyle::Stream));
        assert!("json".parse::<PrintStyle>().is_err());
    }

    #[test]
    fn write_errors_are_swallowed() {
        let mut c = Console::new(Broken, PrintStyle::Stream);
        c.println("perdu");
        c.printv(&[1, 2]);
        assert_eq!(c.write_errors(), 3);
    }
}
