//! config.rs — configuration de `ray-demo`.
//!
//! Couches, de la plus faible à la plus forte :
//!   1. defaults (`Config::default()`)
//!   2. fichier TOML (`--config <PATH>`, sinon `ray.toml` s’il existe)
//!   3. ENV (`RAY_MAX`, `RAY_STYLE`, `RAY_LOG`)
//!   4. overrides CLI (`CliOverrides`, dernier mot)
//!
//! Exemple de fichier :
//! ```toml
//! max = 64
//! style = "printf"
//! log = "ray_memo=debug"
//! ```

use anyhow::{bail, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use ray_memo::FIB_CACHE_CAPACITY;
use ray_runtime::{Int8, PrintStyle};
use serde::Deserialize;

/// Nom du fichier de config cherché dans le répertoire courant.
pub const DEFAULT_CONFIG_FILE: &str = "ray.toml";

/// Borne utilisée par les programmes émis.
pub const DEFAULT_MAX: Int8 = 42;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Longueur des suites `iota` / `fibRange`.
    pub max: Int8,
    /// Format des étiquettes de `printv`.
    pub style: PrintStyle,
    /// Filtre `env_logger` (prioritaire sur `-v`).
    pub log: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self { max: DEFAULT_MAX, style: PrintStyle::default(), log: None }
    }
}

/// Overrides fournis par la CLI ; appliqués avec `apply_cli_overrides`.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub max: Option<Int8>,
    pub style: Option<PrintStyle>,
}

impl Config {
    /// Defaults + fichier + ENV + CLI, puis validation.
    pub fn resolve(path: Option<&Utf8Path>, overrides: &CliOverrides) -> Result<Self> {
        let mut c = Self::load(path)?;
        c.apply_env();
        c.apply_cli_overrides(overrides);
        c.validate()?;
        Ok(c)
    }

    /// Charge le fichier demandé, ou `ray.toml` s’il existe, ou les defaults.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        let path: Utf8PathBuf = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = Utf8PathBuf::from(DEFAULT_CONFIG_FILE);
                if !p.exists() {
                    return Ok(Self::default());
                }
                p
            }
        };
        let s = std::fs::read_to_string(&path).with_context(|| format!("lecture {path}"))?;
        log::debug!(target: "ray-cli", "config chargée depuis {path}");
        Self::from_toml_str(&s).with_context(|| format!("config invalide: {path}"))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("TOML invalide")
    }

    /// Applique les variables d’environnement `RAY_*`.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Comme `apply_env`, avec une source de variables injectée.
    /// Une valeur illisible est ignorée (avec un warning).
    pub fn apply_env_from(&mut self, read: impl Fn(&str) -> Option<String>) {
        if let Some(v) = read("RAY_MAX") {
            match v.trim().parse::<Int8>() {
                Ok(n) => self.max = n,
                Err(e) => log::warn!(target: "ray-cli", "RAY_MAX ignoré ({v:?}): {e}"),
            }
        }
        if let Some(v) = read("RAY_STYLE") {
            match v.parse::<PrintStyle>() {
                Ok(s) => self.style = s,
                Err(e) => log::warn!(target: "ray-cli", "RAY_STYLE ignoré: {e}"),
            }
        }
        if let Some(v) = read("RAY_LOG") {
            self.log = Some(v);
        }
    }

    pub fn apply_cli_overrides(&mut self, o: &CliOverrides) {
        if let Some(x) = o.max   { self.max = x; }
        if let Some(x) = o.style { self.style = x; }
    }

    pub fn validate(&self) -> Result<()> {
        let in_range = usize::try_from(self.max).is_ok_and(|n| n <= FIB_CACHE_CAPACITY);
        if !in_range {
            bail!("max doit être dans 0..={FIB_CACHE_CAPACITY} (reçu {})", self.max);
        }
        Ok(())
    }
}

/* ───────────────────────────── Tests ───────────────────────────── */
