//! ray-cli/src/lib.rs — point d’entrée des programmes de démo ray
//!
//! Sous-commandes :
//!   - run   : `iota(max)` + `fibRange(max)` (défaut si rien n’est précisé)
//!   - fib   : une valeur, mémoïsée ou naïve (`--naive`)
//!   - hello : le petit programme "hello world" / "hello from utils"
//!
//! Toute erreur remonte jusqu’à `main`, qui l’affiche et sort en statut 1.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, unused_must_use)]

use std::io::Write;

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use ray_runtime::{Console, Int8, PrintStyle};

pub mod commands;
pub mod config;
pub mod logging;

use config::{CliOverrides, Config};

#[derive(Parser, Debug)]
#[command(name = "ray-demo", version, about = "Programmes de démonstration émis par ray")]
pub struct Cli {
    /// Verbosité (répéter pour plus de bruit)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Fichier de config TOML (défaut : ./ray.toml s’il existe)
    #[arg(long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Longueur des suites (0..=64)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub max: Option<Int8>,

    /// Étiquettes de printv : stream | printf
    #[arg(long, global = true)]
    pub style: Option<PrintStyle>,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Cmd {
    /// iota(max) puis fibRange(max)
    Run,
    /// Une seule valeur de Fibonacci
    Fib(commands::fib::Args),
    /// hello world + hello from utils
    Hello,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides { max: self.max, style: self.style }
    }
}

/// Point d’entrée du binaire (à appeler depuis src/main.rs).
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = Config::resolve(cli.config.as_deref(), &cli.overrides())?;
    logging::init(cli.verbose, cfg.log.as_deref());

    let out = std::io::stdout();
    execute(&cli, &cfg, out)?;
    Ok(())
}

/// Exécute la sous-commande sur un writer quelconque ; renvoie le writer.
pub fn execute<W: Write>(cli: &Cli, cfg: &Config, out: W) -> Result<W> {
    let mut console = Console::new(out, cfg.style);
    match cli.cmd.as_ref().unwrap_or(&Cmd::Run) {
        Cmd::Run => commands::run::exec(cfg, &mut console)?,
        Cmd::Fib(a) => commands::fib::exec(a, &mut console)?,
        Cmd::Hello => commands::hello::exec(&mut console)?,
    }
    console.flush();
    if console.write_errors() > 0 {
        log::warn!(target: "ray-cli", "{} écriture(s) console perdue(s)", console.write_errors());
    }
    Ok(console.into_inner())
}
