//! `ray-demo fib <INDEX>` — une seule valeur.
//!
//! Par défaut l’évaluateur mémoïsé (ligne complète) ; avec `--naive`, la
//! récursion sans cache du premier programme émis, affichée sans fin de ligne.

use std::io::Write;

use anyhow::{Context, Result};
use ray_memo::{naive_fib, FibEvaluator, MemoError, FIB_CACHE_CAPACITY};
use ray_runtime::{Console, Int32, Int8};

#[derive(clap::Args, Debug, Clone)]
pub struct Args {
    /// Index à évaluer
    #[arg(allow_negative_numbers = true)]
    pub index: Int32,

    /// Récursion naïve sans cache (convention fib(1) = fib(2) = 1)
    #[arg(long)]
    pub naive: bool,
}

pub fn exec<W: Write>(args: &Args, console: &mut Console<W>) -> Result<()> {
    if args.naive {
        let v = naive_fib(args.index).with_context(|| format!("fib({})", args.index))?;
        console.print(&v.to_string());
        return Ok(());
    }

    let index = Int8::try_from(args.index).map_err(|_| MemoError::IndexOutOfRange {
        index: i64::from(args.index),
        capacity: FIB_CACHE_CAPACITY,
    });
    let mut ev = FibEvaluator::new();
    let v = index
        .and_then(|i| ev.fib(i))
        .with_context(|| format!("fib({})", args.index))?;
    console.println(&v.to_string());
    log::debug!(target: "ray-cli", "fib({}): {:?}", args.index, ev.stats());
    Ok(())
}
