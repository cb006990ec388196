//! `ray-demo run` — le programme de démonstration complet :
//! `iota(max)` puis `fibRange(max)`, chacun suivi de son `printv`.

use std::io::Write;

use anyhow::{Context, Result};
use ray_memo::{iota, FibEvaluator};
use ray_runtime::Console;

use crate::config::Config;

pub fn exec<W: Write>(cfg: &Config, console: &mut Console<W>) -> Result<()> {
    let max = cfg.max;

    console.println(&format!("iota({max}):"));
    let data = iota(max).with_context(|| format!("iota({max})"))?;
    console.printv(&data);

    let mut ev = FibEvaluator::new();
    console.println(&format!("fibRange({max}):"));
    let data = ev.fib_range(max).with_context(|| format!("fibRange({max})"))?;
    console.printv(&data);

    let stats = ev.stats();
    log::info!(
        target: "ray-cli",
        "fibRange({max}): {} appels, {} hits, {} calculés",
        stats.calls, stats.hits, stats.computed
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn small_run() {
        let cfg = Config { max: 3, ..Config::default() };
        let mut c = Console::capture();
        exec(&cfg, &mut c).unwrap();
        assert_eq!(
            c.contents(),
            "iota(3):\nelement 0:0\nelement 1:1\nelement 2:2\n\
             fibRange(3):\nelement 0:1\nelement 1:1\nelement 2:2\n"
        );
    }

    #[test]
    fn out_of_range_fails_with_context() {
        let cfg = Config { max: 100, ..Config::default() };
        let mut c = Console::capture();
        let err = exec(&cfg, &mut c).unwrap_err();
        assert!(format!("{err:#}").contains("fibRange(100)"));
    }
}
