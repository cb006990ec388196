//! Initialisation des logs (`env_logger`, sortie sur stderr).

use log::LevelFilter;

/// Niveau par défaut selon le nombre de `-v`.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installe le logger global. Un `filter` (RAY_LOG / config) remplace la verbosité.
/// Un second appel est sans effet.
pub fn init(verbosity: u8, filter: Option<&str>) {
    let mut b = env_logger::Builder::new();
    b.filter_level(level_for(verbosity));
    if let Some(f) = filter {
        b.parse_filters(f);
    }
    b.format_timestamp(None).format_target(true);
    let _ = b.try_init();
}
