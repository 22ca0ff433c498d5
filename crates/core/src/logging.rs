//! Initialisation du logging pour GeneAlchemy

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise le système de logging
///
/// Le niveau par défaut vient de `RUST_LOG`; `default_level` sert de
/// filtre de repli quand la variable n'est pas définie.
pub fn init_logging(default_level: &str) {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();
}
