use env_logger::{Builder, Env, Target};

/// Logs go to stderr so stdout stays clean for the report or JSON.
/// `RUST_LOG` wins over `level` when set.
pub fn init(level: log::LevelFilter) {
    Builder::from_env(Env::default().default_filter_or(level.to_string()))
        .target(Target::Stderr)
        .init();
}
