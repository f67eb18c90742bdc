use env_logger::Env;

/// Install the stderr logger. `RUST_LOG` wins over the flags when set.
pub(crate) fn init_logging(quiet: bool, verbose: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_target(false)
        .init();
}
