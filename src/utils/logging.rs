use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging to stderr.
///
/// Default level is WARN, so normal runs only print the user-facing messages.
/// - `-v` => INFO
/// - `-vv` => DEBUG
/// - `-vvv` => TRACE
/// - `-q` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=rcardio=trace`).
pub fn init_logging(verbose: u8, quiet: u8) {
    let level = level_for(verbose, quiet);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,rcardio={level}")));

    let show_src = matches!(level, "debug" | "trace");

    // A second init (tests calling run() twice) is harmless.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .try_init();
}

fn level_for(verbose: u8, quiet: u8) -> &'static str {
    match i16::from(verbose) - i16::from(quiet) {
        i16::MIN..=-1 => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
