use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn level_for_verbosity(verbosity_level: u8) -> LevelFilter {
    match verbosity_level {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install a stderr subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity level when set.
pub fn setup_tracing(verbosity_level: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(level_for_verbosity(verbosity_level).into())
    });

    let stderr_writer = fmt::Layer::default()
        .with_target(true)
        .with_writer(std::io::stderr);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_writer);

    // keep a subscriber the host application already installed
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Global tracing subscriber already set");
    }
}
