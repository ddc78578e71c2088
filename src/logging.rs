use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// How chatty diagnostics on stderr are. Ordered from quietest to loudest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    pub fn to_filter(self) -> String {
        format!("xcresult_owners={}", self.level())
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the flags.
/// Reports go to stdout, so every diagnostic is written to stderr.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.to_filter()));
    let detailed = verbosity >= Verbosity::Debug;

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(detailed)
        .with_line_number(detailed)
        .compact();

    let installed = match verbosity {
        Verbosity::Quiet => builder.with_writer(std::io::sink).try_init(),
        Verbosity::Normal => builder.without_time().try_init(),
        _ => builder.try_init(),
    };

    if installed.is_err() {
        tracing::debug!("subscriber already installed");
    }
}
