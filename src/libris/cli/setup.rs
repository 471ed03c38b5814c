use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "libris", bin_name = "libris", version)]
#[command(about = "Interactive catalog for a home library", long_about = None)]
pub struct Cli {
    /// Catalog file (overrides the config file)
    #[arg(short, long, env = "LIBRIS_DB", value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Refuse to start if the catalog file cannot be read
    #[arg(long)]
    pub strict: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory holding config.json
    #[arg(long, env = "LIBRIS_CONFIG_DIR", value_name = "DIR", hide = true)]
    pub config_dir: Option<PathBuf>,
}

/// Diagnostics go to stderr so they never mix with the menu on stdout.
/// `RUST_LOG` is honoured unless `--verbose` asks for everything.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("libris=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
