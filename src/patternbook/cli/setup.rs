use clap::{Parser, Subcommand};

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "patternbook", bin_name = "patternbook", version = get_version())]
#[command(about = "Runnable catalog of classic design patterns", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the patterns in the catalog
    #[command(alias = "ls")]
    List {
        /// Only show one family (creational, structural, behavioral)
        #[arg(short, long)]
        family: Option<String>,
    },

    /// Run one or more demonstrations
    #[command(alias = "r")]
    Run {
        /// Pattern ids (e.g. singleton abstract-factory)
        #[arg(required = true, num_args = 1..)]
        patterns: Vec<String>,
    },

    /// Show the commentary for a pattern
    Show { pattern: String },

    /// Get or set configuration
    Config {
        /// Configuration key (sales-dispatch, senior-cutoff)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
