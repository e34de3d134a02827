use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "storefront-server",
    about = "Storefront search daemon - search proxy, query normalization and WebUI",
    version = env!("CARGO_PKG_VERSION"),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, env = "STOREFRONT_CONFIG", help = "JSON config file")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "STOREFRONT_HOST")]
    pub host: Option<String>,

    #[arg(short, long, env = "STOREFRONT_PORT")]
    pub port: Option<u16>,

    #[arg(long, env = "STOREFRONT_UPSTREAM_URL", help = "Search cluster base URL")]
    pub upstream_url: Option<String>,

    #[arg(long, env = "STOREFRONT_UPSTREAM_PATH", help = "Index search path, e.g. /products/_search")]
    pub upstream_path: Option<String>,

    #[arg(long, env = "STOREFRONT_STATIC_DIR", help = "Built storefront UI to serve")]
    pub static_dir: Option<String>,

    #[arg(long, env = "STOREFRONT_WORDLIST", help = "Frequency-ranked word list, one word per line")]
    pub wordlist: Option<String>,

    #[arg(
        long,
        env = "STOREFRONT_ENV",
        help = "Deployment environment; only 'production' hides error details (falls back to NODE_ENV)"
    )]
    pub environment: Option<String>,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    #[command(about = "Start the server (default if no command specified)")]
    Serve,

    #[command(about = "Print the normalized form of a query")]
    Normalize {
        #[arg(required = true, num_args = 1.., help = "Raw query words")]
        query: Vec<String>,
    },

    #[command(about = "List matching search suggestions")]
    Suggest {
        #[arg(default_value = "", help = "Text typed so far")]
        prefix: String,

        #[arg(short = 'n', long, default_value = "8")]
        limit: usize,
    },
}
