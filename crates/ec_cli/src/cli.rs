use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ec_inference::{Config, DEFAULT_BASE_URL, DEFAULT_MODEL_NAME};

#[derive(Parser, Debug)]
#[command(author, version, about = "Earnings call / management commentary summarizer", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub model: ModelArgs,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    #[arg(
        long,
        global = true,
        env = "EC_MODEL",
        default_value = "openai",
        help = "Model to use for analysis. Available models: openai (default), dummy"
    )]
    pub model: String,
    /// API key for the OpenAI-compatible endpoint
    #[arg(long, global = true, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible endpoint
    #[arg(long, global = true, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    /// Model identifier sent to the provider
    #[arg(long, global = true, env = "EC_MODEL_NAME", default_value = DEFAULT_MODEL_NAME)]
    pub model_name: String,
}

impl ModelArgs {
    pub fn to_config(&self) -> Config {
        Config {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            model_name: self.model_name.clone(),
        }
    }
}

/// Megabytes to bytes, clamped instead of overflowing on absurd flags.
pub fn upload_limit_bytes(max_upload_mb: usize) -> usize {
    max_upload_mb.saturating_mul(1024 * 1024)
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Directory with the frontend assets served at `/`
        #[arg(long, default_value = "frontend")]
        static_dir: PathBuf,
        /// Disable static file serving
        #[arg(long)]
        no_static: bool,
        /// Largest accepted upload, in megabytes
        #[arg(long, default_value_t = 25)]
        max_upload_mb: usize,
    },
    /// Summarize a local .pdf or .txt file and print the JSON result
    Analyze {
        file: PathBuf,
        /// Print compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}
