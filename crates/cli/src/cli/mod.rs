//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use docgate::AwsConfig;

/// Freshness-gated DynamoDB document access.
#[derive(Debug, Parser)]
#[command(name = "docgate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Custom DynamoDB endpoint (e.g. a local DynamoDB).
    #[arg(long, env = "AWS_ENDPOINT_URL", global = true)]
    pub endpoint_url: Option<String>,

    /// AWS region.
    #[arg(long, env = "AWS_REGION", default_value = docgate::config::DEFAULT_REGION, global = true)]
    pub region: String,

    /// Output format.
    #[arg(long, default_value = "pretty", global = true)]
    pub format: OutputFormat,

    /// Only log warnings and errors (RUST_LOG still takes precedence).
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.quiet {
            "docgate=warn,docgate_cli=warn"
        } else {
            "docgate=info,docgate_cli=info"
        }
    }

    /// Builds the AWS client configuration from the global flags.
    pub fn aws_config(&self) -> AwsConfig {
        AwsConfig {
            endpoint_url: self.endpoint_url.clone(),
            region: self.region.clone(),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON output.
    Json,
    /// Indented JSON output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read a single item by key.
    Get(GetArgs),
    /// Scan a table following every continuation key.
    ScanAll(ScanAllArgs),
    /// Gate a one-item scan behind a table reachability check.
    Probe(ProbeArgs),
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Table name.
    #[arg(long)]
    pub table: String,

    /// Key attribute as NAME=VALUE (string values). Repeat for composite keys.
    #[arg(long = "key", required = true)]
    pub keys: Vec<String>,

    /// Use a strongly consistent read.
    #[arg(long)]
    pub consistent: bool,
}

#[derive(Debug, Args)]
pub struct ScanAllArgs {
    /// Table name.
    #[arg(long)]
    pub table: String,

    /// Secondary index to scan instead of the table.
    #[arg(long)]
    pub index_name: Option<String>,

    /// Filter expression applied server side.
    #[arg(long)]
    pub filter_expression: Option<String>,

    /// Attributes to return.
    #[arg(long)]
    pub projection_expression: Option<String>,
}

#[derive(Debug, Args)]
pub struct ProbeArgs {
    /// Table name.
    #[arg(long)]
    pub table: String,
}
