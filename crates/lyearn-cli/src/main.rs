use clap::{Parser, Subcommand};

use lyearn_cli::cmd;
use lyearn_core::client::HttpActionItemClient;
use lyearn_core::config::ApiConfig;

#[derive(Parser)]
#[command(
    name = "lyearn",
    about = "Lyearn action-item MCP server — expose action-item creation over MCP",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as an MCP stdio server
    Mcp,

    /// Create an action item directly, bypassing the MCP transport
    Create {
        /// Title of the action item
        #[arg(long)]
        title: String,

        /// Status of the action item
        #[arg(long)]
        status: String,
    },

    /// Show the static resource, prompt, and tool catalogs
    Catalog,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    let default_level = match &cli.command {
        Commands::Mcp => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    // stdout carries the MCP protocol and command output — keep logs on stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Mcp => with_client(|api| cmd::mcp::run(api)),
        Commands::Create { title, status } => {
            with_client(|api| cmd::create::run(api, &title, &status, json))
        }
        Commands::Catalog => cmd::catalog::run(json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn with_client(
    f: impl FnOnce(&HttpActionItemClient) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    let client = HttpActionItemClient::new(config)?;
    f(&client)
}
