pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use client::ApiClient;

#[derive(Parser)]
#[command(name = "tourney")]
#[command(about = "Tourney CLI - command-line client for the tournament store API")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "TOURNEY_API_URL",
        default_value = "http://localhost:3000",
        help = "Base URL of the API server"
    )]
    pub server: String,

    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Admin token utilities (local, no server needed)")]
    Token {
        #[command(subcommand)]
        cmd: commands::token::TokenCommands,
    },

    #[command(about = "Load a tournament by id")]
    Load {
        #[arg(help = "Tournament id (UUID)")]
        id: String,
    },

    #[command(about = "Create or update a tournament from a JSON file or stdin")]
    Save {
        #[arg(long, help = "Tournament id (generated by the server when omitted)")]
        id: Option<String>,
        #[arg(long, env = "TOURNEY_ADMIN_TOKEN", help = "Admin token for the tournament")]
        token: String,
        #[arg(long, help = "Path to the tournament JSON payload (stdin when omitted)")]
        file: Option<String>,
    },

    #[command(about = "Delete a tournament")]
    Delete {
        #[arg(help = "Tournament id (UUID)")]
        id: String,
        #[arg(long, env = "TOURNEY_ADMIN_TOKEN", help = "Admin token for the tournament")]
        token: String,
    },

    #[command(about = "Check server health status from the /health endpoint")]
    Health,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Token { cmd } => commands::token::handle(cmd, output_format),
        Commands::Load { id } => {
            let client = ApiClient::new(&cli.server)?;
            commands::tournament::load(&client, &id, output_format).await
        }
        Commands::Save { id, token, file } => {
            let client = ApiClient::new(&cli.server)?;
            commands::tournament::save(&client, id.as_deref(), &token, file.as_deref(), output_format).await
        }
        Commands::Delete { id, token } => {
            let client = ApiClient::new(&cli.server)?;
            commands::tournament::delete(&client, &id, &token, output_format).await
        }
        Commands::Health => {
            let client = ApiClient::new(&cli.server)?;
            commands::tournament::health(&client, output_format).await
        }
    }
}
