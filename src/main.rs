// SPDX-License-Identifier: MIT

use clap::{Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use std::net::IpAddr;
use std::process::ExitCode;

use ticket_triage::cli::{self, SubmitOptions};
use ticket_triage::config::ServerConfig;
use ticket_triage::server;
use ticket_triage::triage::workflow::WorkflowGraph;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Route a single ticket
    Submit {
        /// Ticket identifier, e.g. TCK-101
        #[arg(short, long)]
        ticket_id: String,

        /// Free-text issue description
        #[arg(short, long)]
        issue: String,

        /// Print the final record as JSON
        #[arg(long)]
        json: bool,

        /// Print every workflow transition
        #[arg(long)]
        trace: bool,
    },
    /// Print the workflow graph
    Graph {
        #[arg(short, long, value_enum, default_value_t = GraphFormat::Mermaid)]
        format: GraphFormat,
    },
    /// Start the web UI and JSON API
    Serve {
        /// Overrides TRIAGE_HOST
        #[arg(long)]
        host: Option<IpAddr>,

        /// Overrides TRIAGE_PORT
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GraphFormat {
    Mermaid,
    Json,
    Yaml,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Submit {
            ticket_id,
            issue,
            json,
            trace,
        } => match cli::submit(&ticket_id, &issue, SubmitOptions { json, trace }) {
            Ok(out) => print!("{}", out),
            Err(e) if e.is_validation() => {
                eprintln!("Please fill all fields: {}", e);
                return Ok(ExitCode::FAILURE);
            }
            Err(e) => return Err(e.into()),
        },
        Commands::Graph { format } => {
            let graph = WorkflowGraph::routing();
            match format {
                GraphFormat::Mermaid => print!("{}", graph.to_mermaid()),
                GraphFormat::Json => println!("{}", serde_json::to_string_pretty(&graph)?),
                GraphFormat::Yaml => print!("{}", serde_yaml::to_string(&graph)?),
            }
        }
        Commands::Serve { host, port } => {
            let config = ServerConfig::from_env()?.with_overrides(host, port);
            server::serve(config).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
