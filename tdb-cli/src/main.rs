use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::time::Duration;
use tdb_client::config::DEFAULT_PORT;
use tdb_client::{Client, ClientConfig, ClientError, ConceptMap, QueryKind};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod shell;
mod table;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    Table,
    /// Pretty JSON
    Json,
    /// JSON Lines (one answer per line)
    Jsonl,
}

#[derive(Parser)]
#[command(name = "tdb")]
#[command(about = "Graph database CLI", long_about = None)]
struct Cli {
    /// Server host
    #[arg(long, env = "TDB_HOST", default_value = "127.0.0.1", global = true)]
    host: String,

    /// Server port
    #[arg(long, env = "TDB_PORT", default_value_t = DEFAULT_PORT, global = true)]
    port: u16,

    /// Seconds between session keep-alive pulses
    #[arg(long, default_value_t = 5, global = true)]
    pulse_interval_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List databases
    Databases,
    /// Create a database
    Create {
        /// Database name
        name: String,
    },
    /// Check whether a database exists
    Exists {
        /// Database name
        name: String,
    },
    /// Print the schema of a database
    Schema {
        /// Database name
        database: String,
    },
    /// Run one query
    Query {
        /// Database name
        database: String,
        /// Query kind (match, insert, update, delete, define, undefine)
        #[arg(value_parser = parse_query_kind)]
        kind: QueryKind,
        /// Query text
        query: String,
        /// Output format (table, json, jsonl)
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },
    /// List entity types
    Entities {
        database: String,
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },
    /// List relation types
    Relations {
        database: String,
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },
    /// List attribute types
    Attributes {
        database: String,
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },
    /// Start interactive shell
    Shell {
        /// Database to open
        database: String,
    },
}

fn parse_query_kind(s: &str) -> std::result::Result<QueryKind, ClientError> {
    s.parse()
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with query output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::new(cli.host, cli.port)
        .with_pulse_interval(Duration::from_secs(cli.pulse_interval_secs));
    config.validate().context("Invalid configuration")?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    match cli.command {
        Commands::Shell { database } => {
            let mut shell = shell::Shell::new(runtime, config, &database)?;
            shell.run()
        }
        command => runtime.block_on(run(command, config)),
    }
}

async fn connect(config: ClientConfig) -> Result<Client> {
    let endpoint = config.endpoint();
    Client::connect(config)
        .await
        .with_context(|| format!("Failed to connect to {}", endpoint))
}

async fn run(command: Commands, config: ClientConfig) -> Result<()> {
    let client = connect(config).await?;

    match command {
        Commands::Databases => {
            for name in client.databases().await.context("Failed to list databases")? {
                println!("{}", name);
            }
        }

        Commands::Create { name } => {
            client
                .create_database(&name)
                .await
                .context("Failed to create database")?;
            println!("Database created: {}", name);
        }

        Commands::Exists { name } => {
            let exists = client
                .contains_database(&name)
                .await
                .context("Failed to check database")?;
            println!("{}", exists);
        }

        Commands::Schema { database } => {
            open(&client, &database).await?;
            let schema = client.schema().await;
            close(&client).await;
            println!("{}", schema.context("Failed to read schema")?);
        }

        Commands::Query {
            database,
            kind,
            query,
            output,
        } => {
            open(&client, &database).await?;
            let records = client.execute(&query, kind).await;
            close(&client).await;

            let records = records.context("Query execution failed")?;
            print_records(&records, output)?;
            if kind.requires_commit() && matches!(output, OutputFormat::Table) {
                println!("✓ {} committed", kind);
            }
        }

        Commands::Entities { database, output } => {
            open(&client, &database).await?;
            let records = client.all_entities().await;
            close(&client).await;
            print_records(&records.context("Failed to list entity types")?, output)?;
        }

        Commands::Relations { database, output } => {
            open(&client, &database).await?;
            let records = client.all_relations().await;
            close(&client).await;
            print_records(&records.context("Failed to list relation types")?, output)?;
        }

        Commands::Attributes { database, output } => {
            open(&client, &database).await?;
            let records = client.all_attributes().await;
            close(&client).await;
            print_records(&records.context("Failed to list attribute types")?, output)?;
        }

        Commands::Shell { .. } => {
            return Err(anyhow::anyhow!("The shell runs on its own loop"));
        }
    }

    Ok(())
}

async fn open(client: &Client, database: &str) -> Result<()> {
    client
        .open_database(database)
        .await
        .with_context(|| format!("Failed to open database '{}'", database))?;
    Ok(())
}

/// Close the session; a failure here does not hide the command's own result
async fn close(client: &Client) {
    if let Err(e) = client.close_database().await {
        warn!(error = %e, "Failed to close session");
    }
}

pub fn print_records(records: &[ConceptMap], output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Table => {
            println!("{}", table::format_records_table(records));
            println!();
            println!("Count: {}", records.len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(records)?);
        }
        OutputFormat::Jsonl => {
            for record in records {
                println!("{}", serde_json::to_string(record)?);
            }
        }
    }
    Ok(())
}
