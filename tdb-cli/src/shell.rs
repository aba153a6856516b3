/// Interactive query shell
///
/// Keeps one data session open for the lifetime of the shell, so the
/// keep-alive heartbeat runs on the background runtime while the editor
/// waits for input.

use crate::OutputFormat;
use anyhow::{Context, Result};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{
    completion::{Completer, Pair},
    highlight::Highlighter,
    hint::Hinter,
    history::FileHistory,
    validate::Validator,
    Helper,
};
use std::path::PathBuf;
use tdb_client::{Client, ClientConfig, QueryKind};
use tokio::runtime::Runtime;
use tracing::warn;

const META_COMMANDS: &[&str] = &[
    ".help", ".exit", ".quit", ".kind", ".schema", ".entities", ".relations", ".attributes",
    ".format", ".clear",
];

const KEYWORDS: &[&str] = &[
    "match", "get", "insert", "delete", "define", "undefine", "isa", "sub", "has", "owns",
    "plays", "relates", "entity", "relation", "attribute", "value", "limit", "sort",
];

/// Autocomplete helper for TypeQL keywords and meta-commands
#[derive(Clone)]
struct TdbCompleter;

impl TdbCompleter {
    fn candidates(words: &[&str], prefix: &str) -> Vec<Pair> {
        words
            .iter()
            .filter(|w| w.starts_with(prefix))
            .map(|w| Pair {
                display: w.to_string(),
                replacement: w.to_string(),
            })
            .collect()
    }
}

impl Completer for TdbCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_prefix = &line[..pos];

        if line_prefix.starts_with('.') && !line_prefix.contains(' ') {
            return Ok((0, Self::candidates(META_COMMANDS, line_prefix)));
        }

        let word_start = line_prefix
            .rfind(|c: char| c.is_whitespace() || c == ';' || c == ',')
            .map(|i| i + 1)
            .unwrap_or(0);
        let word = &line_prefix[word_start..];
        if word.is_empty() || word.starts_with('$') {
            return Ok((word_start, Vec::new()));
        }

        Ok((word_start, Self::candidates(KEYWORDS, &word.to_lowercase())))
    }
}

impl Hinter for TdbCompleter {
    type Hint = String;
}

impl Highlighter for TdbCompleter {}

impl Validator for TdbCompleter {}

impl Helper for TdbCompleter {}

/// Interactive shell session state
pub struct Shell {
    runtime: Runtime,
    client: Client,
    database: String,
    editor: rustyline::Editor<TdbCompleter, FileHistory>,
    /// Kind applied to queries typed at the prompt
    kind: QueryKind,
    format: OutputFormat,
}

impl Shell {
    /// Connect and open a data session on `database`
    pub fn new(runtime: Runtime, config: ClientConfig, database: &str) -> Result<Self> {
        let endpoint = config.endpoint();
        let client = runtime
            .block_on(Client::connect(config))
            .with_context(|| format!("Failed to connect to {}", endpoint))?;
        runtime
            .block_on(client.open_database(database))
            .with_context(|| format!("Failed to open database '{}'", database))?;

        let mut editor = rustyline::Editor::new().context("Failed to initialize line editor")?;
        editor.set_helper(Some(TdbCompleter));

        let history = history_path();
        if history.exists() {
            let _ = editor.load_history(&history);
        }

        Ok(Self {
            runtime,
            client,
            database: database.to_string(),
            editor,
            kind: QueryKind::Match,
            format: OutputFormat::Table,
        })
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> Result<()> {
        self.print_welcome();

        let mut buffer = String::new();

        loop {
            let prompt = if buffer.is_empty() {
                format!("{} ", format!("{}[{}]>", self.database, self.kind).green().bold())
            } else {
                format!("{}    ", "...>".dimmed())
            };

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() && buffer.is_empty() {
                        continue;
                    }
                    if buffer.is_empty() && (line == ".exit" || line == ".quit") {
                        break;
                    }

                    if !buffer.is_empty() {
                        buffer.push('\n');
                    }
                    buffer.push_str(line);

                    // Meta-commands are single line; queries end with ';'
                    if buffer.starts_with('.') || buffer.trim_end().ends_with(';') {
                        let input = std::mem::take(&mut buffer);
                        let _ = self.editor.add_history_entry(input.as_str());

                        if let Err(e) = self.execute(input.trim()) {
                            eprintln!("{} {:#}", "Error:".red().bold(), e);
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    buffer.clear();
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("Error reading line: {}", err);
                    break;
                }
            }
        }

        if let Err(e) = self.runtime.block_on(self.client.close_database()) {
            warn!(error = %e, "Failed to close session");
        }
        println!("{}", "Bye".green().bold());

        self.editor
            .save_history(&history_path())
            .context("Failed to save command history")?;
        Ok(())
    }

    fn execute(&mut self, input: &str) -> Result<()> {
        if input.starts_with('.') {
            self.execute_meta_command(input)
        } else {
            self.execute_query(input)
        }
    }

    fn execute_meta_command(&mut self, command: &str) -> Result<()> {
        let parts: Vec<&str> = command.split_whitespace().collect();
        let cmd = parts.first().copied().unwrap_or("");

        match cmd {
            ".help" => self.show_help(),
            ".kind" => match parts.get(1) {
                None => {
                    println!("Usage: .kind <match|insert|update|delete|define|undefine>");
                    println!("Current kind: {}", self.kind);
                }
                Some(kind) => {
                    self.kind = kind.parse()?;
                    println!("Query kind set to: {}", self.kind);
                }
            },
            ".format" => match parts.get(1).map(|f| f.to_lowercase()) {
                None => {
                    println!("Usage: .format <table|json|jsonl>");
                    println!("Current format: {:?}", self.format);
                }
                Some(format) => {
                    self.format = match format.as_str() {
                        "table" => OutputFormat::Table,
                        "json" => OutputFormat::Json,
                        "jsonl" => OutputFormat::Jsonl,
                        _ => {
                            println!("{} {}. Use: table, json, or jsonl", "Invalid format:".red(), format);
                            return Ok(());
                        }
                    };
                    println!("Output format set to: {:?}", self.format);
                }
            },
            ".schema" => {
                let schema = self.runtime.block_on(self.client.schema())?;
                println!("{}", schema);
            }
            ".entities" => {
                let records = self.runtime.block_on(self.client.all_entities())?;
                crate::print_records(&records, self.format)?;
            }
            ".relations" => {
                let records = self.runtime.block_on(self.client.all_relations())?;
                crate::print_records(&records, self.format)?;
            }
            ".attributes" => match parts.get(1) {
                None => {
                    let records = self.runtime.block_on(self.client.all_attributes())?;
                    crate::print_records(&records, self.format)?;
                }
                Some(type_name) => {
                    let attributes = self.runtime.block_on(self.client.attributes_of(type_name))?;
                    if attributes.is_empty() {
                        println!("No attributes");
                    }
                    for (label, attribute) in attributes {
                        match attribute.value_type {
                            Some(value_type) => println!("  {} ({:?})", label, value_type),
                            None => println!("  {}", label),
                        }
                    }
                }
            },
            ".clear" => print!("\x1B[2J\x1B[1;1H"),
            _ => {
                println!("{} {}", "Unknown command:".yellow(), cmd);
                println!("Type .help for available commands");
            }
        }

        Ok(())
    }

    fn execute_query(&mut self, query: &str) -> Result<()> {
        let start = std::time::Instant::now();

        let records = self
            .runtime
            .block_on(self.client.execute(query, self.kind))
            .context("Query execution failed")?;

        let elapsed = start.elapsed();

        crate::print_records(&records, self.format)?;
        if self.kind.requires_commit() {
            println!("{}", format!("✓ {} committed", self.kind).green());
        }
        println!(
            "{}",
            format!(
                "{} answer{} ({:.2}ms)",
                records.len(),
                if records.len() == 1 { "" } else { "s" },
                elapsed.as_secs_f64() * 1000.0
            )
            .dimmed()
        );

        Ok(())
    }

    fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold());
        println!("\n  {}", "Meta-commands:".cyan());
        println!("    .help                Show this help message");
        println!("    .exit, .quit         Exit the shell");
        println!("    .kind <kind>         Set the query kind (match|insert|update|delete|define|undefine)");
        println!("    .schema              Print the database schema");
        println!("    .entities            List entity types");
        println!("    .relations           List relation types");
        println!("    .attributes [type]   List attribute types, or those owned by a type");
        println!("    .format <type>       Set output format (table|json|jsonl)");
        println!("    .clear               Clear the screen");

        println!("\n  {}", "Queries:".cyan());
        println!("    .kind match");
        println!("    match $x isa person; get $x;");
        println!("    .kind insert");
        println!("    insert $x isa person, has name \"Alice\";");
        println!("\n  Queries continue over several lines until one ends with ';'.");
        println!("  Ctrl+C cancels the current input, Ctrl+D exits.");
        println!();
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "TypeDB shell".cyan().bold());
        println!("  {}: {}", "Database".cyan(), self.database);
        println!("  {}: {}", "Server".cyan(), self.client.config().endpoint());
        println!(
            "  {} Type {} for commands, end queries with {}",
            "Tip:".yellow().bold(),
            ".help".bold(),
            ";".bold()
        );
        println!();
    }
}

fn history_path() -> PathBuf {
    dirs::home_dir()
        .map(|p| p.join(".tdb_history"))
        .unwrap_or_else(|| ".tdb_history".into())
}
