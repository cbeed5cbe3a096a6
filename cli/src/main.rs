mod error_formatter;
mod formatter;
mod interactive;
mod server;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use formatter::{DocumentStats, Formatter};
use labbook::{Engine, EvaluationOptions, Grammar, ResourceLimits, DOCUMENT_EXTENSION};
use std::fs;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "labbook")]
#[command(about = "Measurements in, uncertainties out.")]
#[command(
    long_about = "LabBook is a line-oriented notebook for physical measurements.\nDefine values with their uncertainty, derive new ones from them, and get results rounded to the precision the uncertainty supports."
)]
#[command(version)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct EvalArgs {
    /// Expression grammar: legacy (first-operator split) or standard (precedence, parentheses, ^)
    #[arg(short, long, default_value_t = Grammar::Legacy)]
    grammar: Grammar,
    /// Maximum nesting depth of a single expression
    #[arg(long)]
    max_depth: Option<usize>,
}

impl EvalArgs {
    fn engine(&self) -> Engine {
        let mut limits = ResourceLimits::default();
        if let Some(depth) = self.max_depth {
            limits.max_expression_depth = depth;
        }
        Engine::with_options(
            EvaluationOptions::default()
                .with_grammar(self.grammar)
                .with_limits(limits),
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a notebook and print every bound name
    ///
    /// Lines that cannot be evaluated are left out of the output. Use
    /// `labbook check` to see why.
    Run {
        /// Notebook to evaluate, or - for stdin
        file: PathBuf,
        #[command(flatten)]
        eval: EvalArgs,
        /// Output `name = value ± uncertainty` lines only (for piping to other tools)
        #[arg(short = 'r', long, conflicts_with = "json")]
        raw: bool,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Report dropped lines and numbers read as 0
    ///
    /// Exits with status 1 when any line was dropped.
    Check {
        /// Notebook to check, or - for stdin
        file: PathBuf,
        #[command(flatten)]
        eval: EvalArgs,
    },
    /// List all notebooks under a directory
    List {
        /// Directory to search for .lab files
        #[arg(default_value = ".")]
        root: PathBuf,
        #[command(flatten)]
        eval: EvalArgs,
    },
    /// Create a new notebook from the starter template
    New {
        /// Path of the notebook; .lab is appended when missing
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Edit a notebook line by line, re-evaluating after every entry
    Repl {
        /// Notebook to start from
        #[arg(short, long)]
        file: Option<PathBuf>,
        #[command(flatten)]
        eval: EvalArgs,
    },
    /// Start HTTP REST API server (default: localhost:3000)
    ///
    /// API: POST /evaluate with {text, grammar}
    Server {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port number to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Maximum nesting depth of a single expression
        #[arg(long)]
        max_depth: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let result = match cli.command {
        Commands::Run {
            file,
            eval,
            raw,
            json,
        } => run_command(&file, &eval, raw, json),
        Commands::Check { file, eval } => check_command(&file, &eval),
        Commands::List { root, eval } => list_command(&root, &eval),
        Commands::New { path, force } => new_command(path, force),
        Commands::Repl { file, eval } => repl_command(file.as_deref(), &eval),
        Commands::Server {
            host,
            port,
            max_depth,
        } => server_command(&host, port, max_depth),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(cli: &Cli) {
    let default_filter = match (&cli.command, cli.verbose) {
        (Commands::Server { .. }, 0) => "labbook=info,tower_http=info",
        (_, 0) => "labbook=warn",
        (_, 1) => "labbook=info",
        (_, 2) => "labbook=debug",
        _ => "labbook=trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_command(file: &Path, eval: &EvalArgs, raw: bool, json: bool) -> Result<()> {
    let engine = eval.engine();
    let document = load_document(&engine, file)?;
    let symbols = engine.evaluate(&document);

    let formatter = Formatter::default();
    if json {
        println!("{}", formatter.format_json(&symbols)?);
    } else {
        print!("{}", formatter.format_symbols(&symbols, raw));
    }

    Ok(())
}

fn check_command(file: &Path, eval: &EvalArgs) -> Result<()> {
    let engine = eval.engine();
    let document = load_document(&engine, file)?;
    let evaluation = engine.evaluate_lines(&document);

    let source_id = file.display().to_string();
    let color = std::io::stdout().is_terminal();
    print!(
        "{}",
        error_formatter::format_diagnostics(&source_id, &document, &evaluation, color)
    );

    let dropped = evaluation.dropped().count();
    println!(
        "{}: {} bound, {} dropped, {} warning(s)",
        source_id,
        evaluation.symbols.len(),
        dropped,
        evaluation.warnings.len()
    );

    if dropped > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn list_command(root: &Path, eval: &EvalArgs) -> Result<()> {
    let engine = eval.engine();

    println!("Loading notebooks from {}...", root.display());

    let mut stats = Vec::new();
    for path in find_documents(root)? {
        let document = load_document(&engine, &path)?;
        let evaluation = engine.evaluate_lines(&document);
        stats.push(DocumentStats::from_evaluation(
            path.display().to_string(),
            &evaluation,
        ));
    }

    println!();
    let formatter = Formatter::default();
    print!("{}", formatter.format_workspace_summary(&stats));

    Ok(())
}

fn new_command(path: PathBuf, force: bool) -> Result<()> {
    let path = with_document_extension(path);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    fs::write(&path, labbook::EXAMPLE_DOCUMENT)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Created {}", path.display());

    Ok(())
}

fn repl_command(file: Option<&Path>, eval: &EvalArgs) -> Result<()> {
    let engine = eval.engine();
    let document = match file {
        Some(path) => load_document(&engine, path)?,
        None => String::new(),
    };

    interactive::run_repl(&engine, document)
}

fn server_command(host: &str, port: u16, max_depth: Option<usize>) -> Result<()> {
    #[cfg(feature = "server")]
    {
        use tokio::runtime::Runtime;

        let mut limits = ResourceLimits::default();
        if let Some(depth) = max_depth {
            limits.max_expression_depth = depth;
        }

        let rt = Runtime::new()?;
        rt.block_on(server::http::start_server(limits, host, port))?;
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (host, port, max_depth);
        eprintln!("Error: Server feature not enabled");
        eprintln!("Recompile with: cargo build --features server");
        std::process::exit(1);
    }

    Ok(())
}

/// Read a notebook from a file, or from stdin when the path is `-`
fn load_document(engine: &Engine, path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut document = String::new();
        std::io::stdin()
            .read_to_string(&mut document)
            .context("Failed to read notebook from stdin")?;
        engine.check_document_size(&document)?;
        return Ok(document);
    }

    Ok(engine.read_document(path)?)
}

/// Append the notebook extension unless the path already carries it
pub(crate) fn with_document_extension(path: PathBuf) -> PathBuf {
    if path.extension().and_then(|s| s.to_str()) == Some(DOCUMENT_EXTENSION) {
        path
    } else {
        let mut name = path.into_os_string();
        name.push(".");
        name.push(DOCUMENT_EXTENSION);
        PathBuf::from(name)
    }
}

/// All .lab files under `root`, sorted by path
fn find_documents(root: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.path().extension().and_then(|s| s.to_str()) == Some(DOCUMENT_EXTENSION)
        {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}
