mod document;
mod error;
mod paths;

use std::fs::File;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use log::{LevelFilter, info};
use multirow_lib::attributes::FormBinding;
use multirow_lib::options::ButtonPosition;
use simplelog::{Config, WriteLogger};

use crate::document::Document;
use crate::error::CliError;

/// Render repeatable form-row widgets and their client bootstrap.
#[derive(Debug, Parser)]
#[command(name = "multirow", version)]
struct Cli {
    /// Log at trace level instead of debug.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log file path (defaults to the platform cache directory).
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a document and print the result.
    Render {
        /// Input document (JSON).
        document: PathBuf,
        /// What to print.
        #[arg(short, long, value_enum, default_value_t = Output::All)]
        output: Output,
    },
    /// Resolve a widget definition and print the effective options.
    Check {
        /// Input document (JSON).
        document: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    All,
    Markup,
    Payload,
    Scripts,
}

fn init_logging(cli: &Cli) -> Result<(), CliError> {
    let path = match &cli.log_file {
        Some(path) => path.clone(),
        None => match paths::log_file() {
            Some(path) => path,
            None => return Ok(()),
        },
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| CliError::Logging(e.to_string()))?;
    }
    if cli.log_file.is_none() {
        paths::rotate_logs(&path);
    }

    let file = File::create(&path).map_err(|e| CliError::Logging(e.to_string()))?;
    let level = if cli.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    WriteLogger::init(level, Config::default(), file).map_err(|e| CliError::Logging(e.to_string()))
}

fn render(path: &Path, output: Output) -> Result<(), CliError> {
    let document = Document::load(path)?;
    let widget = document.widget.build()?;
    let mut scripts = document.scripts;
    let binding = document.validation.as_ref().map(|b| b as &dyn FormBinding);

    info!("Rendering {} from {}", widget.id(), path.display());
    let rendered = widget.render(&document.rows, &mut scripts, binding)?;

    match output {
        Output::Markup => println!("{}", rendered.markup),
        Output::Payload => println!("{}", serde_json::to_string_pretty(&rendered.config)?),
        Output::Scripts => println!("{}", serde_json::to_string_pretty(&scripts)?),
        Output::All => {
            let all = serde_json::json!({
                "markup": rendered.markup,
                "payload": rendered.config,
                "scripts": scripts,
            });
            println!("{}", serde_json::to_string_pretty(&all)?);
        }
    }
    Ok(())
}

fn check(path: &Path) -> Result<(), CliError> {
    let document = Document::load(path)?;
    let widget = document.widget.build()?;
    let options = widget.options();

    let positions: Vec<&str> = options
        .placement
        .iter()
        .map(|p| match p {
            ButtonPosition::Header => "header",
            ButtonPosition::Footer => "footer",
            ButtonPosition::Row => "row",
            ButtonPosition::RowBegin => "row-begin",
        })
        .collect();
    let max = if options.rows.is_unbounded() {
        "unbounded".to_string()
    } else {
        options.rows.max().to_string()
    };

    println!("id:              {}", widget.id());
    println!("name:            {}", widget.name());
    println!("input id:        {}", widget.input_id());
    println!("min:             {}", options.rows.min());
    println!("max:             {}", max);
    println!("allow empty:     {}", options.rows.allow_empty_list());
    println!("add button:      {}", positions.join(", "));
    println!("sortable:        {}", options.sortable);
    for column in widget.columns() {
        println!(
            "column:          {} ({}{})",
            column.name,
            column.kind.tag(),
            column
                .model
                .as_deref()
                .map(|m| format!(", model {}", m))
                .unwrap_or_default()
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    init_logging(&cli)?;
    match cli.command {
        Command::Render { document, output } => render(&document, output),
        Command::Check { document } => check(&document),
    }
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
