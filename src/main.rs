use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use pandoc_preview::viewer::print::{print_notices, print_surfaces};
use pandoc_preview::viewer::terminal::Pager;
use pandoc_preview::{check_tool_availability, Config, PandocConverter, Previewer, Session};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "pandoc-preview",
    version,
    about = "Preview a document as Markdown in a read-only pane, converted by pandoc"
)]
struct Cli {
    /// JSON config file (default: <config dir>/pandoc-preview/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Converter program to run instead of the configured one
    #[arg(long, global = true, env = "PANDOC_PREVIEW_PROGRAM")]
    pandoc: Option<String>,

    /// Write the preview to stdout instead of opening the pager
    #[arg(long, global = true)]
    print: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Preview the active document
    Current {
        /// Backing file of the active document; absent means unsaved
        #[arg(long, env = "PANDOC_PREVIEW_DOCUMENT")]
        document: Option<PathBuf>,
    },
    /// Preview the file at PATH
    File { path: String },
    /// Check that the converter can be found
    Health,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

fn setup_logging(level: LogLevel) {
    let filter = match level {
        LogLevel::Error => log::LevelFilter::Error,
        LogLevel::Warn => log::LevelFilter::Warn,
        LogLevel::Info => log::LevelFilter::Info,
        LogLevel::Debug => log::LevelFilter::Debug,
    };
    env_logger::Builder::new().filter_level(filter).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.log_level);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())
        .context("loading configuration")?
        .with_program(cli.pandoc);

    let previewer = Previewer::new(PandocConverter::from_config(&config.converter));
    let (session, outcome, label) = match cli.command {
        Commands::Health => {
            let report = check_tool_availability(&config.converter.program);
            println!("{report}");
            return Ok(if report.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE });
        }
        Commands::Current { document } => {
            let document = document.filter(|p| !p.as_os_str().is_empty());
            let label = document
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "[No Name]".to_string());
            let mut session = Session::new(document);
            let outcome = previewer.preview_active_document(&mut session);
            (session, outcome, label)
        }
        Commands::File { path } => {
            let mut session = Session::new(None);
            let outcome = previewer.preview_file(&mut session, &path);
            (session, outcome, path)
        }
    };

    print_notices(&session, &mut io::stderr().lock()).context("writing notices")?;
    if outcome.is_err() {
        return Ok(ExitCode::FAILURE);
    }

    if cli.print || !io::stdout().is_terminal() {
        print_surfaces(&session, &mut io::stdout().lock()).context("writing preview")?;
    } else {
        Pager::new(&session, &config.viewer, label)
            .run()
            .context("running pager")?;
    }
    Ok(ExitCode::SUCCESS)
}
