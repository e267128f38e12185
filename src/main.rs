use clap::Parser;
use sqlite_crud_generator::{generate_crud_file, GeneratorConfig, GeneratorError};
use std::path::PathBuf;
use std::process;

const USAGE: &str =
    "Please specify the database file like so: crud-generate [example.sqlite3]";

#[derive(Parser, Debug)]
#[command(
    name = "crud-generate",
    about = "Generate rusqlite CRUD structs for every table of a SQLite database",
    version
)]
struct Cli {
    /// Path to the SQLite database file.
    database: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory for the generated file (defaults to the database's directory).
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Do not run rustfmt on the generated file.
    #[arg(long)]
    no_format: bool,

    /// Log filter, e.g. `info` or `sqlite_crud_generator=debug`.
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

fn exit_with(error: GeneratorError) -> ! {
    match &error {
        GeneratorError::Usage(message) => println!("{message}"),
        _ => eprintln!("error: {error}"),
    }
    process::exit(error.exit_code());
}

fn load_config(cli: &Cli) -> Result<GeneratorConfig, GeneratorError> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(dir) = &cli.output_dir {
        config.output_dir = Some(dir.clone());
    }
    if cli.no_format {
        config.rustfmt = false;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let Some(database) = cli.database.clone() else {
        exit_with(GeneratorError::Usage(USAGE.into()));
    };

    let config = load_config(&cli).unwrap_or_else(|e| exit_with(e));
    config.init_logging();

    match generate_crud_file(&database, &config).await {
        Ok(report) => println!(
            "CRUD structs for all tables in '{}' have been written to '{}'.",
            report.database.display(),
            report.output.display()
        ),
        Err(e) => exit_with(e),
    }
}
