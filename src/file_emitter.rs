use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use proc_macro2::TokenStream;
use quote::quote;
use std::path::{Path, PathBuf};
use std::{fs, io, process};
use tracing::{debug, warn};

/// `<stem><output_suffix>.<output_extension>`, next to the database unless
/// an output directory is configured.
pub fn output_path(database: &Path, config: &GeneratorConfig) -> Result<PathBuf, GeneratorError> {
    let stem = database.file_stem().ok_or_else(|| GeneratorError::Write {
        path: database.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "database path has no file name"),
    })?;

    let file_name = format!(
        "{}{}.{}",
        stem.to_string_lossy(),
        config.output_suffix,
        config.output_extension
    );

    let dir = match &config.output_dir {
        Some(dir) => dir.as_path(),
        None => database.parent().unwrap_or_else(|| Path::new("")),
    };

    Ok(dir.join(file_name))
}

pub fn generate_header(database: &Path) -> TokenStream {
    let database = database.display().to_string();

    quote! {
        pub const DATABASE_PATH: &str = #database;

        pub fn open_connection() -> rusqlite::Result<rusqlite::Connection> {
            rusqlite::Connection::open(DATABASE_PATH)
        }
    }
}

pub fn generate_footer() -> TokenStream {
    quote! {
        pub fn close_connection(conn: rusqlite::Connection) -> rusqlite::Result<()> {
            conn.close().map_err(|(_, error)| error)
        }
    }
}

/// Full text of the output file: marker comment, header, table blocks in
/// the given order, footer.
pub fn render_source(database: &Path, blocks: &[TokenStream]) -> String {
    let mut source = format!(
        "// @generated by crud-generate from {:?}. Do not edit by hand.\n\n",
        database.display().to_string()
    );

    source.push_str(&generate_header(database).to_string());
    source.push_str("\n\n");

    for block in blocks {
        source.push_str(&block.to_string());
        source.push_str("\n\n");
    }

    source.push_str(&generate_footer().to_string());
    source.push('\n');

    source
}

/// Truncates and overwrites `path`.
pub fn write_output(path: &Path, source: &str) -> Result<(), GeneratorError> {
    fs::write(path, source).map_err(|source| GeneratorError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs rustfmt over the written file. Failures leave the file as written.
pub fn format_output(path: &Path) {
    let result = process::Command::new("rustfmt")
        .arg("--edition")
        .arg("2021")
        .arg(path)
        .output();

    match result {
        Ok(output) if output.status.success() => {
            debug!(output = %path.display(), "formatted with rustfmt");
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                output = %path.display(),
                status = %output.status,
                stderr = %stderr.trim(),
                "rustfmt failed, keeping unformatted output"
            );
        }
        Err(error) => {
            warn!(error = %error, "rustfmt unavailable, keeping unformatted output");
        }
    }
}
