//! Turns catalog names into Rust symbols and SQL identifiers.
//!
//! Table and column names come straight from the database and are treated as
//! untrusted: a name used as a Rust symbol is reduced to ASCII identifier
//! characters, a name used inside SQL text is double-quoted.

use heck::{ToSnakeCase, ToUpperCamelCase};
use proc_macro2::Ident;
use quote::format_ident;
use std::collections::HashSet;

const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "try",
    "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

pub fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Reduces `raw` to a valid, non-keyword Rust identifier.
///
/// Characters outside `[A-Za-z0-9_]` become `_`, a leading digit gets a `_`
/// prefix and keywords get a `_` suffix. Names with nothing usable left are
/// replaced by `fallback`.
pub fn sanitize_identifier(raw: &str, fallback: &str) -> String {
    let mut identifier: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if identifier.chars().all(|c| c == '_') && identifier.len() < 2 {
        identifier = fallback.to_string();
    }

    if identifier.starts_with(|c: char| c.is_ascii_digit()) {
        identifier.insert(0, '_');
    }

    if is_rust_keyword(&identifier) {
        identifier.push('_');
    }

    identifier
}

/// Struct base name: sanitized table name with its first letter uppercased,
/// the remainder unchanged (`user_accounts` -> `User_accounts`).
pub fn struct_base_name(table_name: &str) -> String {
    let sanitized = sanitize_identifier(table_name, "table");
    let mut chars = sanitized.chars();

    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

pub fn variant_name(column_name: &str) -> String {
    sanitize_identifier(&column_name.to_upper_camel_case(), "Column")
}

pub fn parameter_name(column_name: &str) -> String {
    sanitize_identifier(&column_name.to_snake_case(), "value")
}

/// `name` as an SQL identifier: wrapped in double quotes, embedded quotes doubled.
pub fn quote_sql_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

pub fn ident(name: &str) -> Ident {
    format_ident!("{}", name)
}

/// Hands out names that are unique within one scope by appending a counter.
#[derive(Debug, Default)]
pub struct UniqueNames {
    taken: HashSet<String>,
    separator: &'static str,
}

impl UniqueNames {
    pub fn new(separator: &'static str) -> Self {
        Self {
            taken: HashSet::new(),
            separator,
        }
    }

    /// Reserves a name up front so later claims never return it.
    pub fn reserve(&mut self, name: &str) {
        self.taken.insert(name.to_string());
    }

    pub fn claim(&mut self, candidate: String) -> String {
        if self.taken.insert(candidate.clone()) {
            return candidate;
        }

        let mut counter = 2;
        loop {
            let numbered = format!("{}{}{}", candidate, self.separator, counter);
            if self.taken.insert(numbered.clone()) {
                return numbered;
            }
            counter += 1;
        }
    }
}
