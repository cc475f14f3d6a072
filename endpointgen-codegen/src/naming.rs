//! Identifier synthesis and naming helpers.
//!
//! Every helper here is a pure function of its arguments. The generators
//! call them to turn model identifiers such as `us-east-1` or `aws-cn` into
//! Rust symbols and literals.

use endpointgen_model::Partition;
use proc_macro2::Literal;
use std::collections::BTreeSet;

/// Converts an arbitrary identifier into a symbol.
///
/// Title-cases the input, then drops every character that is not an ASCII
/// letter or digit. Words are broken by ASCII punctuation and whitespace;
/// `_` and non-ASCII letters stay inside their word. So `us-east-1` becomes
/// `UsEast1` while `data_iot` becomes `Dataiot`. The first kept character is
/// always upper-cased, which keeps the conversion idempotent.
#[must_use]
pub fn to_symbol(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;

    for c in raw.chars() {
        if is_word_break(c) {
            in_word = false;
            continue;
        }
        if c.is_ascii_alphanumeric() {
            if in_word && !out.is_empty() {
                out.push(c);
            } else {
                out.push(c.to_ascii_uppercase());
            }
        }
        in_word = true;
    }

    out
}

fn is_word_break(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else {
        c.is_whitespace()
    }
}

/// Renders a value as an escaped Rust string literal.
#[must_use]
pub fn quote_string(value: &str) -> String {
    Literal::string(value).to_string()
}

/// Flattens text onto a single line for use inside a `//` comment.
#[must_use]
pub fn comment_text(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns the symbol of a region constant, namespaced by its partition.
#[must_use]
pub fn region_const_name(partition_id: &str, region_id: &str) -> String {
    format!("{}{}", to_symbol(partition_id), to_symbol(region_id))
}

/// Returns the name of a partition's public accessor function.
#[must_use]
pub fn partition_getter(id: &str) -> String {
    format!("{}Partition", to_symbol(id))
}

/// Returns the name of a partition's private storage static.
#[must_use]
pub fn partition_var_name(id: &str) -> String {
    partition_getter(id).to_lowercase()
}

/// Lists partition display names as an English enumeration.
///
/// `A`, `A and B`, `A, B, and C`.
#[must_use]
pub fn list_partition_names(partitions: &[Partition]) -> String {
    match partitions {
        [] => String::new(),
        [only] => only.name.clone(),
        [first, second] => format!("{} and {}", first.name, second.name),
        [init @ .., last] => {
            let mut names: Vec<String> = init.iter().map(|p| p.name.clone()).collect();
            names.push(format!("and {}", last.name));
            names.join(", ")
        }
    }
}

/// Collects the distinct service identifiers of every partition.
#[must_use]
pub fn service_set(partitions: &[Partition]) -> BTreeSet<&str> {
    partitions
        .iter()
        .flat_map(|p| p.services.keys())
        .map(String::as_str)
        .collect()
}
