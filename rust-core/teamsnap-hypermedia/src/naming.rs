// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Naming convention for discovered resource types.
//!
//! A collection linked under `rel` is registered as the type
//! `type_name_for_rel(rel)`: the rel is split on `_` and `-`, its last word is
//! singularized, and every word is capitalized (`"division_locations"` →
//! `"DivisionLocation"`). Item `type` discriminators are already singular and
//! are only camelized (`"division_location"` → `"DivisionLocation"`), so both
//! paths land on the same name.
//!
//! The same singular rule decides relation cardinality: a rel that is its own
//! singular form names a single object.

/// Type name for a collection linked under `rel`.
pub fn type_name_for_rel(rel: &str) -> String {
    let mut words: Vec<String> = split_words(rel).map(str::to_owned).collect();
    if let Some(last) = words.last_mut() {
        *last = singularize(last);
    }
    words.iter().map(|word| capitalize(word)).collect()
}

/// Type name for an item `type` discriminator.
pub fn type_name_for_discriminator(discriminator: &str) -> String {
    split_words(discriminator).map(capitalize).collect()
}

/// Returns `true` if `rel` names a single object rather than a list.
pub fn is_singular(rel: &str) -> bool {
    match split_words(rel).last() {
        Some(last) => singularize(last) == last,
        None => true,
    }
}

/// Singular form of one lowercase English word.
///
/// Covers the plural shapes the API emits: `-ies`, `-sses`, `-uses`, `-xes`,
/// `-ches`, `-shes`, and a plain `-s`. Words ending in `ss` or `us` are
/// already singular.
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    for suffix in ["sses", "uses", "xes", "ches", "shes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_owned();
        }
    }
    if word.ends_with("ss") || word.ends_with("us") {
        return word.to_owned();
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_owned(),
        _ => word.to_owned(),
    }
}

fn split_words(name: &str) -> impl Iterator<Item = &str> {
    name.split(['_', '-']).filter(|word| !word.is_empty())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
