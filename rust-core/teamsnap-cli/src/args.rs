// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//!
//! `name=value` argument parsing.
//!
//! Values that parse as JSON keep their JSON type (`team_id=1` is a number,
//! `active=true` a boolean); anything else is a string (`types=team,member`).

use serde_json::Value;
use teamsnap_client::Arguments;

/// Parse `name=value` pairs into operation arguments.
pub fn parse_pairs(pairs: &[String]) -> Result<Arguments, String> {
    pairs.iter().map(|pair| parse_pair(pair)).collect()
}

fn parse_pair(pair: &str) -> Result<(String, Value), String> {
    let (name, raw) = pair
        .split_once('=')
        .ok_or_else(|| format!("Expected name=value, got '{pair}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("Missing argument name in '{pair}'"));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()));
    Ok((name.to_owned(), value))
}

/// Parse an id given on the command line: numeric when it looks numeric.
pub fn parse_id(id: &str) -> Value {
    id.parse::<i64>().map_or_else(|_| Value::String(id.to_owned()), Value::from)
}
