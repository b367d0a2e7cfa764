//! Record-to-article transformation
//!
//! Maps one raw game record (an untyped JSON object) into a fixed-shape
//! [`Article`]. Missing fields never fail the transformation; only a record
//! that is not a JSON object does, and that surfaces as a per-record failure
//! in the driver rather than a fatal error.

use crate::core::json_type_name;
use crate::domain::{Article, MigrateError, Result, ARTICLE_AUTHOR};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static ID_FILTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_-]+").expect("invalid id filter pattern"));

/// Sanitize free text into a knowledge base article id
///
/// Lowercases, strips ASCII spaces, then removes every character outside
/// `[a-z0-9_-]`. The space-removal pass is redundant with the filter pass but
/// existing article ids were produced this way; keep both passes so ids
/// reproduce exactly.
pub fn sanitize_id(text: &str) -> String {
    let lowered = text.to_lowercase().replace(' ', "");
    ID_FILTER.replace_all(&lowered, "").into_owned()
}

/// First candidate key present in the record with a non-null value
///
/// Presence wins over truthiness: an explicit empty string or zero
/// short-circuits later fallbacks.
fn first_present<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| record.get(*key).filter(|v| !v.is_null()))
}

/// Render a scalar JSON value as text
///
/// Strings pass through, numbers and booleans use their natural form,
/// composite values render empty.
fn text_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Normalize a raw pattern ("pola") value into a list of trimmed tokens
///
/// A string splits on commas; an array stringifies element-wise. Empty
/// segments are dropped either way, and any other value type yields an empty
/// list. Idempotent on already-normalized lists.
pub fn normalize_patterns(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| text_value(item).trim().to_string())
            .filter(|p| !p.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// Transform one raw game record into an [`Article`]
///
/// # Errors
///
/// Returns [`MigrateError::InvalidRecord`] when the record is not a JSON
/// object. Missing fields fall back to empty defaults and never error.
pub fn to_article(record: &Value) -> Result<Article> {
    let map = record.as_object().ok_or_else(|| {
        MigrateError::InvalidRecord(format!(
            "expected a JSON object, got {}",
            json_type_name(record)
        ))
    })?;

    let provider = first_present(map, &["provider"])
        .map(text_value)
        .unwrap_or_default()
        .trim()
        .to_string();
    let name = first_present(map, &["name", "game_name", "game"])
        .map(text_value)
        .unwrap_or_default()
        .trim()
        .to_string();
    let rtp = first_present(map, &["rtp"]).map(text_value).unwrap_or_default();
    let jam = first_present(map, &["jam_gacor", "jam"])
        .map(text_value)
        .unwrap_or_default();
    let patterns = normalize_patterns(first_present(map, &["pola_main", "pola"]));
    let last_update = first_present(map, &["last_update", "updated_at"])
        .map(text_value)
        .unwrap_or_default();

    let id = sanitize_id(&format!("{provider}{name}"));
    let title = if provider.is_empty() && name.is_empty() {
        String::new()
    } else {
        format!("{} dari {}", name.to_uppercase(), provider)
            .trim()
            .to_string()
    };
    let content = format!(
        "Game ini memiliki RTP {rtp}%. Jam gacor: {jam}. Pola: [{}]",
        patterns.join(", ")
    );

    let mut tags = vec![provider.clone()];
    tags.extend(patterns.iter().take(2).cloned());

    Ok(Article {
        id,
        title,
        content,
        tags,
        category: provider,
        created_at: last_update,
        author: ARTICLE_AUTHOR.to_string(),
    })
}
