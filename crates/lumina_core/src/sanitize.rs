//! Recovery of structured data from model responses.
//!
//! Generation backends are asked for JSON but reply with prose wrappers,
//! markdown fences, and mid-token truncation when output limits are hit. This
//! module repairs the common failure shapes instead of failing the slide.

use serde::de::DeserializeOwned;

/// Parse model output into a typed value, repairing common damage first.
///
/// The input is rejected outright when it is empty or one of the literal
/// strings `undefined` or `null` that chat backends emit for absent values.
/// A markdown code fence is stripped, then the text is parsed as-is. If that
/// fails, a repair pass balances quotes and brackets and drops trailing
/// commas before one re-parse. Unrecoverable input yields `fallback`.
///
/// # Examples
///
/// ```
/// use lumina_core::parse_or_fallback;
/// use serde_json::{json, Value};
///
/// let truncated = r#"{"title": "Ports", "points": ["a", "b","#;
/// let value: Value = parse_or_fallback(truncated, json!({}));
/// assert_eq!(value["title"], "Ports");
/// ```
pub fn parse_or_fallback<T: DeserializeOwned>(raw: &str, fallback: T) -> T {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "undefined" || trimmed == "null" {
        return fallback;
    }

    let cleaned = strip_code_fence(trimmed);
    if let Ok(value) = serde_json::from_str(cleaned) {
        return value;
    }

    let repaired = strip_trailing_commas(&close_open_brackets(&balance_quotes(cleaned)));
    match serde_json::from_str(&repaired) {
        Ok(value) => value,
        Err(e) => {
            let preview: String = cleaned.chars().take(200).collect();
            tracing::warn!("Discarding unrecoverable JSON ({}): {}", e, preview);
            fallback
        }
    }
}

/// Remove a surrounding markdown code fence.
///
/// A missing closing fence is tolerated so truncated responses still yield
/// their body.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.trim_start();
    match rest.strip_suffix("```") {
        Some(body) => body.trim_end(),
        None => rest,
    }
}

/// Close a string literal left open by truncation.
///
/// An odd count of unescaped quotes means the text ends inside a string. A
/// trailing backslash is dropped first so the appended quote is not escaped.
fn balance_quotes(text: &str) -> String {
    let mut count = 0usize;
    let mut escape_next = false;
    for c in text.chars() {
        if escape_next {
            escape_next = false;
            continue;
        }
        if c == '\\' {
            escape_next = true;
            continue;
        }
        if c == '"' {
            count += 1;
        }
    }
    if count % 2 == 0 {
        return text.to_string();
    }
    let mut repaired = text.to_string();
    if repaired.ends_with('\\') {
        repaired.pop();
    }
    repaired.push('"');
    repaired
}

/// Append closers for every `{` or `[` still open outside string literals.
fn close_open_brackets(text: &str) -> String {
    let mut stack: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escape_next = false;
    for c in text.chars() {
        if in_string {
            if escape_next {
                escape_next = false;
            } else if c == '\\' {
                escape_next = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' | '[' => stack.push(c),
            '}' => {
                if stack.last() == Some(&'{') {
                    stack.pop();
                }
            }
            ']' => {
                if stack.last() == Some(&'[') {
                    stack.pop();
                }
            }
            _ => {}
        }
    }
    let mut out = String::from(text);
    while let Some(open) = stack.pop() {
        out.push(if open == '{' { '}' } else { ']' });
    }
    out
}

/// Drop commas that directly precede a `}` or `]` outside string literals.
fn strip_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escape_next = false;
    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            if escape_next {
                escape_next = false;
            } else if c == '\\' {
                escape_next = true;
            } else if c == '"' {
                in_string = false;
            }
            out.push(c);
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' => {
                let mut j = i + 1;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                if !matches!(chars.get(j), Some('}') | Some(']')) {
                    out.push(c);
                }
            }
            _ => out.push(c),
        }
    }
    out
}
