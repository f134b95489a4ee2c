//! Menu definition loading

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{MenuError, MenuResult};

use super::types::MenuDefinition;

/// Non-fatal warning about a definition file (e.g. an unknown key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionWarning {
    pub key: String,
    /// Dotted path of the ignored key, as reported while deserializing
    pub path: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load a TOML menu definition and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> MenuResult<(MenuDefinition, Vec<DefinitionWarning>)> {
    let content = fs::read_to_string(path)?;
    let (definition, warnings) = parse_with_warnings(&content, path)?;

    for warning in &warnings {
        warn!(
            key = %warning.key,
            file = %warning.file.display(),
            line = ?warning.line,
            suggestion = ?warning.suggestion,
            "unknown key in menu definition"
        );
    }

    Ok((definition, warnings))
}

/// Load a TOML menu definition, dropping warnings
pub fn load(path: &Path) -> MenuResult<MenuDefinition> {
    load_with_warnings(path).map(|(definition, _)| definition)
}

fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> MenuResult<(MenuDefinition, Vec<DefinitionWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let definition: MenuDefinition = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MenuError::InvalidDefinition {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    // Ignored keys arrive in document order, so the nth warning for a key
    // belongs to its nth assignment in the file.
    let mut seen: HashMap<String, usize> = HashMap::new();
    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            let occurrence = seen.entry(key.clone()).or_insert(0);
            let line = find_line_number(content, &key, *occurrence);
            *occurrence += 1;
            DefinitionWarning {
                line,
                suggestion: suggest_key(&key),
                key,
                path: path_str,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((definition, warnings))
}

/// Line (1-based) of the `occurrence`-th assignment whose key is exactly `key`
fn find_line_number(content: &str, key: &str, occurrence: usize) -> Option<usize> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| assigned_key(line) == Some(key))
        .nth(occurrence)
        .map(|(i, _)| i + 1)
}

fn assigned_key(line: &str) -> Option<&str> {
    let (lhs, _) = line.split_once('=')?;
    Some(lhs.trim().trim_matches('"'))
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "prefix",
        "multi_check",
        "items",
        "text",
        "tag",
        "disabled",
        "title",
        "checked",
        "separator",
        "submenu",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
