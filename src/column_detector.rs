use once_cell::sync::Lazy;
use regex::Regex;
use log::debug;

use crate::workbook::SheetTable;

// @module: Language column detection heuristics

// @const: Language column header regex, e.g. "Description (sk)" -> "sk"
static LANG_COLUMN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(([\w-]{2,10})\)\s*$").unwrap()
});

/// Fallback source code used when no header carries a language suffix
pub const DEFAULT_SOURCE_LANGUAGE: &str = "sk";

/// A column whose header encodes a language code in a parenthesized suffix
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageColumn {
    /// Full column name, e.g. "Description (sk)"
    pub name: String,
    /// Extracted language code, e.g. "sk"
    pub code: String,
}

/// Result of inspecting the translation table headers
#[derive(Debug, Clone)]
pub struct ColumnDetection {
    /// Default source column (densest language column, or first column)
    pub source_column: String,
    /// Language code extracted from the default source column
    pub source_language: String,
    /// All language columns present, in header order
    pub language_columns: Vec<LanguageColumn>,
}

/// Extract the language code from a column header, if the header ends with
/// a parenthesized 2-10 character code.
pub fn language_code(header: &str) -> Option<&str> {
    LANG_COLUMN_REGEX
        .captures(header)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Inspect the table headers and pick detection defaults.
///
/// The default source column is the language column with the highest count
/// of non-empty cells; ties go to the first such column in header order.
/// When no header matches, the first column and a fixed default code are
/// returned so the caller always has a usable selection.
pub fn detect_columns(table: &SheetTable) -> ColumnDetection {
    let mut language_columns = Vec::new();
    let mut best: Option<(usize, usize)> = None; // (column index, fill count)

    for (idx, name) in table.columns.iter().enumerate() {
        let Some(code) = language_code(name) else {
            continue;
        };
        language_columns.push(LanguageColumn {
            name: name.clone(),
            code: code.to_string(),
        });

        let fill = table.non_empty_count(idx);
        if best.is_none_or(|(_, best_fill)| fill > best_fill) {
            best = Some((idx, fill));
        }
    }

    let (source_column, source_language) = match best {
        Some((idx, fill)) => {
            let name = table.columns[idx].clone();
            let code = language_code(&name)
                .unwrap_or(DEFAULT_SOURCE_LANGUAGE)
                .to_string();
            debug!("Detected source column '{}' ({} non-empty cells)", name, fill);
            (name, code)
        }
        None => {
            let name = table.columns.first().cloned().unwrap_or_default();
            debug!("No language columns found, falling back to first column '{}'", name);
            (name, DEFAULT_SOURCE_LANGUAGE.to_string())
        }
    };

    ColumnDetection {
        source_column,
        source_language,
        language_columns,
    }
}

impl ColumnDetection {
    /// Candidate target codes: every detected language code except the
    /// given source code, deduplicated and sorted. The exclusion is a
    /// case-sensitive compare against the (possibly user-overridden) source
    /// code string. An empty result is valid.
    pub fn target_candidates(&self, source_language: &str) -> Vec<String> {
        let mut candidates: Vec<String> = self
            .language_columns
            .iter()
            .filter(|col| col.code != source_language)
            .map(|col| col.code.clone())
            .collect();
        candidates.sort();
        candidates.dedup();
        candidates
    }
}
