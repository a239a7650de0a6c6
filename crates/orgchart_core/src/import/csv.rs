//! Permissive CSV parser for chart imports.
//!
//! # Responsibility
//! - Auto-detect the column delimiter and map free-form header names.
//! - Infer missing type information from role-title keywords.
//!
//! # Invariants
//! - Output preserves row order.
//! - `reports_to` references are not validated here; dangling ones become
//!   forest roots later.
//! - Structural problems are fatal; per-row problems skip the row and keep
//!   going.

use crate::model::entity::Entity;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Strips at most one leading and one trailing double quote from a cell.
static CELL_QUOTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^\"|\"$").expect("valid cell quote regex"));

/// Role-title keywords marking a row as an organizational unit when the type
/// column is absent or empty.
const DEPARTMENT_KEYWORDS: &[&str] = &["müdürlüğü", "birimi", "departmanı", "başkanlığı"];

/// Placeholder role for person rows with an empty title cell.
const DEFAULT_PERSON_TITLE: &str = "Unvan Belirtilmemiş";

/// Structural errors that abort the whole import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvImportError {
    /// Input contains no header line.
    MissingHeader,
    /// Header line lacks the required `id` or `name` column.
    MissingRequiredColumns { header: String },
}

impl Display for CsvImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "csv input contains no header row"),
            Self::MissingRequiredColumns { header } => write!(
                f,
                "csv header must contain `id` and `name` columns, got: {header}"
            ),
        }
    }
}

impl Error for CsvImportError {}

/// Reason a data row was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Row has an empty `id` or `name` cell.
    MissingIdOrName,
    /// Resolved type is neither `person` nor `department`.
    UnknownType(String),
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingIdOrName => write!(f, "missing id or name"),
            Self::UnknownType(value) => write!(f, "unknown type `{value}`"),
        }
    }
}

/// One dropped data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number within the trimmed input; the header is line 1.
    pub line_number: usize,
    pub reason: SkipReason,
}

/// Parse result: entities in row order plus skipped-row records.
///
/// A result with zero entities is well-formed here; the import operation
/// layer treats it as a distinct failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvImport {
    pub entities: Vec<Entity>,
    pub skipped: Vec<SkippedRow>,
}

struct HeaderMap {
    id: usize,
    name: usize,
    title: Option<usize>,
    reports_to: Option<usize>,
    kind: Option<usize>,
}

/// Parses delimited text into a replacement entity collection.
pub fn parse_csv(raw_text: &str) -> Result<CsvImport, CsvImportError> {
    let mut lines = raw_text.trim().lines();
    let Some(header_line) = lines.next() else {
        return Err(CsvImportError::MissingHeader);
    };

    let delimiter = detect_delimiter(header_line);
    let columns = map_header(header_line, delimiter)?;

    let mut entities = Vec::new();
    let mut skipped = Vec::new();

    for (offset, line) in lines.enumerate() {
        let line_number = offset + 2;
        if line.trim().is_empty() {
            continue;
        }

        let cells: Vec<String> = line.split(delimiter).map(clean_cell).collect();
        match build_row(&cells, &columns) {
            Ok(entity) => entities.push(entity),
            Err(reason) => {
                warn!(
                    "event=csv_row_skipped module=import status=warn line={line_number} reason={reason}"
                );
                skipped.push(SkippedRow {
                    line_number,
                    reason,
                });
            }
        }
    }

    Ok(CsvImport { entities, skipped })
}

/// Picks `;` only when it is strictly more frequent than `,` in the header.
///
/// Counts are literal character counts, not quote-aware.
fn detect_delimiter(header_line: &str) -> char {
    let commas = header_line.matches(',').count();
    let semicolons = header_line.matches(';').count();
    if semicolons > commas {
        ';'
    } else {
        ','
    }
}

fn map_header(header_line: &str, delimiter: char) -> Result<HeaderMap, CsvImportError> {
    let cells: Vec<String> = header_line
        .split(delimiter)
        .map(|cell| cell.trim().to_lowercase().replace('"', ""))
        .collect();
    let find = |name: &str| cells.iter().position(|cell| cell == name);

    let (Some(id), Some(name)) = (find("id"), find("name")) else {
        return Err(CsvImportError::MissingRequiredColumns {
            header: header_line.to_string(),
        });
    };

    Ok(HeaderMap {
        id,
        name,
        title: find("title"),
        reports_to: find("reports").or_else(|| find("reportsto")),
        kind: find("type"),
    })
}

fn clean_cell(cell: &str) -> String {
    CELL_QUOTE_RE.replace_all(cell.trim(), "").into_owned()
}

fn build_row(cells: &[String], columns: &HeaderMap) -> Result<Entity, SkipReason> {
    let cell = |index: Option<usize>| {
        index
            .and_then(|index| cells.get(index))
            .map(String::as_str)
            .unwrap_or("")
    };

    let id = cell(Some(columns.id));
    let name = cell(Some(columns.name));
    if id.is_empty() || name.is_empty() {
        return Err(SkipReason::MissingIdOrName);
    }

    let title = cell(columns.title);
    let reports_to = match cell(columns.reports_to) {
        "" => None,
        value => Some(value.to_string()),
    };

    let kind = cell(columns.kind).to_lowercase();
    let kind = if kind.is_empty() {
        inferred_kind(title).to_string()
    } else {
        kind
    };

    match kind.as_str() {
        "person" => {
            let title = if title.is_empty() {
                DEFAULT_PERSON_TITLE
            } else {
                title
            };
            Ok(Entity::person(id, name, title, reports_to))
        }
        "department" => {
            // Departments carry no separate title; fold it into the name.
            let full_name = if title.is_empty() {
                name.to_string()
            } else {
                format!("{name} {title}")
            };
            Ok(Entity::department(id, full_name, reports_to))
        }
        other => Err(SkipReason::UnknownType(other.to_string())),
    }
}

fn inferred_kind(title: &str) -> &'static str {
    if title.is_empty() {
        return "person";
    }
    let lowered = title.to_lowercase();
    if DEPARTMENT_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
    {
        "department"
    } else {
        "person"
    }
}
