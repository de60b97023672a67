use std::path::Path;
use calamine::{open_workbook_auto, Data, Range, Reader};
use log::{debug, warn};

use crate::errors::WorkbookError;

// @module: Spreadsheet loading and tabular data model

/// A single cell value as carried through the pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Cell with no content
    Empty,
    /// Textual content
    Text(String),
    /// Numeric content
    Number(f64),
}

impl CellValue {
    /// True when the cell carries no content at all
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Render the cell as plain text; empty cells become the empty string
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
        }
    }
}

/// An ordered table read from one worksheet: named columns plus data rows
///
/// Column names are unique within a table; the loader mangles duplicates
/// so that lookup-by-name stays unambiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    /// Column names in header order
    pub columns: Vec<String>,
    /// Data rows; every row has exactly `columns.len()` cells
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    /// Create an empty table with the given column names
    pub fn new(columns: Vec<String>) -> Self {
        SheetTable {
            columns,
            rows: Vec::new(),
        }
    }

    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Look up a column index by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Read a cell; out-of-range coordinates read as empty
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    /// Overwrite a cell value
    pub fn set_cell(&mut self, row: usize, col: usize, value: CellValue) {
        if let Some(r) = self.rows.get_mut(row) {
            if let Some(c) = r.get_mut(col) {
                *c = value;
            }
        }
    }

    /// Append a row, padding or truncating it to the column count
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(row);
    }

    /// Append a new column at the end of the column list, initialized to
    /// empty for all existing rows. Returns the new column index.
    pub fn add_column(&mut self, name: impl Into<String>) -> usize {
        self.columns.push(name.into());
        for row in &mut self.rows {
            row.push(CellValue::Empty);
        }
        self.columns.len() - 1
    }

    /// Count of non-empty cells in a column
    pub fn non_empty_count(&self, col: usize) -> usize {
        self.rows
            .iter()
            .filter(|row| row.get(col).is_some_and(|c| !c.is_empty()))
            .count()
    }
}

/// The two positional tables read from an uploaded workbook
#[derive(Debug, Clone)]
pub struct WorkbookDocument {
    /// First sheet: the table to translate
    pub translations: SheetTable,
    /// Second sheet: passed through unmodified except for styling
    pub configuration: SheetTable,
}

/// Load a workbook from disk and split it into the translation and
/// configuration tables. Sheet position selects, never sheet name.
pub fn load_workbook<P: AsRef<Path>>(path: P) -> Result<WorkbookDocument, WorkbookError> {
    let path = path.as_ref();

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| WorkbookError::Unreadable(e.to_string()))?;

    let sheet_names = workbook.sheet_names().to_vec();
    if sheet_names.len() < 2 {
        return Err(WorkbookError::MissingSheets(sheet_names.len()));
    }
    debug!("Workbook sheets: {:?}", sheet_names);

    let translation_range = workbook
        .worksheet_range(&sheet_names[0])
        .map_err(|e| WorkbookError::Unreadable(e.to_string()))?;
    let configuration_range = workbook
        .worksheet_range(&sheet_names[1])
        .map_err(|e| WorkbookError::Unreadable(e.to_string()))?;

    let translations = table_from_range(&translation_range);
    if translations.column_count() == 0 {
        return Err(WorkbookError::EmptySheet);
    }

    let configuration = table_from_range(&configuration_range);
    if configuration.column_count() == 0 {
        warn!("Configuration sheet '{}' is empty", sheet_names[1]);
    }

    Ok(WorkbookDocument {
        translations,
        configuration,
    })
}

/// Build a table from a worksheet range: first row is the header, the rest
/// are data rows.
fn table_from_range(range: &Range<Data>) -> SheetTable {
    let mut rows_iter = range.rows();

    let header = match rows_iter.next() {
        Some(row) => row,
        None => return SheetTable::new(Vec::new()),
    };

    let raw_names: Vec<String> = header
        .iter()
        .map(|cell| convert_cell(cell).as_text())
        .collect();

    let mut table = SheetTable::new(unique_headers(raw_names));
    for row in rows_iter {
        table.push_row(row.iter().map(convert_cell).collect());
    }
    table
}

/// Convert a calamine cell into our value model. Booleans, dates and error
/// cells have no counterpart in the pipeline and are carried as text.
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(format!("{:?}", e)),
    }
}

/// Make header names usable as lookup keys: blank headers get a synthesized
/// name, duplicates get a numeric suffix.
fn unique_headers(raw: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(raw.len());
    for (idx, name) in raw.into_iter().enumerate() {
        let base = if name.trim().is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            name
        };

        let mut candidate = base.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        seen.push(candidate);
    }
    seen
}
