use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{NutritionalData, ScoreType, ValidationError};

/// One CSV row: a named item, its category and nutrient values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRow {
    /// 1-based line in the source file, counting the header.
    #[serde(skip)]
    pub line: usize,

    pub name: String,

    /// Category name or numeric code; empty means food.
    #[serde(rename = "type", default)]
    pub score_type: String,

    pub energy: f64,
    pub sugars: f64,
    pub saturated_fatty_acids: f64,
    pub sodium: f64,
    pub fruits: f64,
    pub fibre: f64,
    pub protein: f64,
}

impl BatchRow {
    pub fn data(&self) -> NutritionalData {
        NutritionalData {
            energy: self.energy,
            sugars: self.sugars,
            saturated_fatty_acids: self.saturated_fatty_acids,
            sodium: self.sodium,
            fruits: self.fruits,
            fibre: self.fibre,
            protein: self.protein,
        }
    }

    /// Resolve the category column.
    pub fn parse_score_type(&self) -> std::result::Result<ScoreType, ValidationError> {
        if self.score_type.trim().is_empty() {
            Ok(ScoreType::Food)
        } else {
            self.score_type.parse()
        }
    }
}

/// A row that could not be scored.
#[derive(Debug, Clone, Serialize)]
pub struct RejectedRow {
    /// 1-based line in the source file, counting the header.
    pub line: usize,
    pub name: String,
    pub errors: Vec<ValidationError>,
}

/// Parsed contents of a batch file.
#[derive(Debug, Clone, Default)]
pub struct BatchFile {
    pub rows: Vec<BatchRow>,
    /// Records whose cells could not be read as numbers.
    pub malformed: Vec<RejectedRow>,
}

/// Read batch rows from any CSV source with a header line.
///
/// A record with an empty or non-numeric cell is set aside in
/// `malformed`; only I/O failures abort the read.
pub fn read_rows<R: Read>(reader: R) -> Result<BatchFile> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let name_idx = headers.iter().position(|h| h == "name");

    let mut batch = BatchFile::default();
    for (idx, result) in rdr.records().enumerate() {
        let fallback_line = idx + 2;
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                let line = e.position().map_or(fallback_line, |p| p.line() as usize);
                batch.malformed.push(RejectedRow {
                    line,
                    name: String::new(),
                    errors: vec![ValidationError::unbounded("row", f64::NAN, e.to_string())],
                });
                continue;
            }
        };

        let line = record
            .position()
            .map_or(fallback_line, |p| p.line() as usize);
        match record.deserialize::<BatchRow>(Some(&headers)) {
            Ok(mut row) => {
                row.line = line;
                batch.rows.push(row);
            }
            Err(e) => {
                let name = name_idx
                    .and_then(|i| record.get(i))
                    .unwrap_or_default()
                    .to_string();
                batch.malformed.push(RejectedRow {
                    line,
                    name,
                    errors: vec![cell_error(&e, &headers)],
                });
            }
        }
    }
    Ok(batch)
}

/// Read batch rows from a CSV file.
pub fn load_rows<P: AsRef<Path>>(path: P) -> Result<BatchFile> {
    let path = path.as_ref();
    let batch = read_rows(File::open(path)?)?;
    tracing::debug!(
        "Read {} row(s) from {}, {} malformed",
        batch.rows.len(),
        path.display(),
        batch.malformed.len()
    );
    Ok(batch)
}

/// Name the offending column when the csv error points at one.
fn cell_error(err: &csv::Error, headers: &StringRecord) -> ValidationError {
    let csv::ErrorKind::Deserialize { err: de, .. } = err.kind() else {
        return ValidationError::unbounded("row", f64::NAN, err.to_string());
    };

    match de.field().and_then(|i| headers.get(i as usize)) {
        Some(field) => ValidationError::unbounded(
            field,
            f64::NAN,
            format!("{} is not a valid number: {}", field, de.kind()),
        ),
        None => ValidationError::unbounded("row", f64::NAN, de.kind().to_string()),
    }
}
