use crate::domain::constants::RESULT_FOLDER;
use crate::domain::models::ReportRow;
use crate::error::FluxError;
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Resolves where results land and writes them as CSV.
///
/// The layout convention is fixed: the result folder sits three levels above
/// the run directory, and the "DP number" filename prefix is the directory
/// name two levels above it.
pub struct ResultStore {
    result_dir: PathBuf,
    dp_number: String,
}

impl ResultStore {
    /// Rooted at the process working directory.
    pub fn from_current_dir() -> Result<Self, FluxError> {
        let base = std::env::current_dir().map_err(|e| FluxError::Save(e.to_string()))?;
        Self::at(&base)
    }

    /// Derives the result folder and DP prefix from `base`, creating the
    /// folder if it is missing.
    pub fn at(base: &Path) -> Result<Self, FluxError> {
        let result_dir = ancestor(base, 3).join(RESULT_FOLDER);
        std::fs::create_dir_all(&result_dir).map_err(|e| FluxError::Save(e.to_string()))?;
        let dp_number = ancestor(base, 2)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            result_dir,
            dp_number,
        })
    }

    pub fn result_dir(&self) -> &Path {
        &self.result_dir
    }

    pub fn dp_number(&self) -> &str {
        &self.dp_number
    }

    /// Writes `rows` as `{dp}_{filename}` into the result folder: columns
    /// sorted by name, one unwrapped value per cell, no index column. An
    /// existing file of the same name is overwritten.
    pub fn save(&self, rows: &[ReportRow], filename: &str) -> Result<PathBuf, FluxError> {
        let path = self
            .result_dir
            .join(format!("{}_{}", self.dp_number, filename));
        log::info!("saving to {}", path.display());
        write_csv(rows, &path).map_err(|e| FluxError::Save(e.to_string()))?;
        Ok(path)
    }
}

// Walking above the filesystem root saturates at the root.
fn ancestor(path: &Path, levels: usize) -> PathBuf {
    let mut p = path;
    for _ in 0..levels {
        p = p.parent().unwrap_or(p);
    }
    p.to_path_buf()
}

// Converts everything up front so a malformed cell never leaves a partial
// file on disk.
fn write_csv(rows: &[ReportRow], path: &Path) -> anyhow::Result<()> {
    let mut columns = BTreeSet::new();
    for row in rows {
        columns.extend(row.keys().cloned());
    }

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let mut record = Vec::with_capacity(columns.len());
        for column in &columns {
            let cell = row
                .get(column)
                .ok_or_else(|| anyhow::anyhow!("row is missing column {}", column))?;
            record.push(unwrap_cell(column, cell)?);
        }
        records.push(record);
    }

    if columns.is_empty() {
        std::fs::File::create(path)?;
        return Ok(());
    }
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(&columns)?;
    for record in records {
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

fn unwrap_cell(column: &str, cell: &[Value]) -> anyhow::Result<String> {
    match cell {
        [value] => Ok(field_text(value)),
        other => anyhow::bail!(
            "column {} holds {} values, expected exactly one",
            column,
            other.len()
        ),
    }
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
