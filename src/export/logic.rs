// src/export/logic.rs

use crate::core::calculator::Rules;
use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::RecordExport;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::summary::UNSET_LABEL;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Rows for `[start, end]`, optionally restricted to one project.
    ///
    /// A project filter of `"(unset)"` selects records without a project.
    pub fn collect(
        store: &RecordStore,
        start: NaiveDate,
        end: NaiveDate,
        project: Option<&str>,
        rules: &Rules,
    ) -> Vec<RecordExport> {
        store
            .range(start, end)
            .into_iter()
            .filter(|r| match project {
                None => true,
                Some(UNSET_LABEL) => r.project.is_empty(),
                Some(p) => r.project == p,
            })
            .map(|r| RecordExport::from_record(r, rules))
            .collect()
    }

    /// Write the rows for the range to `file`. Returns the number of rows.
    pub fn export(
        store: &RecordStore,
        format: ExportFormat,
        file: &Path,
        bounds: (NaiveDate, NaiveDate),
        project: Option<&str>,
        force: bool,
        rules: &Rules,
    ) -> AppResult<usize> {
        ensure_writable(file, force)?;

        let rows = Self::collect(store, bounds.0, bounds.1, project, rules);
        if rows.is_empty() {
            warning("No records found for the selected range.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => write_csv(file, &rows)?,
            ExportFormat::Json => write_json(file, &rows)?,
        }

        tracing::debug!(path = %file.display(), rows = rows.len(), "export written");
        notify_export_success(format.as_str(), rows.len(), file);
        Ok(rows.len())
    }
}
