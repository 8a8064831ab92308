use super::model::{RecordExport, get_headers, record_to_row};
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Write the rows as CSV with a header line.
pub(crate) fn write_csv(path: &Path, rows: &[RecordExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;
    for row in rows {
        wtr.write_record(record_to_row(row))?;
    }

    wtr.flush()?;
    Ok(())
}
