use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::record::TableRow;

/// Writes a header row plus one row per record; returns the row count.
pub fn export_csv<'a, T>(csv_path: &Path, records: impl IntoIterator<Item = &'a T>) -> Result<usize>
where
    T: TableRow + 'a,
{
    let mut writer = csv::Writer::from_path(csv_path)
        .with_context(|| format!("failed to create csv: {}", csv_path.display()))?;

    writer
        .write_record(T::columns())
        .context("failed to write csv header")?;

    let mut rows = 0;
    for record in records {
        rows += 1;
        writer
            .write_record(record.cells())
            .context("failed to write csv record")?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush csv: {}", csv_path.display()))?;

    Ok(rows)
}
