use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::model::DecisionTable;
use crate::pipeline::TopsisOutcome;
use crate::report::{RANK_HEADER, RunSummary, SCORE_HEADER};

pub fn write_result_csv(table: &DecisionTable, outcome: &TopsisOutcome, path: &Path) -> Result<()> {
    write_atomically(path, |file| {
        let mut writer = csv::Writer::from_writer(file);
        render_result_csv(&mut writer, table, outcome)?;
        writer.flush()?;
        Ok(())
    })?;
    info!("wrote {} ranked rows to {}", table.n_rows(), path.display());
    Ok(())
}

pub fn render_result_csv<W: Write>(
    writer: &mut csv::Writer<W>,
    table: &DecisionTable,
    outcome: &TopsisOutcome,
) -> Result<()> {
    let mut header = Vec::with_capacity(table.n_criteria() + 3);
    header.push(table.id_header.as_str());
    header.extend(table.criteria.iter().map(String::as_str));
    header.push(SCORE_HEADER);
    header.push(RANK_HEADER);
    writer.write_record(&header)?;

    for (row, id) in table.ids.iter().enumerate() {
        let mut record = Vec::with_capacity(table.n_criteria() + 3);
        record.push(id.clone());
        record.extend(table.text[row].iter().cloned());
        record.push(outcome.scores[row].to_string());
        record.push(outcome.ranks[row].to_string());
        writer.write_record(&record)?;
    }
    Ok(())
}

pub fn write_summary_json(summary: &RunSummary, path: &Path) -> Result<()> {
    write_atomically(path, |mut file| {
        serde_json::to_writer_pretty(&mut file, summary)?;
        file.write_all(b"\n")?;
        file.flush()?;
        Ok(())
    })?;
    info!("wrote run summary to {}", path.display());
    Ok(())
}

/// Writes to a sibling temporary file and renames it over `path`, so a
/// failed write never leaves a truncated target behind.
fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(BufWriter<File>) -> Result<()>,
{
    let tmp = temp_path(path);
    let result = File::create(&tmp)
        .map_err(Into::into)
        .and_then(|file| write(BufWriter::new(file)));
    if let Err(err) = result {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
