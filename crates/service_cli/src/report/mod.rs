//! Sweep table and summary rendering
//!
//! Tables are emitted in the published column order with full-precision
//! values for CSV and JSON. The text table is for reading only.

mod table;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use pricer_risk::sweep::{SweepRecord, SweepRow, SweepSummary, COLUMNS};
use tracing::debug;

use crate::config::OutputFormat;
use crate::Result;

pub use table::{render_summary, render_table};

/// Write a sweep table to `out` in the requested format
pub fn write_rows<W: Write>(rows: &[SweepRow], format: OutputFormat, mut out: W) -> Result<()> {
    let records: Vec<SweepRecord> = rows.iter().map(SweepRow::to_record).collect();

    match format {
        OutputFormat::Csv => {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(out);
            writer.write_record(COLUMNS)?;
            for record in &records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &records)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            out.write_all(render_table(&records).as_bytes())?;
        }
    }

    Ok(())
}

/// Write a sweep table to `<dir>/<stem>.<ext>`, creating `dir` if needed
pub fn write_to_dir(
    rows: &[SweepRow],
    format: OutputFormat,
    dir: &Path,
    stem: &str,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.{}", stem, format.extension()));
    let file = fs::File::create(&path)?;
    write_rows(rows, format, std::io::BufWriter::new(file))?;
    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(path)
}

/// Print the best-accuracy summary for one scenario
pub fn print_summary(name: &str, summary: &SweepSummary) {
    println!("{}", render_summary(name, summary));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::scenario::PresetScenario;
    use pricer_risk::sweep::{run_sweep, StepGrid};

    fn rows() -> Vec<SweepRow> {
        let grid = StepGrid::new(4, -12.0, -6.0).unwrap();
        run_sweep(&PresetScenario::AtmReference.scenario(), &grid).unwrap()
    }

    #[test]
    fn test_csv_header_and_full_precision() {
        let rows = rows();
        let mut buffer = Vec::new();
        write_rows(&rows, OutputFormat::Csv, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();

        assert_eq!(lines.next().unwrap(), COLUMNS.join(","));
        let first: Vec<f64> = lines
            .next()
            .unwrap()
            .split(',')
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(first.len(), 14);
        // Values survive the text round trip bit for bit
        let expected = rows[0].to_record().values();
        for (parsed, value) in first.iter().zip(expected.iter()) {
            assert_eq!(parsed.to_bits(), value.to_bits());
        }
        assert_eq!(text.lines().count(), 1 + rows.len());
    }

    #[test]
    fn test_csv_empty_table_still_has_header() {
        let mut buffer = Vec::new();
        write_rows(&[], OutputFormat::Csv, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), COLUMNS.join(","));
    }

    #[test]
    fn test_json_keys_follow_columns() {
        let rows = rows();
        let mut buffer = Vec::new();
        write_rows(&rows, OutputFormat::Json, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), rows.len());
        let object = array[0].as_object().unwrap();
        for column in COLUMNS {
            assert!(object.contains_key(column), "missing {}", column);
        }
        let h_rel = object["h_rel"].as_f64().unwrap();
        assert!((h_rel - rows[0].h_rel).abs() <= 1e-15 * rows[0].h_rel);
    }

    #[test]
    fn test_table_has_row_per_step() {
        let rows = rows();
        let mut buffer = Vec::new();
        write_rows(&rows, OutputFormat::Table, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Delta_cs"));
        assert!(text.contains("err_G_cs_45"));
        assert!(text.lines().count() >= rows.len() + 1);
    }
}
