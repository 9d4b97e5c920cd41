//! CSV output backend.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, TrajectoryRow};

/// Streams trajectory rows to a single CSV file, one tick's batch at a time.
pub struct CsvWriter {
    rows:     Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the output file at `path` and write the header row.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let mut rows = Writer::from_path(path)?;
        rows.write_record([
            "ID", "Time", "X", "Y", "Speed", "Direction", "State", "Download", "Upload",
        ])?;
        Ok(Self { rows, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_rows(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()> {
        for row in rows {
            self.rows.write_record(&[
                row.id.to_string(),
                row.time.clone(),
                row.x.to_string(),
                row.y.to_string(),
                row.speed.to_string(),
                row.direction.to_string(),
                row.state.to_string(),
                row.download.to_string(),
                row.upload.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
