//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::{CsvSummaryRow, GameMetrics};
use crate::types::OutputFormat;

pub struct OutputWriter {
    jsonl_writer: Option<Box<dyn Write + Send>>,
    json_buffer: Option<Vec<GameMetrics>>,
    json_path: Option<PathBuf>,
    csv_writer: csv::Writer<BufWriter<File>>,
    jsonl_path: Option<PathBuf>,
    csv_path: PathBuf,
}

impl OutputWriter {
    pub fn new(
        output_dir: &str,
        format: &OutputFormat,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let (jsonl_writer, jsonl_path) = if matches!(format, OutputFormat::Jsonl) {
            let filename = format!("simulation_{}.jsonl", timestamp);
            if compress {
                let gz_path = dir.join(format!("{}.gz", filename));
                let writer: Box<dyn Write + Send> = Box::new(BufWriter::new(GzEncoder::new(
                    File::create(&gz_path)?,
                    Compression::default(),
                )));
                (Some(writer), Some(gz_path))
            } else {
                let path = dir.join(&filename);
                let file = OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&path)?;
                let writer: Box<dyn Write + Send> = Box::new(BufWriter::new(file));
                (Some(writer), Some(path))
            }
        } else {
            (None, None)
        };

        // Json format buffers all games and writes one array at the end.
        let (json_buffer, json_path) = if matches!(format, OutputFormat::Json) {
            let path = dir.join(format!("simulation_{}.json", timestamp));
            (Some(Vec::new()), Some(path))
        } else {
            (None, None)
        };

        // Always create the CSV summary
        let csv_path = dir.join(format!("simulation_{}_summary.csv", timestamp));
        let csv_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&csv_path)?;
        let csv_writer = csv::Writer::from_writer(BufWriter::new(csv_file));

        Ok(Self {
            jsonl_writer,
            json_buffer,
            json_path,
            csv_writer,
            jsonl_path,
            csv_path,
        })
    }

    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(ref mut writer) = self.jsonl_writer {
            let json = serde_json::to_string(metrics)?;
            writeln!(writer, "{}", json)?;
        }
        if let Some(ref mut buffer) = self.json_buffer {
            buffer.push(metrics.clone());
        }

        let row: CsvSummaryRow = metrics.into();
        self.csv_writer.serialize(&row)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(ref mut writer) = self.jsonl_writer {
            writer.flush()?;
        }
        if let (Some(buffer), Some(path)) = (self.json_buffer.take(), self.json_path.as_ref()) {
            let file = File::create(path)?;
            serde_json::to_writer_pretty(BufWriter::new(file), &buffer)?;
        }
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (Option<&PathBuf>, &PathBuf) {
        (
            self.jsonl_path.as_ref().or(self.json_path.as_ref()),
            &self.csv_path,
        )
    }
}
