use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::error::AppError;
use crate::model::signal_event::SignalEvent;

pub const CSV_HEADER: [&str; 4] = ["Time", "Signal", "Price", "Stop Loss"];

/// Append-only persisted signal history. A missing log is the normal empty
/// state, not an error; the first append bootstraps the medium.
pub trait SignalStore {
    fn append(&mut self, event: &SignalEvent) -> Result<(), AppError>;
    fn last_entry(&self) -> Result<Option<SignalEvent>, AppError>;
    fn all_entries(&self) -> Result<Vec<SignalEvent>, AppError>;
}

/// File-backed store, one CSV row per event under a `Time,Signal,Price,Stop
/// Loss` header. Rows are only ever appended; single-writer access is assumed
/// across the process lifetime.
pub struct CsvSignalStore {
    path: PathBuf,
}

impl CsvSignalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SignalStore for CsvSignalStore {
    fn append(&mut self, event: &SignalEvent) -> Result<(), AppError> {
        let bootstrap = !self.path.exists();
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if bootstrap {
            wtr.write_record(CSV_HEADER)?;
        }
        wtr.write_record(event.to_record())?;
        wtr.flush()?;
        Ok(())
    }

    fn last_entry(&self) -> Result<Option<SignalEvent>, AppError> {
        if !self.path.exists() {
            return Ok(None);
        }
        // Stream line by line keeping only the most recent row, so checking
        // one value never materializes the whole log.
        let file = File::open(&self.path)?;
        let mut last: Option<String> = None;
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if idx == 0 || line.trim().is_empty() {
                continue;
            }
            last = Some(line);
        }
        match last {
            Some(row) => SignalEvent::parse_row(&row).map(Some),
            None => Ok(None),
        }
    }

    fn all_entries(&self) -> Result<Vec<SignalEvent>, AppError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;
        let mut entries = Vec::new();
        for record in rdr.records() {
            let record = record?;
            entries.push(SignalEvent::from_fields(
                record.get(0).unwrap_or_default(),
                record.get(1).unwrap_or_default(),
                record.get(2).unwrap_or_default(),
                record.get(3).unwrap_or_default(),
            )?);
        }
        Ok(entries)
    }
}

/// In-memory store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySignalStore {
    events: Vec<SignalEvent>,
}

impl MemorySignalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SignalEvent] {
        &self.events
    }
}

impl SignalStore for MemorySignalStore {
    fn append(&mut self, event: &SignalEvent) -> Result<(), AppError> {
        self.events.push(event.clone());
        Ok(())
    }

    fn last_entry(&self) -> Result<Option<SignalEvent>, AppError> {
        Ok(self.events.last().cloned())
    }

    fn all_entries(&self) -> Result<Vec<SignalEvent>, AppError> {
        Ok(self.events.clone())
    }
}

/// Serialize events into the same byte shape as the persisted log file
/// (header plus one row per event), for the dashboard's export action.
pub fn export_csv(entries: &[SignalEvent]) -> Result<String, AppError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER)?;
    for event in entries {
        wtr.write_record(event.to_record())?;
    }
    let data = wtr
        .into_inner()
        .map_err(|e| AppError::Store(format!("failed to flush CSV writer: {e}")))?;
    String::from_utf8(data).map_err(|e| AppError::Store(format!("CSV output is not UTF-8: {e}")))
}

/// Inverse of [`export_csv`]; also used to re-load exported logs.
pub fn parse_csv(data: &str) -> Result<Vec<SignalEvent>, AppError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data.as_bytes());
    let mut entries = Vec::new();
    for record in rdr.records() {
        let record = record?;
        entries.push(SignalEvent::from_fields(
            record.get(0).unwrap_or_default(),
            record.get(1).unwrap_or_default(),
            record.get(2).unwrap_or_default(),
            record.get(3).unwrap_or_default(),
        )?);
    }
    Ok(entries)
}
