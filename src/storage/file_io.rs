//! CSV file I/O utilities with atomic rewrites
//!
//! The backing files are header-less CSV, one record per line. Values
//! containing the delimiter or quotes are quoted by the csv crate, so free
//! text fields round-trip safely. Full rewrites go through a temp file and
//! rename so a crash mid-write cannot corrupt existing data.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Read all records from a CSV file, skipping lines that do not parse.
///
/// Returns the parsed records along with the number of skipped lines.
/// A missing file is not an error and reads as an empty collection.
pub fn read_records<T, P>(path: P) -> TrackerResult<(Vec<T>, usize)>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok((Vec::new(), 0));
    }

    let file = File::open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut records = Vec::new();
    let mut skipped = 0;

    for result in reader.deserialize::<T>() {
        match result {
            Ok(record) => records.push(record),
            // Wrong field count or an unparseable field; the line is
            // dropped but the caller learns how many were lost.
            Err(_) => skipped += 1,
        }
    }

    Ok((records, skipped))
}

/// Write all records to a CSV file atomically (write to temp, then rename)
///
/// This ensures the file is either completely written or not modified at
/// all, preventing corruption on crashes or power failures.
pub fn write_records_atomic<T, P>(path: P, records: &[T]) -> TrackerResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory (important for atomic rename)
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| TrackerError::Storage(format!("Failed to serialize record: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    let buf_writer = writer
        .into_inner()
        .map_err(|e| TrackerError::Storage(format!("Failed to finish write: {}", e)))?;
    let file = buf_writer
        .into_inner()
        .map_err(|e| TrackerError::Storage(format!("Failed to finish write: {}", e)))?;
    file.sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up the temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Append a single record to a CSV file, creating it if needed
pub fn append_record<T, P>(path: P, record: &T) -> TrackerResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer
        .serialize(record)
        .map_err(|e| TrackerError::Storage(format!("Failed to serialize record: {}", e)))?;

    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    Ok(())
}
