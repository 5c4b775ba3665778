//! JSON Lines import/export for scan records and decoded telemetry

use super::scan::{Result, ScanError, ScanRecord};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Load scan records from a JSON Lines file
///
/// Blank lines are skipped. Lines that do not parse are logged and skipped so
/// one bad upload does not discard the rest of the batch.
pub fn load_scans(filename: impl AsRef<Path>) -> Result<Vec<ScanRecord>> {
    let file = File::open(filename)?;
    read_scans(BufReader::new(file))
}

/// Read scan records from any buffered reader, one JSON object per line
pub fn read_scans(reader: impl BufRead) -> Result<Vec<ScanRecord>> {
    let mut scans = Vec::new();

    for (line_num, line_result) in reader.split(b'\n').enumerate() {
        let line = line_result?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        match serde_json::from_slice::<ScanRecord>(&line) {
            Ok(scan) => scans.push(scan),
            Err(e) => {
                tracing::warn!("Skipping line {}: {}", line_num + 1, e);
            }
        }
    }

    Ok(scans)
}

/// Write items as JSON Lines to a file
pub fn export_jsonl<T: Serialize>(filename: impl AsRef<Path>, items: &[T]) -> Result<()> {
    let file = File::create(filename)?;
    write_jsonl(BufWriter::new(file), items)
}

/// Write items as JSON Lines to any writer
pub fn write_jsonl<T: Serialize>(mut writer: impl Write, items: &[T]) -> Result<()> {
    for item in items {
        let line = serde_json::to_string(item).map_err(ScanError::Json)?;
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    const RAW: [u8; 15] = [
        0x02, 0x01, 0x06, 0x03, 0x09, b'Q', b'T', 0x07, 0xFF, 0xC0, 0x00, 0xC0, 0x80, 0x40, 0xC8,
    ];

    #[test]
    fn test_read_scans_skips_bad_lines() {
        let good = ScanRecord::new("AA:BB:CC:DD:EE:FF", &RAW).to_json().unwrap();
        let input = format!("{}\n\nnot json\n{{\"rssi\":-50}}\n{}\n", good, good);

        let scans = read_scans(Cursor::new(input)).unwrap();
        assert_eq!(scans.len(), 2);
        assert_eq!(scans[0].mac, "AA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn test_read_scans_skips_invalid_utf8() {
        let good = ScanRecord::new("AA:BB:CC:DD:EE:FF", &RAW).to_json().unwrap();
        let mut input = Vec::new();
        input.extend_from_slice(good.as_bytes());
        input.extend_from_slice(b"\n{\"mac\":\"\xFF\xFE\"}\r\n");
        input.extend_from_slice(good.as_bytes());
        input.extend_from_slice(b"\r\n");

        let scans = read_scans(Cursor::new(input)).unwrap();
        assert_eq!(scans.len(), 2);
        assert_eq!(scans[1].mac, "AA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn test_export_load_scans() -> Result<()> {
        let tempfile = NamedTempFile::new().unwrap();
        let path = tempfile.path().to_path_buf();

        let scans = vec![
            ScanRecord::new("AA:BB:CC:DD:EE:01", &RAW),
            ScanRecord::new("AA:BB:CC:DD:EE:02", &RAW[..3]),
        ];

        export_jsonl(&path, &scans)?;
        let loaded = load_scans(&path)?;

        assert_eq!(loaded, scans);
        Ok(())
    }

    #[test]
    fn test_write_jsonl_one_object_per_line() {
        let mut out = Vec::new();
        let records = vec![serde_json::json!({"a": 1}), serde_json::json!({"b": 2})];
        write_jsonl(&mut out, &records).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_scans("/nonexistent/scans.jsonl").unwrap_err();
        assert!(matches!(err, ScanError::Io(_)));
    }
}
