use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::Republic;

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Flush the republic's state to JSONL files in the given output directory.
///
/// Creates the output directory if it does not exist. Writes 2 files:
/// - `officeholders.jsonl` - one living Officeholder per line
/// - `chronicle.jsonl` - one YearRecord per simulated year so far
pub fn flush_to_jsonl(republic: &Republic, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(
        &output_dir.join("officeholders.jsonl"),
        republic.officeholders.iter(),
    )?;
    write_jsonl(
        &output_dir.join("chronicle.jsonl"),
        republic.chronicle.iter(),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Officeholder, Rank, YearRecord};

    #[test]
    fn writes_one_line_per_item() {
        let mut republic = Republic::new();
        republic.officeholders = vec![
            Officeholder::appointed(Rank::Quaestor),
            Officeholder::appointed(Rank::Consul),
        ];
        republic.chronicle.push(YearRecord {
            year: 1,
            candidates_drawn: 12,
            deaths: 0,
            consul_census: 0,
            backfilled: [8, 10, 8, 2],
            reelection_count: 2,
            psi: 70,
            population: 40,
        });

        let dir = tempfile::tempdir().unwrap();
        flush_to_jsonl(&republic, dir.path()).unwrap();

        let holders = fs::read_to_string(dir.path().join("officeholders.jsonl")).unwrap();
        let lines: Vec<&str> = holders.lines().collect();
        assert_eq!(lines.len(), 2);
        let consul: Officeholder = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(consul, Officeholder::appointed(Rank::Consul));

        let chronicle = fs::read_to_string(dir.path().join("chronicle.jsonl")).unwrap();
        let record: YearRecord = serde_json::from_str(chronicle.trim_end()).unwrap();
        assert_eq!(record.psi, 70);
    }

    #[test]
    fn empty_republic_writes_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        flush_to_jsonl(&Republic::new(), &nested).unwrap();
        assert_eq!(fs::read_to_string(nested.join("officeholders.jsonl")).unwrap(), "");
        assert_eq!(fs::read_to_string(nested.join("chronicle.jsonl")).unwrap(), "");
    }
}
