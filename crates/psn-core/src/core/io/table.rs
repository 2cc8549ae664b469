use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("table serialization error: {0}")]
    Csv(#[from] csv::Error),
}

/// One row of the path table: the comma-joined node list, the path endpoints,
/// the node count, and the summed and averaged edge weights.
#[derive(Debug, Clone, PartialEq)]
pub struct PathRecord {
    pub path: String,
    pub source: String,
    pub target: String,
    pub length: usize,
    pub sum_weight: f64,
    pub avg_weight: f64,
}

/// Writes the path table as tab-delimited text, weights at one decimal
/// place; row order is exactly the record order.
pub fn write_path_table<W: Write>(writer: W, records: &[PathRecord]) -> Result<(), TableError> {
    let mut table = csv::WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    for record in records {
        table.write_record(&[
            record.path.clone(),
            record.source.clone(),
            record.target.clone(),
            record.length.to_string(),
            format!("{:.1}", record.sum_weight),
            format!("{:.1}", record.avg_weight),
        ])?;
    }
    table.flush()?;
    Ok(())
}

/// Writes the path table to a file path; see [`write_path_table`].
pub fn write_path_table_to_path<P: AsRef<Path>>(
    path: P,
    records: &[PathRecord],
) -> Result<(), TableError> {
    write_path_table(File::create(path)?, records)
}

/// Writes a hub table (`node<TAB>degree`, one row per hub).
pub fn write_hub_table<W: Write>(writer: W, rows: &[(String, usize)]) -> Result<(), TableError> {
    let mut table = csv::WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    for (label, degree) in rows {
        table.write_record(&[label.clone(), degree.to_string()])?;
    }
    table.flush()?;
    Ok(())
}

/// Writes a per-residue value table (`node<TAB>value` at five decimals),
/// used for centrality output.
pub fn write_value_table<W: Write>(
    writer: W,
    identifiers: &[String],
    values: &[f64],
) -> Result<(), TableError> {
    let mut table = csv::WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    for (label, value) in identifiers.iter().zip(values) {
        table.write_record(&[label.clone(), format!("{value:.5}")])?;
    }
    table.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> PathRecord {
        PathRecord {
            path: "A1,A2,A3".to_string(),
            source: "A1".to_string(),
            target: "A3".to_string(),
            length: 3,
            sum_weight: 3.0,
            avg_weight: 1.5,
        }
    }

    #[test]
    fn path_table_renders_weights_at_one_decimal() {
        let mut buffer = Vec::new();
        write_path_table(&mut buffer, &[sample_record()]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "A1,A2,A3\tA1\tA3\t3\t3.0\t1.5\n");
    }

    #[test]
    fn path_table_preserves_record_order() {
        let mut second = sample_record();
        second.path = "A1,A3".to_string();
        second.length = 2;
        let mut buffer = Vec::new();
        write_path_table(&mut buffer, &[sample_record(), second]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert!(rows[0].starts_with("A1,A2,A3"));
        assert!(rows[1].starts_with("A1,A3"));
    }

    #[test]
    fn hub_table_lists_node_and_degree() {
        let rows = vec![("A2".to_string(), 4), ("A5".to_string(), 3)];
        let mut buffer = Vec::new();
        write_hub_table(&mut buffer, &rows).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "A2\t4\nA5\t3\n");
    }

    #[test]
    fn value_table_pairs_identifiers_with_values() {
        let identifiers = vec!["A1".to_string(), "A2".to_string()];
        let mut buffer = Vec::new();
        write_value_table(&mut buffer, &identifiers, &[0.5, 1.0]).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "A1\t0.50000\nA2\t1.00000\n"
        );
    }
}
