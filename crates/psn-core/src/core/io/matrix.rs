use nalgebra::DMatrix;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Tolerance used when checking that a loaded matrix is symmetric.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid numeric value '{value}' on line {line}")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line} has {found} columns, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("matrix is not square ({rows} rows, {cols} columns)")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix is not symmetric at row {row}, column {col}")]
    Asymmetric { row: usize, col: usize },

    #[error("matrix file is empty")]
    Empty,
}

/// Reads a whitespace-delimited square symmetric matrix.
///
/// Blank lines are skipped. Every row must have the same number of columns,
/// the final matrix must be square, and entries must mirror across the
/// diagonal; anything else is rejected as malformed input.
///
/// # Errors
///
/// Returns a [`MatrixError`] describing the first offending line or cell.
pub fn read_matrix_from(reader: &mut impl BufRead) -> Result<DMatrix<f64>, MatrixError> {
    let mut values: Vec<f64> = Vec::new();
    let mut cols: Option<usize> = None;
    let mut rows = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let expected = *cols.get_or_insert(fields.len());
        if fields.len() != expected {
            return Err(MatrixError::RaggedRow {
                line: line_num + 1,
                expected,
                found: fields.len(),
            });
        }
        for field in fields {
            let value = field.parse::<f64>().map_err(|_| MatrixError::InvalidNumber {
                line: line_num + 1,
                value: field.to_string(),
            })?;
            values.push(value);
        }
        rows += 1;
    }

    let cols = cols.ok_or(MatrixError::Empty)?;
    if rows != cols {
        return Err(MatrixError::NotSquare { rows, cols });
    }

    let matrix = DMatrix::from_row_iterator(rows, cols, values);
    for i in 0..rows {
        for j in (i + 1)..cols {
            if (matrix[(i, j)] - matrix[(j, i)]).abs() > SYMMETRY_TOLERANCE {
                return Err(MatrixError::Asymmetric { row: i, col: j });
            }
        }
    }
    Ok(matrix)
}

/// Reads a matrix from a file path; see [`read_matrix_from`].
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<DMatrix<f64>, MatrixError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_matrix_from(&mut reader)
}

/// Writes a matrix as whitespace-delimited numeric text, one row per line.
///
/// With `precision = Some(d)` values are rendered with `d` decimal places;
/// with `None` the shortest exact decimal representation is used.
pub fn write_matrix_to(
    matrix: &DMatrix<f64>,
    writer: &mut impl Write,
    precision: Option<usize>,
) -> Result<(), MatrixError> {
    for i in 0..matrix.nrows() {
        for j in 0..matrix.ncols() {
            if j > 0 {
                write!(writer, " ")?;
            }
            match precision {
                Some(d) => write!(writer, "{:.*}", d, matrix[(i, j)])?,
                None => write!(writer, "{}", matrix[(i, j)])?,
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes a matrix to a file path; see [`write_matrix_to`].
pub fn write_matrix<P: AsRef<Path>>(
    matrix: &DMatrix<f64>,
    path: P,
    precision: Option<usize>,
) -> Result<(), MatrixError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_matrix_to(matrix, &mut writer, precision)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(text: &str) -> Result<DMatrix<f64>, MatrixError> {
        read_matrix_from(&mut Cursor::new(text))
    }

    #[test]
    fn reads_square_symmetric_matrix() {
        let matrix = read("0 1 0\n1 0 2.5\n0 2.5 0\n").unwrap();
        assert_eq!(matrix.nrows(), 3);
        assert_eq!(matrix[(1, 2)], 2.5);
        assert_eq!(matrix[(2, 1)], 2.5);
    }

    #[test]
    fn skips_blank_lines() {
        let matrix = read("0 1\n\n1 0\n\n").unwrap();
        assert_eq!(matrix.nrows(), 2);
    }

    #[test]
    fn rejects_non_numeric_field() {
        let err = read("0 x\n1 0\n").unwrap_err();
        assert!(matches!(
            err,
            MatrixError::InvalidNumber { line: 1, ref value } if value == "x"
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = read("0 1\n1\n").unwrap_err();
        assert!(matches!(
            err,
            MatrixError::RaggedRow {
                line: 2,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn rejects_non_square_matrix() {
        let err = read("0 1 0\n1 0 0\n").unwrap_err();
        assert!(matches!(err, MatrixError::NotSquare { rows: 2, cols: 3 }));
    }

    #[test]
    fn rejects_asymmetric_matrix() {
        let err = read("0 1\n2 0\n").unwrap_err();
        assert!(matches!(err, MatrixError::Asymmetric { row: 0, col: 1 }));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(read("").unwrap_err(), MatrixError::Empty));
    }

    #[test]
    fn write_round_trips_through_read() {
        let matrix = DMatrix::from_row_slice(2, 2, &[0.0, 1.5, 1.5, 0.0]);
        let mut buffer = Vec::new();
        write_matrix_to(&matrix, &mut buffer, None).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let reread = read(&text).unwrap();
        assert_eq!(matrix, reread);
    }

    #[test]
    fn write_honors_fixed_precision() {
        let matrix = DMatrix::from_row_slice(1, 1, &[0.25]);
        let mut buffer = Vec::new();
        write_matrix_to(&matrix, &mut buffer, Some(1)).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "0.2\n");
    }

    #[test]
    fn load_matrix_surfaces_missing_file_as_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_matrix(dir.path().join("missing.dat")).unwrap_err();
        assert!(matches!(err, MatrixError::Io(_)));
    }
}
