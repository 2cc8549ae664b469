use crate::core::graph::network::ResidueInfo;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: PdbParseErrorKind },

    #[error("structure has {residues} residues but {values} annotation values were provided")]
    ResidueCountMismatch { residues: usize, values: usize },

    #[error("no ATOM or HETATM records found in the structure")]
    NoResidues,
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Line is too short for an ATOM/HETATM record (must be at least 27 chars)")]
    LineTooShort,
    #[error("Invalid residue sequence number in columns 23-26 (value: '{value}')")]
    InvalidResidueNumber { value: String },
    #[error("Record contains non-ASCII characters")]
    NonAscii,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn is_atom_record(line: &str) -> bool {
    line.starts_with("ATOM") || line.starts_with("HETATM")
}

/// The residue-identity key of one atom record: chain (with segment-id
/// fallback), sequence number, and insertion code.
fn residue_key(line: &str, line_num: usize) -> Result<(String, isize, char), PdbError> {
    if !line.is_ascii() {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::NonAscii,
        });
    }
    if line.len() < 27 {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::LineTooShort,
        });
    }
    let mut chain = slice_and_trim(line, 21, 22).to_string();
    if chain.is_empty() {
        chain = slice_and_trim(line, 72, 76).to_string();
    }
    let seq_str = slice_and_trim(line, 22, 26);
    let seqnum: isize = seq_str.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidResidueNumber {
            value: seq_str.to_string(),
        },
    })?;
    let icode = line.as_bytes()[26] as char;
    Ok((chain, seqnum, icode))
}

/// Extracts one [`ResidueInfo`] per structural residue, in encounter order.
///
/// Only the first model is read; parsing stops at the first `ENDMDL` record.
/// A new residue starts whenever the (chain, sequence number, insertion code)
/// key of an ATOM/HETATM record changes. The chain falls back to the segment
/// identifier when the chain column is blank.
///
/// # Errors
///
/// Returns [`PdbError::Parse`] for malformed atom records and
/// [`PdbError::NoResidues`] when the file contains no atom records at all.
pub fn read_residues_from(reader: &mut impl BufRead) -> Result<Vec<ResidueInfo>, PdbError> {
    let mut residues = Vec::new();
    let mut last_key: Option<(String, isize, char)> = None;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.starts_with("ENDMDL") {
            break;
        }
        if !is_atom_record(&line) {
            continue;
        }
        let key = residue_key(&line, line_num + 1)?;
        if last_key.as_ref() != Some(&key) {
            let name = slice_and_trim(&line, 17, 20);
            residues.push(ResidueInfo::new(key.0.clone(), key.1, name));
            last_key = Some(key);
        }
    }

    if residues.is_empty() {
        return Err(PdbError::NoResidues);
    }
    Ok(residues)
}

/// Reads residues from a file path; see [`read_residues_from`].
pub fn read_residues<P: AsRef<Path>>(path: P) -> Result<Vec<ResidueInfo>, PdbError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_residues_from(&mut reader)
}

/// Writes a copy of a structure with the B-factor column replaced by a
/// per-residue scalar value.
///
/// `values` must hold one value per residue of the first model, aligned to
/// encounter order (the order produced by [`read_residues`]); every atom of a
/// residue receives that residue's value in columns 61-66. All other lines
/// are copied verbatim, as are atom records after the first `ENDMDL`.
///
/// # Errors
///
/// Returns [`PdbError::ResidueCountMismatch`] when the value count differs
/// from the structure's residue count, and [`PdbError::Parse`] for malformed
/// atom records.
pub fn replace_bfactor_column<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    values: &[f64],
) -> Result<(), PdbError> {
    let reader = BufReader::new(File::open(input)?);
    let mut writer = BufWriter::new(File::create(output)?);

    let mut last_key: Option<(String, isize, char)> = None;
    let mut residue_index: usize = 0;
    let mut seen_residues: usize = 0;
    let mut first_model_done = false;

    for (line_num, line) in reader.lines().enumerate() {
        let mut line = line?;
        if line.starts_with("ENDMDL") {
            first_model_done = true;
        }
        if !first_model_done && is_atom_record(&line) {
            let key = residue_key(&line, line_num + 1)?;
            if last_key.as_ref() != Some(&key) {
                residue_index = seen_residues;
                seen_residues += 1;
                last_key = Some(key);
            }
            if residue_index >= values.len() {
                return Err(PdbError::ResidueCountMismatch {
                    residues: seen_residues,
                    values: values.len(),
                });
            }
            if line.len() < 66 {
                line = format!("{line:<66}");
            }
            line.replace_range(60..66, &format!("{:6.2}", values[residue_index]));
        }
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    if seen_residues != values.len() {
        return Err(PdbError::ResidueCountMismatch {
            residues: seen_residues,
            values: values.len(),
        });
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn atom_line(serial: usize, name: &str, resname: &str, chain: char, resseq: isize) -> String {
        let mut line = String::new();
        line.push_str("ATOM  ");
        line.push_str(&format!("{serial:>5}"));
        line.push(' ');
        line.push_str(&format!("{name:<4}"));
        line.push(' '); // altLoc
        line.push_str(&format!("{resname:>3}"));
        line.push(' ');
        line.push(chain);
        line.push_str(&format!("{resseq:>4}"));
        line.push(' '); // iCode
        line.push_str("   ");
        line.push_str(&format!("{:>8.3}{:>8.3}{:>8.3}", 1.0, 2.0, 3.0));
        line.push_str(&format!("{:>6.2}{:>6.2}", 1.0, 0.0));
        line
    }

    fn two_chain_structure() -> String {
        [
            "REMARK test structure".to_string(),
            atom_line(1, "N", "ALA", 'A', 1),
            atom_line(2, "CA", "ALA", 'A', 1),
            atom_line(3, "N", "GLY", 'A', 2),
            "TER".to_string(),
            atom_line(4, "N", "SER", 'B', 1),
            "END".to_string(),
        ]
        .join("\n")
    }

    #[test]
    fn reads_residues_in_encounter_order() {
        let residues = read_residues_from(&mut Cursor::new(two_chain_structure())).unwrap();
        assert_eq!(residues.len(), 3);
        assert_eq!(residues[0], ResidueInfo::new("A", 1, "ALA"));
        assert_eq!(residues[1], ResidueInfo::new("A", 2, "GLY"));
        assert_eq!(residues[2], ResidueInfo::new("B", 1, "SER"));
        assert_eq!(residues[2].label(), "B1");
    }

    #[test]
    fn stops_reading_at_first_endmdl() {
        let text = [
            atom_line(1, "N", "ALA", 'A', 1),
            "ENDMDL".to_string(),
            atom_line(2, "N", "GLY", 'A', 2),
        ]
        .join("\n");
        let residues = read_residues_from(&mut Cursor::new(text)).unwrap();
        assert_eq!(residues.len(), 1);
    }

    #[test]
    fn rejects_structures_without_atom_records() {
        let err = read_residues_from(&mut Cursor::new("REMARK nothing\nEND\n")).unwrap_err();
        assert!(matches!(err, PdbError::NoResidues));
    }

    #[test]
    fn rejects_truncated_atom_records() {
        let err = read_residues_from(&mut Cursor::new("ATOM      1  N\n")).unwrap_err();
        assert!(matches!(
            err,
            PdbError::Parse {
                line: 1,
                kind: PdbParseErrorKind::LineTooShort
            }
        ));
    }

    #[test]
    fn replace_bfactor_writes_per_residue_values() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.pdb");
        let output = dir.path().join("out.pdb");
        std::fs::write(&input, two_chain_structure()).unwrap();

        replace_bfactor_column(&input, &output, &[1.0, 2.0, 3.0]).unwrap();

        let annotated = std::fs::read_to_string(&output).unwrap();
        let bfactors: Vec<&str> = annotated
            .lines()
            .filter(|l| l.starts_with("ATOM"))
            .map(|l| l[60..66].trim())
            .collect();
        assert_eq!(bfactors, vec!["1.00", "1.00", "2.00", "3.00"]);
    }

    #[test]
    fn replace_bfactor_rejects_value_count_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.pdb");
        let output = dir.path().join("out.pdb");
        std::fs::write(&input, two_chain_structure()).unwrap();

        let err = replace_bfactor_column(&input, &output, &[1.0]).unwrap_err();
        assert!(matches!(err, PdbError::ResidueCountMismatch { .. }));
    }
}
