use super::network::{ResidueInfo, ResidueNetwork};
use nalgebra::DMatrix;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("adjacency matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    #[error("{residues} residue identifiers provided for a {dimension}x{dimension} matrix")]
    Mismatch { residues: usize, dimension: usize },

    #[error("duplicate residue identifier '{0}'")]
    DuplicateIdentifier(String),
}

/// Builds a labeled residue network from an adjacency matrix.
///
/// Nodes are created in matrix row order (the canonical order) and labeled in
/// the same pass; the network is never relabeled afterwards. An edge is added
/// for every non-zero upper-triangle entry, so self-interactions on the
/// diagonal are ignored. The loader guarantees symmetry of file input, and the
/// lower triangle is not consulted.
///
/// # Arguments
///
/// * `matrix` - The square adjacency matrix of interaction strengths.
/// * `residues` - Residue metadata in matrix row order, one entry per row, or
///   `None` to fall back to positional `"1".."N"` identifiers.
///
/// # Errors
///
/// Returns [`BuildError::NotSquare`] for a non-square matrix,
/// [`BuildError::Mismatch`] when the residue count does not equal the matrix
/// dimension, and [`BuildError::DuplicateIdentifier`] when two residues map to
/// the same identifier label.
pub fn build_network(
    matrix: &DMatrix<f64>,
    residues: Option<Vec<ResidueInfo>>,
) -> Result<ResidueNetwork, BuildError> {
    let n = matrix.nrows();
    if matrix.ncols() != n {
        return Err(BuildError::NotSquare {
            rows: n,
            cols: matrix.ncols(),
        });
    }

    let residues = match residues {
        Some(residues) => {
            if residues.len() != n {
                return Err(BuildError::Mismatch {
                    residues: residues.len(),
                    dimension: n,
                });
            }
            residues
        }
        None => (1..=n).map(ResidueInfo::positional).collect(),
    };

    let mut graph = UnGraph::with_capacity(n, 0);
    let mut index = HashMap::with_capacity(n);
    let mut labels = Vec::with_capacity(n);
    for residue in &residues {
        let label = residue.label();
        let node = graph.add_node(label.clone());
        if index.insert(label.clone(), node).is_some() {
            return Err(BuildError::DuplicateIdentifier(label));
        }
        labels.push(label);
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let weight = matrix[(i, j)];
            if weight != 0.0 {
                graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), weight);
            }
        }
    }

    Ok(ResidueNetwork::from_parts(graph, index, residues, labels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_nodes_from_residue_metadata() {
        let matrix = DMatrix::from_row_slice(2, 2, &[0.0, 0.5, 0.5, 0.0]);
        let residues = vec![ResidueInfo::new("A", 1, "MET"), ResidueInfo::new("B", 1, "GLU")];
        let network = build_network(&matrix, Some(residues)).unwrap();
        assert_eq!(network.identifiers(), &["A1".to_string(), "B1".to_string()]);
        assert_eq!(network.edge_count(), 1);
    }

    #[test]
    fn falls_back_to_positional_identifiers() {
        let matrix = DMatrix::from_row_slice(3, 3, &[0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let network = build_network(&matrix, None).unwrap();
        assert_eq!(
            network.identifiers(),
            &["1".to_string(), "2".to_string(), "3".to_string()]
        );
    }

    #[test]
    fn ignores_diagonal_self_interactions() {
        let matrix = DMatrix::from_row_slice(2, 2, &[3.0, 0.0, 0.0, 4.0]);
        let network = build_network(&matrix, None).unwrap();
        assert_eq!(network.edge_count(), 0);
    }

    #[test]
    fn rejects_identifier_count_mismatch() {
        let matrix = DMatrix::zeros(3, 3);
        let residues = vec![ResidueInfo::new("A", 1, "")];
        let err = build_network(&matrix, Some(residues)).unwrap_err();
        assert_eq!(
            err,
            BuildError::Mismatch {
                residues: 1,
                dimension: 3
            }
        );
    }

    #[test]
    fn rejects_non_square_matrix() {
        let matrix = DMatrix::zeros(2, 3);
        let err = build_network(&matrix, None).unwrap_err();
        assert_eq!(err, BuildError::NotSquare { rows: 2, cols: 3 });
    }

    #[test]
    fn rejects_duplicate_identifiers() {
        let matrix = DMatrix::zeros(2, 2);
        let residues = vec![ResidueInfo::new("A", 1, ""), ResidueInfo::new("A", 1, "")];
        let err = build_network(&matrix, Some(residues)).unwrap_err();
        assert_eq!(err, BuildError::DuplicateIdentifier("A1".to_string()));
    }
}
