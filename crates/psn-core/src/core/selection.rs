use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("residue '{0}' is not in the network")]
    UnknownResidue(String),

    #[error("range '{0}' runs against the residue order")]
    InvertedRange(String),

    #[error("selection is empty")]
    Empty,
}

/// Expands a residue selection string into identifier labels.
///
/// A selection is a comma-separated list of items; each item is either a
/// single identifier (`"A57"`) or an inclusive range (`"A1:A10"`) expanded
/// along the canonical identifier order. Duplicates are dropped, keeping the
/// first occurrence.
///
/// # Arguments
///
/// * `input` - The selection string, e.g. `"A1:A2,A57"`.
/// * `identifiers` - All identifiers of the network in canonical order.
///
/// # Errors
///
/// Returns [`SelectionError::UnknownResidue`] for identifiers absent from the
/// network, [`SelectionError::InvertedRange`] when a range's end precedes its
/// start, and [`SelectionError::Empty`] for a blank selection.
pub fn expand_selection(
    input: &str,
    identifiers: &[String],
) -> Result<Vec<String>, SelectionError> {
    let position = |label: &str| -> Result<usize, SelectionError> {
        identifiers
            .iter()
            .position(|id| id == label)
            .ok_or_else(|| SelectionError::UnknownResidue(label.to_string()))
    };

    let mut selected: Vec<String> = Vec::new();
    let mut push_unique = |label: &str| {
        if !selected.iter().any(|s| s == label) {
            selected.push(label.to_string());
        }
    };

    for item in input.split(',') {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        match item.split_once(':') {
            Some((start, end)) => {
                let start_pos = position(start.trim())?;
                let end_pos = position(end.trim())?;
                if end_pos < start_pos {
                    return Err(SelectionError::InvertedRange(item.to_string()));
                }
                for label in &identifiers[start_pos..=end_pos] {
                    push_unique(label);
                }
            }
            None => {
                position(item)?;
                push_unique(item);
            }
        }
    }

    if selected.is_empty() {
        return Err(SelectionError::Empty);
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn expands_ranges_and_single_items() {
        let identifiers = ids(&["A1", "A2", "A3", "A57", "B1042"]);
        let selection = expand_selection("A1:A2,A57", &identifiers).unwrap();
        assert_eq!(selection, ids(&["A1", "A2", "A57"]));
    }

    #[test]
    fn range_follows_canonical_order_not_numbering() {
        let identifiers = ids(&["A1", "A5", "A9"]);
        let selection = expand_selection("A1:A9", &identifiers).unwrap();
        assert_eq!(selection, ids(&["A1", "A5", "A9"]));
    }

    #[test]
    fn deduplicates_keeping_first_occurrence() {
        let identifiers = ids(&["A1", "A2", "A3"]);
        let selection = expand_selection("A2,A1:A3,A2", &identifiers).unwrap();
        assert_eq!(selection, ids(&["A2", "A1", "A3"]));
    }

    #[test]
    fn rejects_unknown_residues() {
        let identifiers = ids(&["A1", "A2"]);
        let err = expand_selection("A1,C9", &identifiers).unwrap_err();
        assert_eq!(err, SelectionError::UnknownResidue("C9".to_string()));
    }

    #[test]
    fn rejects_inverted_ranges() {
        let identifiers = ids(&["A1", "A2", "A3"]);
        let err = expand_selection("A3:A1", &identifiers).unwrap_err();
        assert_eq!(err, SelectionError::InvertedRange("A3:A1".to_string()));
    }

    #[test]
    fn rejects_empty_selection() {
        let identifiers = ids(&["A1"]);
        assert_eq!(
            expand_selection(" , ", &identifiers).unwrap_err(),
            SelectionError::Empty
        );
    }
}
