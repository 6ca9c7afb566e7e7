//! Fixed-column structural record parser (PDB-style).
//!
//! Only `ATOM` and `HETATM` records are decoded; every other line is
//! ignored. Subfields live at fixed character columns, NOT whitespace
//! boundaries — two atoms whose name and residue columns run together
//! still decode correctly, which is the whole point of the format.

use glam::Vec3;

use crate::element::Element;
use crate::error::MolgeomError;
use crate::structure::Atom;

/// Record-type token for standard atoms (columns 0..6, trailing spaces
/// significant).
const RECORD_ATOM: &str = "ATOM  ";
/// Record-type token for heteroatoms (ligands, solvent, ions).
const RECORD_HETATM: &str = "HETATM";

/// Chain identifier assigned when the chain column is blank.
pub const DEFAULT_CHAIN_ID: &str = "A";

/// Slice a fixed column range out of a record line, trimmed.
///
/// Short lines are legal: a range that falls past the end of the line
/// reads as empty rather than failing.
fn column(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end.min(line.len())).unwrap_or("").trim()
}

/// Parse a required integer column. An empty field reads as zero; a
/// non-empty unparsable field is a record-level failure.
fn column_int(
    line: &str,
    range: (usize, usize),
    line_num: usize,
    field: &'static str,
) -> Result<i32, MolgeomError> {
    let text = column(line, range.0, range.1);
    if text.is_empty() {
        return Ok(0);
    }
    text.parse().map_err(|_| MolgeomError::MalformedRecord {
        line: line_num,
        field,
        value: text.to_owned(),
    })
}

/// Parse a required float column. Same empty/failure semantics as
/// [`column_int`].
fn column_float(
    line: &str,
    range: (usize, usize),
    line_num: usize,
    field: &'static str,
) -> Result<f32, MolgeomError> {
    let text = column(line, range.0, range.1);
    if text.is_empty() {
        return Ok(0.0);
    }
    text.parse().map_err(|_| MolgeomError::MalformedRecord {
        line: line_num,
        field,
        value: text.to_owned(),
    })
}

/// Decode one `ATOM`/`HETATM` line into an [`Atom`].
fn parse_record(line: &str, line_num: usize) -> Result<Atom, MolgeomError> {
    let serial = column_int(line, (6, 11), line_num, "atom serial")?;
    let name = column(line, 12, 16).to_owned();
    let res_name = column(line, 17, 20).to_owned();
    let chain_col = column(line, 21, 22);
    let chain_id = if chain_col.is_empty() {
        DEFAULT_CHAIN_ID.to_owned()
    } else {
        chain_col.to_owned()
    };
    let res_seq = column_int(line, (22, 26), line_num, "residue sequence")?;
    let x = column_float(line, (30, 38), line_num, "x coordinate")?;
    let y = column_float(line, (38, 46), line_num, "y coordinate")?;
    let z = column_float(line, (46, 54), line_num, "z coordinate")?;

    // Explicit element column wins; otherwise guess from the atom name.
    let element = Element::from_symbol(column(line, 76, 78))
        .unwrap_or_else(|| Element::guess_from_name(&name));

    Ok(Atom {
        serial,
        name,
        res_name,
        chain_id,
        res_seq,
        position: Vec3::new(x, y, z),
        element,
    })
}

/// Parse structural text into an ordered atom sequence.
///
/// Lines that are not `ATOM`/`HETATM` records are skipped silently; text
/// with no matching records yields an empty vec, not an error. The parse
/// is all-or-nothing: the first malformed numeric field aborts it.
///
/// # Errors
/// Returns [`MolgeomError::MalformedRecord`] when a required numeric
/// column holds non-numeric content.
pub fn parse_structure(text: &str) -> Result<Vec<Atom>, MolgeomError> {
    let mut atoms = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let record_type = line.get(0..6).unwrap_or("");
        if record_type == RECORD_ATOM || record_type == RECORD_HETATM {
            atoms.push(parse_record(line, idx + 1)?);
        }
    }
    log::debug!("parsed {} atom records", atoms.len());
    Ok(atoms)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Column-exact ATOM line for an alanine alpha-carbon.
    const CA_LINE: &str =
        "ATOM      2  CA  ALA A   1      11.000  22.500 -33.250  1.00  0.00           C  ";

    #[test]
    fn decodes_fixed_columns_exactly() {
        let atoms = parse_structure(CA_LINE).unwrap();
        assert_eq!(atoms.len(), 1);
        let a = &atoms[0];
        assert_eq!(a.serial, 2);
        assert_eq!(a.name, "CA");
        assert_eq!(a.res_name, "ALA");
        assert_eq!(a.chain_id, "A");
        assert_eq!(a.res_seq, 1);
        assert_eq!(a.position, Vec3::new(11.0, 22.5, -33.25));
        assert_eq!(a.element, Element::C);
    }

    #[test]
    fn hetatm_records_are_decoded() {
        let line =
            "HETATM  100  O   HOH B  42       1.000   2.000   3.000  1.00  0.00           O  ";
        let atoms = parse_structure(line).unwrap();
        assert_eq!(atoms.len(), 1);
        assert_eq!(atoms[0].chain_id, "B");
        assert_eq!(atoms[0].element, Element::O);
    }

    #[test]
    fn non_matching_lines_are_ignored() {
        let text = format!(
            "HEADER    TEST\nREMARK    nothing\n{CA_LINE}\nTER\nEND\n"
        );
        let atoms = parse_structure(&text).unwrap();
        assert_eq!(atoms.len(), 1);
    }

    #[test]
    fn atom_prefix_must_match_six_columns() {
        // "ATOMIC" shares the first four characters but is not a record.
        let text = "ATOMIC    1  CA  ALA A   1       0.0     0.0     0.0";
        assert!(parse_structure(text).unwrap().is_empty());
        // A bare "ATOM" line is too short to carry the record token.
        assert!(parse_structure("ATOM").unwrap().is_empty());
    }

    #[test]
    fn short_line_reads_missing_columns_as_defaults() {
        // Line ends right after the coordinates; no element column.
        let line = "ATOM      1  N   GLY A   1       1.500   0.000   0.000";
        let atoms = parse_structure(line).unwrap();
        assert_eq!(atoms[0].position.x, 1.5);
        // Element guessed from the atom name's leading character.
        assert_eq!(atoms[0].element, Element::N);
    }

    #[test]
    fn blank_chain_defaults_to_a() {
        let line = "ATOM      1  CA  ALA     1       0.000   0.000   0.000";
        let atoms = parse_structure(line).unwrap();
        assert_eq!(atoms[0].chain_id, "A");
    }

    #[test]
    fn empty_numeric_columns_read_as_zero() {
        // Serial and resSeq columns blank, coordinates absent entirely.
        let line = "ATOM         CA  ALA A";
        let atoms = parse_structure(line).unwrap();
        assert_eq!(atoms[0].serial, 0);
        assert_eq!(atoms[0].res_seq, 0);
        assert_eq!(atoms[0].position, Vec3::ZERO);
    }

    #[test]
    fn malformed_numeric_field_aborts_whole_parse() {
        let bad = "ATOM      1  CA  ALA A   1      xx.xxx   0.000   0.000";
        let text = format!("{CA_LINE}\n{bad}");
        let err = parse_structure(&text).unwrap_err();
        match err {
            MolgeomError::MalformedRecord { line, field, value } => {
                assert_eq!(line, 2);
                assert_eq!(field, "x coordinate");
                assert_eq!(value, "xx.xxx");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(parse_structure("").unwrap().is_empty());
        assert!(parse_structure("HEADER only\n").unwrap().is_empty());
    }

    #[test]
    fn hydrogen_guessed_from_name_when_element_blank() {
        let line = "ATOM      9  HB1 ALA A   1       0.000   0.000   0.000";
        let atoms = parse_structure(line).unwrap();
        assert_eq!(atoms[0].element, Element::H);
    }
}
