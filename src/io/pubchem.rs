// src/io/pubchem.rs
//
// PubChem PUG-REST JSON payloads:
//   compound/cid/{cid}/record/JSON?record_type=3d
//   compound/cid/{cid}/property/MolecularFormula,Title/JSON
// Both are deserialized into explicit structs, then validated into a Compound.

use crate::error::{MolviewError, Result};
use crate::model::{Atom, Bond, BondType, Compound};
use crate::projection::Point3D;
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

// ============================================================================
// WIRE TYPES
// ============================================================================

#[derive(Debug, Deserialize)]
struct RecordResponse {
    #[serde(rename = "PC_Compounds")]
    pc_compounds: Vec<PcCompound>,
}

#[derive(Debug, Deserialize)]
struct PcCompound {
    #[serde(default)]
    id: Option<PcId>,
    atoms: PcAtoms,
    #[serde(default)]
    bonds: Option<PcBonds>,
    #[serde(default)]
    coords: Vec<PcCoords>,
}

#[derive(Debug, Deserialize)]
struct PcId {
    id: PcCid,
}

#[derive(Debug, Deserialize)]
struct PcCid {
    cid: u64,
}

#[derive(Debug, Deserialize)]
struct PcAtoms {
    aid: Vec<u32>,
    element: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct PcBonds {
    aid1: Vec<u32>,
    aid2: Vec<u32>,
    #[serde(default)]
    order: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct PcCoords {
    #[serde(default)]
    conformers: Vec<PcConformer>,
}

#[derive(Debug, Deserialize)]
struct PcConformer {
    x: Vec<f64>,
    y: Vec<f64>,
    #[serde(default)]
    z: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct PropertyResponse {
    #[serde(rename = "PropertyTable")]
    property_table: PropertyTable,
}

#[derive(Debug, Deserialize)]
struct PropertyTable {
    #[serde(rename = "Properties")]
    properties: Vec<CompoundProperties>,
}

/// Name and formula from the property endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompoundProperties {
    #[serde(rename = "CID", default)]
    pub cid: Option<u64>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "MolecularFormula", default)]
    pub molecular_formula: Option<String>,
}

// ============================================================================
// PARSING
// ============================================================================

/// Parses a 3D record. Name defaults to `CID <n>`, formula to the Hill formula.
pub fn parse_record(json: &str) -> Result<Compound> {
    let response: RecordResponse = serde_json::from_str(json)?;
    let record = response
        .pc_compounds
        .into_iter()
        .next()
        .ok_or_else(|| MolviewError::Parse("record contains no compounds".to_string()))?;

    let cid = record
        .id
        .map(|id| id.id.cid.to_string())
        .unwrap_or_default();

    let conformer = record
        .coords
        .into_iter()
        .next()
        .and_then(|c| c.conformers.into_iter().next())
        .ok_or_else(|| MolviewError::MissingConformer(cid.clone()))?;

    let atoms_data = record.atoms;
    let n = atoms_data.aid.len();
    if atoms_data.element.len() != n {
        return Err(MolviewError::Parse(format!(
            "{} atom ids but {} elements",
            n,
            atoms_data.element.len()
        )));
    }
    // A conformer without z is a 2D depiction
    if conformer.z.is_empty() {
        return Err(MolviewError::MissingConformer(cid));
    }
    if conformer.x.len() != n || conformer.y.len() != n || conformer.z.len() != n {
        return Err(MolviewError::Parse(format!(
            "conformer has {}/{}/{} coordinates for {} atoms",
            conformer.x.len(),
            conformer.y.len(),
            conformer.z.len(),
            n
        )));
    }

    let atoms: Vec<Atom> = (0..n)
        .map(|i| {
            Atom::new(
                atoms_data.aid[i],
                atoms_data.element[i],
                Point3D::new(conformer.x[i], conformer.y[i], conformer.z[i]),
            )
        })
        .collect();

    let bonds = match record.bonds {
        Some(b) => parse_bonds(b)?,
        None => Vec::new(),
    };

    debug!(
        "Parsed PubChem record {}: {} atoms, {} bonds",
        cid,
        atoms.len(),
        bonds.len()
    );

    let name = if cid.is_empty() {
        "Unnamed compound".to_string()
    } else {
        format!("CID {}", cid)
    };
    Compound::new(cid, name, "", atoms, bonds)
}

fn parse_bonds(b: PcBonds) -> Result<Vec<Bond>> {
    if b.aid1.len() != b.aid2.len() {
        return Err(MolviewError::Parse(format!(
            "{} bond starts but {} bond ends",
            b.aid1.len(),
            b.aid2.len()
        )));
    }

    Ok(b
        .aid1
        .iter()
        .zip(&b.aid2)
        .enumerate()
        .map(|(i, (&atom1, &atom2))| {
            let order = b.order.get(i).copied().unwrap_or(1);
            let bond_type = BondType::from_order(order).unwrap_or_else(|| {
                warn!(
                    "Unknown bond order {} for bond {}-{}, drawing as single",
                    order, atom1, atom2
                );
                BondType::Single
            });
            Bond {
                atom1,
                atom2,
                bond_type,
            }
        })
        .collect())
}

pub fn parse_properties(json: &str) -> Result<CompoundProperties> {
    let response: PropertyResponse = serde_json::from_str(json)?;
    response
        .property_table
        .properties
        .into_iter()
        .next()
        .ok_or_else(|| MolviewError::Parse("property table is empty".to_string()))
}

/// Copies title and formula onto the compound when present.
pub fn apply_properties(mut compound: Compound, props: &CompoundProperties) -> Compound {
    if let (Some(cid), false) = (props.cid, compound.id.is_empty()) {
        if cid.to_string() != compound.id {
            warn!(
                "Property table is for CID {} but record is CID {}",
                cid, compound.id
            );
        }
    }
    if let Some(title) = props.title.as_ref().filter(|t| !t.is_empty()) {
        compound.name = title.clone();
    }
    if let Some(formula) = props.molecular_formula.as_ref().filter(|f| !f.is_empty()) {
        compound.formula = formula.clone();
    }
    compound
}

pub fn parse(path: &Path) -> Result<Compound> {
    parse_record(&fs::read_to_string(path)?)
}

pub fn parse_with_properties(path: &Path, properties: &Path) -> Result<Compound> {
    let compound = parse(path)?;
    let props = parse_properties(&fs::read_to_string(properties)?)?;
    Ok(apply_properties(compound, &props))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed PubChem record for formaldehyde (CID 712).
    const FORMALDEHYDE: &str = r#"{
      "PC_Compounds": [{
        "id": { "id": { "cid": 712 } },
        "atoms": { "aid": [1, 2, 3, 4], "element": [8, 6, 1, 1] },
        "bonds": { "aid1": [1, 2, 2], "aid2": [2, 3, 4], "order": [2, 1, 1] },
        "coords": [{
          "type": [2, 5, 255],
          "aid": [1, 2, 3, 4],
          "conformers": [{
            "x": [0.6054, -0.6054, -1.1423, -1.1423],
            "y": [0.0, 0.0, 0.9300, -0.9300],
            "z": [0.0, 0.0, 0.0, 0.0]
          }]
        }]
      }]
    }"#;

    const PROPERTIES: &str = r#"{
      "PropertyTable": { "Properties": [
        { "CID": 712, "MolecularFormula": "CH2O", "Title": "Formaldehyde" }
      ] }
    }"#;

    #[test]
    fn test_parse_record() {
        let c = parse_record(FORMALDEHYDE).unwrap();
        assert_eq!(c.id, "712");
        assert_eq!(c.name, "CID 712");
        assert_eq!(c.formula, "CH2O");
        assert_eq!(c.atoms.len(), 4);
        assert_eq!(c.atoms[0].symbol, "O");
        assert_eq!(c.atoms[1].symbol, "C");
        assert!((c.atoms[2].position.y - 0.93).abs() < 1e-10);
        assert_eq!(c.bonds.len(), 3);
        assert_eq!(c.bonds[0].bond_type, BondType::Double);
        assert_eq!(c.bonds[2].bond_type, BondType::Single);
    }

    #[test]
    fn test_properties_override_name() {
        let c = parse_record(FORMALDEHYDE).unwrap();
        let props = parse_properties(PROPERTIES).unwrap();
        let c = apply_properties(c, &props);
        assert_eq!(c.name, "Formaldehyde");
        assert_eq!(c.formula, "CH2O");
    }

    #[test]
    fn test_missing_conformer() {
        let json = r#"{ "PC_Compounds": [{
          "id": { "id": { "cid": 5 } },
          "atoms": { "aid": [1], "element": [6] }
        }] }"#;
        assert!(matches!(
            parse_record(json),
            Err(MolviewError::MissingConformer(cid)) if cid == "5"
        ));
    }

    #[test]
    fn test_two_dimensional_record_is_rejected() {
        let json = r#"{ "PC_Compounds": [{
          "atoms": { "aid": [1], "element": [6] },
          "coords": [{ "conformers": [{ "x": [0.0], "y": [0.0] }] }]
        }] }"#;
        assert!(matches!(
            parse_record(json),
            Err(MolviewError::MissingConformer(_))
        ));
    }

    #[test]
    fn test_coordinate_count_mismatch() {
        let json = r#"{ "PC_Compounds": [{
          "atoms": { "aid": [1, 2], "element": [6, 8] },
          "coords": [{ "conformers": [{ "x": [0.0], "y": [0.0], "z": [0.0] }] }]
        }] }"#;
        assert!(matches!(parse_record(json), Err(MolviewError::Parse(_))));
    }

    #[test]
    fn test_unknown_bond_order_falls_back_to_single() {
        let json = r#"{ "PC_Compounds": [{
          "atoms": { "aid": [1, 2], "element": [6, 6] },
          "bonds": { "aid1": [1], "aid2": [2], "order": [9] },
          "coords": [{ "conformers": [{ "x": [0.0, 1.5], "y": [0.0, 0.0], "z": [0.0, 0.0] }] }]
        }] }"#;
        let c = parse_record(json).unwrap();
        assert_eq!(c.bonds[0].bond_type, BondType::Single);
        assert_eq!(c.name, "Unnamed compound");
    }

    #[test]
    fn test_bond_endpoint_count_mismatch() {
        let json = r#"{ "PC_Compounds": [{
          "atoms": { "aid": [1, 2, 3], "element": [6, 6, 8] },
          "bonds": { "aid1": [1, 2], "aid2": [2], "order": [1, 1] },
          "coords": [{ "conformers": [{ "x": [0.0, 1.5, 2.9], "y": [0.0, 0.0, 0.0], "z": [0.0, 0.0, 0.0] }] }]
        }] }"#;
        assert!(matches!(parse_record(json), Err(MolviewError::Parse(_))));
    }

    #[test]
    fn test_element_count_mismatch() {
        let json = r#"{ "PC_Compounds": [{
          "atoms": { "aid": [1, 2], "element": [6] },
          "coords": [{ "conformers": [{ "x": [0.0, 1.5], "y": [0.0, 0.0], "z": [0.0, 0.0] }] }]
        }] }"#;
        assert!(matches!(parse_record(json), Err(MolviewError::Parse(_))));
    }

    #[test]
    fn test_missing_orders_default_to_single() {
        let json = r#"{ "PC_Compounds": [{
          "atoms": { "aid": [1, 2, 3], "element": [8, 6, 8] },
          "bonds": { "aid1": [1, 2], "aid2": [2, 3] },
          "coords": [{ "conformers": [{ "x": [-1.16, 0.0, 1.16], "y": [0.0, 0.0, 0.0], "z": [0.0, 0.0, 0.0] }] }]
        }] }"#;
        let c = parse_record(json).unwrap();
        assert_eq!(c.bonds.len(), 2);
        assert!(c.bonds.iter().all(|b| b.bond_type == BondType::Single));
    }

    #[test]
    fn test_parse_with_properties_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let record = dir.path().join("712.json");
        let props = dir.path().join("712_props.json");
        fs::write(&record, FORMALDEHYDE).unwrap();
        fs::write(&props, PROPERTIES).unwrap();

        let c = parse_with_properties(&record, &props).unwrap();
        assert_eq!(c.id, "712");
        assert_eq!(c.name, "Formaldehyde");
        assert_eq!(c.formula, "CH2O");
    }

    #[test]
    fn test_bond_to_missing_atom_is_invalid() {
        let json = r#"{ "PC_Compounds": [{
          "atoms": { "aid": [1, 2], "element": [6, 6] },
          "bonds": { "aid1": [1], "aid2": [3], "order": [1] },
          "coords": [{ "conformers": [{ "x": [0.0, 1.5], "y": [0.0, 0.0], "z": [0.0, 0.0] }] }]
        }] }"#;
        assert!(matches!(parse_record(json), Err(MolviewError::Validation(_))));
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(parse_record("<html>"), Err(MolviewError::Json(_))));
    }
}
