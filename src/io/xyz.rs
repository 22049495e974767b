use crate::error::{MolviewError, Result};
use crate::model::bonding::{infer_bonds, DEFAULT_TOLERANCE};
use crate::model::{Atom, Compound};
use crate::projection::Point3D;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub fn parse(path: &Path) -> Result<Compound> {
    let text = fs::read_to_string(path)?;
    let id = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();
    parse_str(&text, &id)
}

pub fn parse_str(text: &str, id: &str) -> Result<Compound> {
    let mut lines = text.lines();

    // 1. Number of Atoms
    let n_atoms_str = lines
        .next()
        .ok_or_else(|| MolviewError::Parse("Empty XYZ file".to_string()))?;
    let n_atoms: usize = n_atoms_str
        .trim()
        .parse()
        .map_err(|_| MolviewError::Parse(format!("Invalid atom count {:?}", n_atoms_str.trim())))?;

    // 2. Comment line doubles as the compound name
    let comment = lines.next().unwrap_or_default().trim();
    let name = if comment.is_empty() { id } else { comment };

    // 3. Atoms
    let mut atoms = Vec::with_capacity(n_atoms);
    for (i, line) in lines.enumerate() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }
        if parts.len() < 4 {
            return Err(MolviewError::Parse(format!(
                "Line {}: expected `symbol x y z`, got {:?}",
                i + 3,
                line.trim()
            )));
        }

        let coord = |s: &str, axis: &str| -> Result<f64> {
            s.parse()
                .map_err(|_| MolviewError::Parse(format!("Invalid {} {:?}", axis, s)))
        };
        let x = coord(parts[1], "X")?;
        let y = coord(parts[2], "Y")?;
        let z = coord(parts[3], "Z")?;

        atoms.push(Atom::from_symbol(
            atoms.len() as u32 + 1,
            parts[0],
            Point3D::new(x, y, z),
        ));
    }

    if atoms.len() != n_atoms {
        return Err(MolviewError::Parse(format!(
            "Header declares {} atoms, found {}",
            n_atoms,
            atoms.len()
        )));
    }

    // XYZ carries no connectivity
    let bonds = infer_bonds(&atoms, DEFAULT_TOLERANCE);
    Compound::new(id, name, "", atoms, bonds)
}

pub fn write(path: &Path, compound: &Compound) -> Result<()> {
    fs::write(path, to_xyz_string(compound))?;
    Ok(())
}

pub fn to_xyz_string(compound: &Compound) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", compound.atoms.len());
    let _ = writeln!(out, "{}", compound.name);
    for atom in &compound.atoms {
        let p = atom.position;
        let _ = writeln!(
            out,
            "{:<3} {:>12.6} {:>12.6} {:>12.6}",
            atom.symbol, p.x, p.y, p.z
        );
    }
    out
}
