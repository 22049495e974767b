// src/model/bonding.rs
//
// Distance-based bond perception for inputs that carry coordinates only (XYZ).

use super::elements::covalent_radius_for;
use super::structure::{Atom, Bond, BondType};

/// Default slack on the covalent-radius sum.
pub const DEFAULT_TOLERANCE: f64 = 1.15;

/// Closer than this (Angstroms) is treated as overlapping atoms, not a bond.
const MIN_BOND_DIST: f64 = 0.4;

/// Bonds every pair whose distance lies between `MIN_BOND_DIST` and
/// `(r1 + r2) * tolerance`. All inferred bonds are single.
pub fn infer_bonds(atoms: &[Atom], tolerance: f64) -> Vec<Bond> {
    let radii: Vec<f64> = atoms.iter().map(|a| covalent_radius_for(&a.symbol)).collect();
    let mut bonds = Vec::new();

    for (i, a1) in atoms.iter().enumerate() {
        let p1 = a1.position.to_vector();
        for (j, a2) in atoms.iter().enumerate().skip(i + 1) {
            let dist = (a2.position.to_vector() - p1).norm();
            let max_bond_dist = (radii[i] + radii[j]) * tolerance;
            if dist > MIN_BOND_DIST && dist < max_bond_dist {
                bonds.push(Bond {
                    atom1: a1.id,
                    atom2: a2.id,
                    bond_type: BondType::Single,
                });
            }
        }
    }
    bonds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::Point3D;

    #[test]
    fn test_water_bonds() {
        let atoms = vec![
            Atom::from_symbol(1, "O", Point3D::new(0.0, 0.0, 0.0)),
            Atom::from_symbol(2, "H", Point3D::new(0.96, 0.0, 0.0)),
            Atom::from_symbol(3, "H", Point3D::new(-0.24, 0.93, 0.0)),
        ];
        let bonds = infer_bonds(&atoms, DEFAULT_TOLERANCE);
        // O-H twice; the H...H distance (1.5 A) is too long
        assert_eq!(bonds.len(), 2);
        assert!(bonds.iter().all(|b| b.atom1 == 1));
    }

    #[test]
    fn test_overlapping_atoms_are_not_bonded() {
        let atoms = vec![
            Atom::from_symbol(1, "C", Point3D::new(0.0, 0.0, 0.0)),
            Atom::from_symbol(2, "C", Point3D::new(0.1, 0.0, 0.0)),
        ];
        assert!(infer_bonds(&atoms, DEFAULT_TOLERANCE).is_empty());
    }
}
