// src/model/structure.rs

use super::elements;
use crate::config::LabelType;
use crate::error::{MolviewError, Result};
use crate::projection::{Point3D, Positioned};
use crate::utils::linalg;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BondType {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondType {
    /// PubChem bond order code: 1/2/3 multiplicity, 4 aromatic.
    pub fn from_order(order: u8) -> Option<Self> {
        match order {
            1 => Some(BondType::Single),
            2 => Some(BondType::Double),
            3 => Some(BondType::Triple),
            4 => Some(BondType::Aromatic),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// Source atom id (PubChem aid, or 1-based line index for XYZ).
    pub id: u32,
    pub atomic_number: u8,
    pub symbol: String,
    pub position: Point3D,
}

impl Atom {
    pub fn new(id: u32, atomic_number: u8, position: Point3D) -> Self {
        Self {
            id,
            atomic_number,
            symbol: elements::symbol_for(atomic_number),
            position,
        }
    }

    pub fn from_symbol(id: u32, symbol: &str, position: Point3D) -> Self {
        let atomic_number = elements::atomic_number_for(symbol);
        let symbol = match elements::element_by_symbol(symbol) {
            Some(e) => e.symbol.to_string(),
            None => symbol.to_string(),
        };
        Self {
            id,
            atomic_number,
            symbol,
            position,
        }
    }

    /// Element name, falling back to the symbol for unknown elements.
    pub fn name(&self) -> &str {
        elements::element_by_number(self.atomic_number).map_or(self.symbol.as_str(), |e| e.name)
    }

    pub fn label(&self, label_type: LabelType) -> String {
        match label_type {
            LabelType::Symbol => self.symbol.clone(),
            LabelType::Name => self.name().to_string(),
            LabelType::AtomicNumber => self.atomic_number.to_string(),
        }
    }
}

impl Positioned for Atom {
    fn position(&self) -> Point3D {
        self.position
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    pub atom1: u32,
    pub atom2: u32,
    pub bond_type: BondType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Compound {
    pub id: String,
    pub name: String,
    pub formula: String,
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
}

impl Compound {
    /// Builds a compound and validates it. An empty `formula` is replaced by
    /// the Hill formula of `atoms`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        formula: impl Into<String>,
        atoms: Vec<Atom>,
        bonds: Vec<Bond>,
    ) -> Result<Self> {
        let mut compound = Self {
            id: id.into(),
            name: name.into(),
            formula: formula.into(),
            atoms,
            bonds,
        };
        if compound.formula.is_empty() {
            compound.formula = compound.hill_formula();
        }
        compound.validate()?;
        Ok(compound)
    }

    /// Rejects duplicate atom ids, self-bonds and bonds to unknown atoms.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::with_capacity(self.atoms.len());
        for atom in &self.atoms {
            if !ids.insert(atom.id) {
                return Err(MolviewError::Validation(format!(
                    "duplicate atom id {}",
                    atom.id
                )));
            }
        }

        for bond in &self.bonds {
            if bond.atom1 == bond.atom2 {
                return Err(MolviewError::Validation(format!(
                    "atom {} is bonded to itself",
                    bond.atom1
                )));
            }
            for end in [bond.atom1, bond.atom2] {
                if !ids.contains(&end) {
                    return Err(MolviewError::Validation(format!(
                        "bond {}-{} references unknown atom {}",
                        bond.atom1, bond.atom2, end
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn atom(&self, id: u32) -> Option<&Atom> {
        self.atoms.iter().find(|a| a.id == id)
    }

    pub fn centroid(&self) -> Point3D {
        linalg::centroid(self.atoms.iter().map(|a| a.position))
    }

    /// Copy of the compound translated so its centroid sits at the origin.
    pub fn centered(&self) -> Compound {
        let center = self.centroid();
        let mut out = self.clone();
        for atom in &mut out.atoms {
            atom.position = atom.position.offset_by(center);
        }
        out
    }

    /// Hill-system formula: C first, then H, then the rest alphabetically.
    /// Without carbon everything is alphabetical.
    pub fn hill_formula(&self) -> String {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for atom in &self.atoms {
            *counts.entry(atom.symbol.as_str()).or_insert(0) += 1;
        }

        let mut formula = String::new();
        let mut push = |symbol: &str, n: usize| {
            formula.push_str(symbol);
            if n > 1 {
                formula.push_str(&n.to_string());
            }
        };

        if let Some(c) = counts.remove("C") {
            push("C", c);
            if let Some(h) = counts.remove("H") {
                push("H", h);
            }
        }
        for (symbol, n) in counts {
            push(symbol, n);
        }
        formula
    }
}
