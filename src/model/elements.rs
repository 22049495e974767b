// src/model/elements.rs

/// Symbol, name and CPK colour for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementInfo {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Covalent radius in Angstroms.
    pub covalent_radius: f64,
    /// CPK colour as 8-bit RGB.
    pub rgb: (u8, u8, u8),
}

impl ElementInfo {
    /// CPK colour with channels in `0.0..=1.0`, as cairo expects.
    pub fn color(&self) -> (f64, f64, f64) {
        to_unit_rgb(self.rgb)
    }
}

/// Colour used for elements missing from the table (#808080).
pub const DEFAULT_ELEMENT_RGB: (u8, u8, u8) = (0x80, 0x80, 0x80);

fn to_unit_rgb((r, g, b): (u8, u8, u8)) -> (f64, f64, f64) {
    (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
}

const fn rgb(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    (r, g, b)
}

const fn el(
    atomic_number: u8,
    symbol: &'static str,
    name: &'static str,
    covalent_radius: f64,
    rgb: (u8, u8, u8),
) -> ElementInfo {
    ElementInfo {
        atomic_number,
        symbol,
        name,
        covalent_radius,
        rgb,
    }
}

// Radii are covalent radii. Colours are standard CPK/Jmol.
static ELEMENTS: &[ElementInfo] = &[
    // --- Period 1 ---
    el(1, "H", "Hydrogen", 0.37, rgb(0xFF, 0xFF, 0xFF)),
    el(2, "He", "Helium", 0.32, rgb(0xD9, 0xFF, 0xFF)),
    // --- Period 2 ---
    el(3, "Li", "Lithium", 1.34, rgb(0xCC, 0x80, 0xFF)),
    el(4, "Be", "Beryllium", 0.90, rgb(0xC2, 0xFF, 0x00)),
    el(5, "B", "Boron", 0.82, rgb(0xFF, 0xB5, 0xB5)),
    el(6, "C", "Carbon", 0.77, rgb(0x90, 0x90, 0x90)),
    el(7, "N", "Nitrogen", 0.75, rgb(0x30, 0x50, 0xF8)),
    el(8, "O", "Oxygen", 0.73, rgb(0xFF, 0x0D, 0x0D)),
    el(9, "F", "Fluorine", 0.71, rgb(0x90, 0xE0, 0x50)),
    el(10, "Ne", "Neon", 0.69, rgb(0xB3, 0xE3, 0xF5)),
    // --- Period 3 ---
    el(11, "Na", "Sodium", 1.54, rgb(0xAB, 0x5C, 0xF2)),
    el(12, "Mg", "Magnesium", 1.30, rgb(0x8A, 0xFF, 0x00)),
    el(13, "Al", "Aluminium", 1.18, rgb(0xBF, 0xA6, 0xA6)),
    el(14, "Si", "Silicon", 1.11, rgb(0xF0, 0xC8, 0xA0)),
    el(15, "P", "Phosphorus", 1.06, rgb(0xFF, 0x80, 0x00)),
    el(16, "S", "Sulfur", 1.02, rgb(0xFF, 0xFF, 0x30)),
    el(17, "Cl", "Chlorine", 0.99, rgb(0x1F, 0xF0, 0x1F)),
    el(18, "Ar", "Argon", 0.97, rgb(0x80, 0xD1, 0xE3)),
    // --- Period 4 ---
    el(19, "K", "Potassium", 1.96, rgb(0x8F, 0x40, 0xD4)),
    el(20, "Ca", "Calcium", 1.74, rgb(0x3D, 0xFF, 0x00)),
    el(21, "Sc", "Scandium", 1.44, rgb(0xE6, 0xE6, 0xE6)),
    el(22, "Ti", "Titanium", 1.36, rgb(0xBF, 0xC2, 0xC7)),
    el(23, "V", "Vanadium", 1.25, rgb(0xA6, 0xA6, 0xAB)),
    el(24, "Cr", "Chromium", 1.27, rgb(0x8A, 0x99, 0xC7)),
    el(25, "Mn", "Manganese", 1.39, rgb(0x9C, 0x7A, 0xC7)),
    el(26, "Fe", "Iron", 1.25, rgb(0xE0, 0x66, 0x33)),
    el(27, "Co", "Cobalt", 1.26, rgb(0xF0, 0x90, 0xA0)),
    el(28, "Ni", "Nickel", 1.21, rgb(0x50, 0xD0, 0x50)),
    el(29, "Cu", "Copper", 1.38, rgb(0xC8, 0x80, 0x33)),
    el(30, "Zn", "Zinc", 1.31, rgb(0x7D, 0x80, 0xB0)),
    el(31, "Ga", "Gallium", 1.26, rgb(0xC2, 0x8F, 0x8F)),
    el(32, "Ge", "Germanium", 1.22, rgb(0x66, 0x8F, 0x8F)),
    el(33, "As", "Arsenic", 1.19, rgb(0xBD, 0x80, 0xE3)),
    el(34, "Se", "Selenium", 1.16, rgb(0xFF, 0xA1, 0x00)),
    el(35, "Br", "Bromine", 1.14, rgb(0xA6, 0x29, 0x29)),
    el(36, "Kr", "Krypton", 1.10, rgb(0x5C, 0xB8, 0xD1)),
    // --- Selected heavier ---
    el(53, "I", "Iodine", 1.33, rgb(0x94, 0x00, 0x94)),
];

pub fn element_by_number(atomic_number: u8) -> Option<&'static ElementInfo> {
    ELEMENTS.iter().find(|e| e.atomic_number == atomic_number)
}

pub fn element_by_symbol(symbol: &str) -> Option<&'static ElementInfo> {
    ELEMENTS
        .iter()
        .find(|e| e.symbol.eq_ignore_ascii_case(symbol))
}

/// Symbol for an atomic number; unknown numbers become `Element{n}`.
pub fn symbol_for(atomic_number: u8) -> String {
    match element_by_number(atomic_number) {
        Some(e) => e.symbol.to_string(),
        None => format!("Element{}", atomic_number),
    }
}

/// Returns the Atomic Number (Z) for a given element symbol, 0 if unknown.
pub fn atomic_number_for(symbol: &str) -> u8 {
    element_by_symbol(symbol).map_or(0, |e| e.atomic_number)
}

/// Covalent radius in Angstroms, 1.0 for unknown elements.
pub fn covalent_radius_for(symbol: &str) -> f64 {
    element_by_symbol(symbol).map_or(1.0, |e| e.covalent_radius)
}

pub fn color_for(symbol: &str) -> (f64, f64, f64) {
    element_by_symbol(symbol).map_or_else(|| to_unit_rgb(DEFAULT_ELEMENT_RGB), |e| e.color())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_ways() {
        assert_eq!(symbol_for(6), "C");
        assert_eq!(symbol_for(17), "Cl");
        assert_eq!(atomic_number_for("O"), 8);
        assert_eq!(atomic_number_for("br"), 35);
    }

    #[test]
    fn test_unknown_element() {
        assert_eq!(symbol_for(118), "Element118");
        assert_eq!(atomic_number_for("Xx"), 0);
        let (r, g, b) = color_for("Xx");
        assert!((r - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!((r, g), (g, b));
    }

    #[test]
    fn test_cpk_colors() {
        assert_eq!(color_for("H"), (1.0, 1.0, 1.0));
        let (r, g, b) = color_for("N");
        assert!((r - 0x30 as f64 / 255.0).abs() < 1e-12);
        assert!((g - 0x50 as f64 / 255.0).abs() < 1e-12);
        assert!((b - 0xF8 as f64 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_covalent_radii() {
        assert_eq!(covalent_radius_for("C"), 0.77);
        assert_eq!(covalent_radius_for("Xx"), 1.0);
    }

    #[test]
    fn test_table_is_unique() {
        for (i, a) in ELEMENTS.iter().enumerate() {
            for b in &ELEMENTS[i + 1..] {
                assert_ne!(a.atomic_number, b.atomic_number);
                assert_ne!(a.symbol, b.symbol);
            }
        }
    }
}
