//src/model/mod.rs
pub mod bonding;
pub mod elements;
pub mod structure;

// Re-exports for cleaner imports
pub use elements::{color_for, element_by_number, element_by_symbol};
pub use structure::{Atom, Bond, BondType, Compound};
