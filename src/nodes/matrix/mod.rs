//! Matrix node implementations

pub mod basis_change;

pub use basis_change::BasisChangeNodeFactory;
