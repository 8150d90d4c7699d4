// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpiralTorch — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Nilpotent orbits and Gelfand–Kirillov dimensions of highest-weight modules
//! for the classical Lie algebras of types A, B, C and D.
//!
//! ```
//! use lt_core::{parse_weight, OrbitClassifier};
//!
//! let classifier = OrbitClassifier::default();
//! let weight = parse_weight("3, 2, 5, 1", "A").unwrap();
//! assert_eq!(classifier.classify(&weight).unwrap().parts(), &[2, 1, 1]);
//! assert_eq!(classifier.gk_dimension(&weight).unwrap(), 3);
//! ```

pub mod decompose;
pub mod entry;
pub mod enumerate;
pub mod error;
pub mod gk;
pub mod orbit;
pub mod partition;
pub mod symbol;
pub mod very_even;
pub mod weight;

pub use decompose::{
    antidominant, basic_decomposition, decompose, q_negative, right_minus, tilde,
    WeightDecomposition,
};
pub use entry::{classify as classify_entry, EntryKind};
pub use enumerate::generate_orbits;
pub use error::{OrbitError, OrbitResult};
pub use gk::GkDimensionInfo;
pub use orbit::{NilpotentOrbit, OrbitClassifier, OrbitTrace, PartTrace, UnitTrace};
pub use partition::{AFunctionKind, Partition};
pub use symbol::{to_symbol, Symbol};
pub use very_even::{combine, VeryEvenBreakdown, VeryEvenType};
pub use weight::{parse_weight, Domain, LieType, Weight, WeightKind};
