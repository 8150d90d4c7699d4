// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpiralTorch — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Collaborators consumed by the orbit classifier.
//!
//! Each collaborator is a trait so callers can inject their own procedure.
//! The crate ships reference implementations for the Robinson–Schensted shape
//! ([`RobinsonSchensted`]) and the domino Robinson–Schensted tableau
//! ([`DominoInsertion`]). The hollow-box repair only ships [`PassThrough`];
//! the real procedure is supplied by the caller.

pub mod domino;
pub mod hollow_box;
pub mod robinson_schensted;
pub mod signed;

pub use domino::{Domino, DominoInsertion, DominoOracle, DominoTableau, Orientation};
pub use hollow_box::{HollowBoxAdjuster, HollowBoxKind, PassThrough};
pub use robinson_schensted::{RobinsonSchensted, TableauBuilder};
pub use signed::{PermutationError, SignedPermutation};
