// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpiralTorch — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target family handed to the hollow-box repair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HollowBoxKind {
    A,
    B,
    C,
    D,
    /// Half-integral part of a type C weight.
    Metaplectic,
}

impl HollowBoxKind {
    /// Numeric family code used by external repair procedures (1 through 5).
    pub fn type_code(self) -> u8 {
        match self {
            Self::A => 1,
            Self::B => 2,
            Self::C => 3,
            Self::D => 4,
            Self::Metaplectic => 5,
        }
    }
}

impl fmt::Display for HollowBoxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::Metaplectic => "metaplectic",
        };
        f.write_str(name)
    }
}

/// Repairs a Robinson–Schensted shape into a partition admissible for the
/// requested family, following the hollow-box procedure.
pub trait HollowBoxAdjuster: Send + Sync {
    /// Adjusted partition. The input is never empty.
    fn adjust(&self, shape: &[usize], kind: HollowBoxKind) -> Vec<usize>;

    /// Per-row markers of the hollow boxes that the adjustment touched.
    fn label(&self, shape: &[usize], kind: HollowBoxKind) -> Vec<usize>;
}

/// Leaves shapes untouched. Useful when the shape is already admissible and
/// for exercising the classifier without an external repair procedure.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassThrough;

impl HollowBoxAdjuster for PassThrough {
    fn adjust(&self, shape: &[usize], _kind: HollowBoxKind) -> Vec<usize> {
        shape.to_vec()
    }

    fn label(&self, shape: &[usize], _kind: HollowBoxKind) -> Vec<usize> {
        vec![0; shape.len().max(1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_are_stable() {
        let codes: Vec<u8> = [
            HollowBoxKind::A,
            HollowBoxKind::B,
            HollowBoxKind::C,
            HollowBoxKind::D,
            HollowBoxKind::Metaplectic,
        ]
        .into_iter()
        .map(HollowBoxKind::type_code)
        .collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn pass_through_keeps_shape() {
        let adjuster = PassThrough;
        assert_eq!(adjuster.adjust(&[3, 2, 2], HollowBoxKind::D), vec![3, 2, 2]);
        assert_eq!(adjuster.label(&[3, 2, 2], HollowBoxKind::D), vec![0, 0, 0]);
        assert_eq!(adjuster.label(&[], HollowBoxKind::B), vec![0]);
    }
}
