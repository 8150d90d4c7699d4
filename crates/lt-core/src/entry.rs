// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpiralTorch — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Scalar classification of weight entries.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    Integer,
    HalfInteger,
    Other,
}

/// Classifies a scalar as an integer, a half integer or neither.
pub fn classify(x: f64, tolerance: f64) -> EntryKind {
    let frac = x - x.round();
    if frac.abs() < tolerance {
        EntryKind::Integer
    } else if (frac.abs() - 0.5).abs() < tolerance {
        EntryKind::HalfInteger
    } else {
        EntryKind::Other
    }
}

pub fn is_integer(x: f64, tolerance: f64) -> bool {
    classify(x, tolerance) == EntryKind::Integer
}

/// True when `a` and `b` differ or sum to an integer.
pub fn signed_congruent(a: f64, b: f64, tolerance: f64) -> bool {
    is_integer(a - b, tolerance) || is_integer(a + b, tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-7;

    #[test]
    fn integers_and_halves() {
        assert_eq!(classify(3.0, TOL), EntryKind::Integer);
        assert_eq!(classify(-2.0 + 1e-9, TOL), EntryKind::Integer);
        assert_eq!(classify(2.5, TOL), EntryKind::HalfInteger);
        assert_eq!(classify(-0.5, TOL), EntryKind::HalfInteger);
        assert_eq!(classify(0.3, TOL), EntryKind::Other);
        assert_eq!(classify(1.0 / 3.0, TOL), EntryKind::Other);
    }

    #[test]
    fn congruence_uses_both_signs() {
        assert!(signed_congruent(0.3, 2.3, TOL));
        assert!(signed_congruent(0.3, -1.3, TOL));
        assert!(!signed_congruent(0.3, 0.4, TOL));
    }
}
