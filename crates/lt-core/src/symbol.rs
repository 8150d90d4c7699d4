// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpiralTorch — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Lusztig symbols of orbit labels for types B, C and D.

use crate::error::{invariant, unsupported, OrbitError, OrbitResult};
use crate::weight::LieType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-row symbol attached to a partition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    top: Vec<usize>,
    bottom: Vec<usize>,
    lie_type: LieType,
    special: bool,
}

impl Symbol {
    pub fn new(top: Vec<usize>, bottom: Vec<usize>, lie_type: LieType) -> Self {
        Self {
            top,
            bottom,
            lie_type,
            special: false,
        }
    }

    pub fn top(&self) -> &[usize] {
        &self.top
    }

    pub fn bottom(&self) -> &[usize] {
        &self.bottom
    }

    pub fn lie_type(&self) -> LieType {
        self.lie_type
    }

    pub fn is_special(&self) -> bool {
        self.special
    }

    /// Interleaves both rows in ascending order: positions 0, 2, 4, … go to
    /// the top row and the rest to the bottom.
    pub fn make_special(&self) -> Symbol {
        let mut merged: Vec<usize> = self.top.iter().chain(&self.bottom).copied().collect();
        merged.sort_unstable();
        let (top, bottom): (Vec<(usize, usize)>, Vec<(usize, usize)>) =
            merged.into_iter().enumerate().partition(|(i, _)| i % 2 == 0);
        Symbol {
            top: top.into_iter().map(|(_, v)| v).collect(),
            bottom: bottom.into_iter().map(|(_, v)| v).collect(),
            lie_type: self.lie_type,
            special: true,
        }
    }

    /// Partition of the special symbol.
    pub fn to_partition(&self) -> OrbitResult<Vec<usize>> {
        if !self.special {
            return Err(OrbitError::NonSpecialSymbol);
        }
        let (top_offset, bottom_offset) = match self.lie_type {
            LieType::B | LieType::D => (1, 0),
            LieType::C => (0, 1),
            LieType::A => return Err(unsupported(self.lie_type)),
        };
        let mut staircase: Vec<usize> = self
            .top
            .iter()
            .map(|&v| 2 * v + top_offset)
            .chain(self.bottom.iter().map(|&v| 2 * v + bottom_offset))
            .collect();
        staircase.sort_unstable();

        let len = staircase.len();
        let mut parts = Vec::with_capacity(len);
        for i in 0..len {
            let shift = len - i - 1;
            let part = staircase[shift]
                .checked_sub(shift)
                .ok_or_else(|| invariant("symbol staircase underflow", &staircase))?;
            parts.push(part);
        }
        parts.retain(|&part| part != 0);
        Ok(parts)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |values: &[usize]| {
            values
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };
        write!(f, "({} ; {})", row(&self.top[..]), row(&self.bottom[..]))
    }
}

/// Symbol of a B, C or D partition.
///
/// Partitions of even length gain a trailing zero first, so the staircase
/// `s[i] = p[len - i - 1] + i` always has odd length.
pub fn to_symbol(parts: &[usize], lie_type: LieType) -> OrbitResult<Symbol> {
    if lie_type == LieType::A {
        return Err(unsupported(lie_type));
    }
    let mut p: Vec<usize> = parts.iter().copied().filter(|&v| v != 0).collect();
    p.sort_unstable_by(|a, b| b.cmp(a));
    if p.len() % 2 == 0 {
        p.push(0);
    }

    let len = p.len();
    let staircase = (0..len).map(|i| p[len - i - 1] + i);
    let (even, odd): (Vec<usize>, Vec<usize>) = staircase.partition(|s| s % 2 == 0);
    let top: Vec<usize> = even.into_iter().map(|s| s / 2).collect();
    let odd = odd.into_iter().map(|s| (s - 1) / 2);
    let bottom: Vec<usize> = match lie_type {
        LieType::D => std::iter::once(0).chain(odd.map(|v| v + 1)).collect(),
        _ => odd.collect(),
    };
    Ok(Symbol::new(top, bottom, lie_type))
}

/// Special partition sharing the symbol family of `parts`.
pub fn special_representative(parts: &[usize], lie_type: LieType) -> OrbitResult<Vec<usize>> {
    to_symbol(parts, lie_type)?.make_special().to_partition()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(parts: &[usize], lie_type: LieType) -> Vec<usize> {
        special_representative(parts, lie_type).unwrap()
    }

    #[test]
    fn symbols_of_small_partitions() {
        let symbol = to_symbol(&[3, 1, 1], LieType::B).unwrap();
        assert_eq!(symbol.top(), &[1]);
        assert_eq!(symbol.bottom(), &[0, 2]);
        assert!(!symbol.is_special());

        let special = symbol.make_special();
        assert_eq!(special.top(), &[0, 2]);
        assert_eq!(special.bottom(), &[1]);
        assert_eq!(special.to_string(), "(0 2 ; 1)");

        let d = to_symbol(&[3, 1], LieType::D).unwrap();
        assert_eq!(d.top(), &[0, 1]);
        assert_eq!(d.bottom(), &[0, 3]);
    }

    #[test]
    fn special_partitions_survive_the_round_trip() {
        for (parts, lie_type) in [
            (vec![3, 1, 1], LieType::B),
            (vec![5], LieType::B),
            (vec![1, 1, 1, 1, 1], LieType::B),
            (vec![3, 1], LieType::D),
            (vec![2, 2], LieType::D),
            (vec![2, 2], LieType::C),
            (vec![4], LieType::C),
            (vec![1, 1], LieType::C),
        ] {
            assert_eq!(round_trip(&parts, lie_type), parts, "{lie_type:?}");
        }
    }

    #[test]
    fn non_special_labels_move_up() {
        assert_eq!(round_trip(&[2, 1, 1], LieType::C), vec![2, 2]);
        assert_eq!(round_trip(&[2, 2, 1], LieType::B), vec![3, 1, 1]);
    }

    #[test]
    fn rejects_type_a_and_unprepared_symbols() {
        assert!(matches!(
            to_symbol(&[2, 1], LieType::A),
            Err(OrbitError::UnsupportedLieType { .. })
        ));
        let raw = to_symbol(&[2, 2], LieType::C).unwrap();
        assert_eq!(raw.to_partition(), Err(OrbitError::NonSpecialSymbol));
    }
}
