// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpiralTorch — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;
use thiserror::Error;

/// Errors produced while validating or combining signed permutations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PermutationError {
    #[error("entry {index} is zero; signed permutations use 1-based signed indices")]
    Zero { index: usize },
    #[error("entry {index} has magnitude {value} outside 1..={len}")]
    OutOfRange { index: usize, value: i64, len: usize },
    #[error("magnitude {value} appears more than once")]
    Repeated { value: u64 },
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}

/// Element of the hyperoctahedral group written in one-line notation.
///
/// Entry `k` equal to `±j` sends coordinate `k` to `±x[j-1]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignedPermutation {
    entries: Vec<i64>,
}

impl SignedPermutation {
    /// Validates and wraps a one-line signed permutation.
    pub fn new(entries: Vec<i64>) -> Result<Self, PermutationError> {
        let len = entries.len();
        let mut seen = vec![false; len];
        for (index, &value) in entries.iter().enumerate() {
            if value == 0 {
                return Err(PermutationError::Zero { index });
            }
            let magnitude = value.unsigned_abs();
            if magnitude as usize > len {
                return Err(PermutationError::OutOfRange { index, value, len });
            }
            let slot = &mut seen[magnitude as usize - 1];
            if *slot {
                return Err(PermutationError::Repeated { value: magnitude });
            }
            *slot = true;
        }
        Ok(Self { entries })
    }

    /// Identity of rank `n`.
    pub fn identity(n: usize) -> Self {
        Self {
            entries: (1..=n as i64).collect(),
        }
    }

    pub fn entries(&self) -> &[i64] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries carrying a minus sign.
    pub fn negative_count(&self) -> usize {
        self.entries.iter().filter(|&&v| v < 0).count()
    }

    /// Applies the permutation to a coordinate vector.
    pub fn act<T>(&self, coords: &[T]) -> Result<Vec<T>, PermutationError>
    where
        T: Copy + Neg<Output = T>,
    {
        if coords.len() != self.len() {
            return Err(PermutationError::LengthMismatch {
                expected: self.len(),
                got: coords.len(),
            });
        }
        Ok(self
            .entries
            .iter()
            .map(|&value| {
                let coord = coords[value.unsigned_abs() as usize - 1];
                if value > 0 {
                    coord
                } else {
                    -coord
                }
            })
            .collect())
    }

    /// Returns `self ∘ other`, so that `compose(g, h).act(x) == g.act(h.act(x))`.
    pub fn compose(&self, other: &Self) -> Result<Self, PermutationError> {
        let entries = self.act(&other.entries)?;
        Ok(Self { entries })
    }

    /// Inverse element.
    pub fn inverse(&self) -> Self {
        let mut entries = vec![0i64; self.len()];
        for (position, &value) in self.entries.iter().enumerate() {
            let target = value.unsigned_abs() as usize - 1;
            let image = position as i64 + 1;
            entries[target] = if value > 0 { image } else { -image };
        }
        Self { entries }
    }
}

impl fmt::Display for SignedPermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.entries.iter().map(i64::to_string).collect();
        write!(f, "[{}]", rendered.join(", "))
    }
}

impl TryFrom<Vec<i64>> for SignedPermutation {
    type Error = PermutationError;

    fn try_from(entries: Vec<i64>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}
