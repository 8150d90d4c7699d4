// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpiralTorch — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Robinson–Schensted row insertion over real sequences.

use lt_config::classifier::DEFAULT_TOLERANCE;

/// Builds the shape of the insertion tableau of a sequence.
pub trait TableauBuilder: Send + Sync {
    /// Maps entries to their ranks; entries within tolerance share a rank.
    fn convert_to_index(&self, entries: &[f64]) -> Vec<usize>;

    /// Row lengths of the insertion tableau of `indices`.
    fn shape(&self, indices: &[usize]) -> Vec<usize>;

    /// Convenience wrapper running both steps. Empty input yields an empty shape.
    fn shape_of(&self, entries: &[f64]) -> Vec<usize> {
        if entries.is_empty() {
            return Vec::new();
        }
        self.shape(&self.convert_to_index(entries))
    }
}

/// Schensted row insertion: an index bumps the leftmost strictly larger entry.
#[derive(Clone, Copy, Debug)]
pub struct RobinsonSchensted {
    tolerance: f64,
}

impl Default for RobinsonSchensted {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

impl RobinsonSchensted {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Full insertion tableau, row by row.
    pub fn tableau(&self, indices: &[usize]) -> Vec<Vec<usize>> {
        let mut rows: Vec<Vec<usize>> = Vec::new();
        for &index in indices {
            let mut carry = index;
            let mut row = 0;
            loop {
                if row == rows.len() {
                    rows.push(vec![carry]);
                    break;
                }
                let current = &mut rows[row];
                let position = current.partition_point(|&value| value <= carry);
                if position == current.len() {
                    current.push(carry);
                    break;
                }
                carry = std::mem::replace(&mut current[position], carry);
                row += 1;
            }
        }
        rows
    }
}

impl TableauBuilder for RobinsonSchensted {
    fn convert_to_index(&self, entries: &[f64]) -> Vec<usize> {
        let mut sorted: Vec<f64> = entries.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mut levels: Vec<f64> = Vec::with_capacity(sorted.len());
        for value in sorted {
            match levels.last() {
                Some(&last) if (value - last).abs() < self.tolerance => {}
                _ => levels.push(value),
            }
        }

        entries
            .iter()
            .map(|&value| {
                let below = levels.partition_point(|&level| level < value - self.tolerance);
                below + 1
            })
            .collect()
    }

    fn shape(&self, indices: &[usize]) -> Vec<usize> {
        self.tableau(indices).iter().map(Vec::len).collect()
    }
}
