// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpiralTorch — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Domino Robinson–Schensted insertion for signed permutations.
//!
//! Inserting `±k` rebuilds the tableau label by label. Dominoes below `k` stay
//! put, `k` enters the first row horizontally (positive) or the first column
//! vertically (negative), and every larger domino slides against the frame
//! covered so far:
//!
//! * no overlap: it stays where it is;
//! * full overlap: a horizontal domino drops to the end of the next row, a
//!   vertical one moves to the end of the next column;
//! * one cell of overlap: it moves to the two cells completing the 2×2 square
//!   spanned by itself and the overlapping cells.

use crate::signed::SignedPermutation;
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A labelled domino anchored at its top-left cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Domino {
    pub label: u64,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Domino {
    /// The two `(row, col)` cells covered by the domino.
    pub fn cells(&self) -> [(usize, usize); 2] {
        match self.orientation {
            Orientation::Horizontal => [(self.row, self.col), (self.row, self.col + 1)],
            Orientation::Vertical => [(self.row, self.col), (self.row + 1, self.col)],
        }
    }
}

/// Young frame tracked by row lengths.
#[derive(Clone, Debug, Default)]
struct Frame {
    rows: Vec<usize>,
}

impl Frame {
    fn contains(&self, (row, col): (usize, usize)) -> bool {
        self.rows.get(row).is_some_and(|&len| col < len)
    }

    fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).copied().unwrap_or(0)
    }

    fn col_len(&self, col: usize) -> usize {
        self.rows.iter().take_while(|&&len| len > col).count()
    }

    fn cover(&mut self, domino: &Domino) {
        for (row, col) in domino.cells() {
            if self.rows.len() <= row {
                self.rows.resize(row + 1, 0);
            }
            self.rows[row] = self.rows[row].max(col + 1);
        }
    }

    fn slide(&self, domino: Domino) -> Domino {
        let [first, second] = domino.cells();
        match (self.contains(first), self.contains(second)) {
            (false, false) => domino,
            (true, true) => match domino.orientation {
                Orientation::Horizontal => Domino {
                    row: domino.row + 1,
                    col: self.row_len(domino.row + 1),
                    ..domino
                },
                Orientation::Vertical => Domino {
                    row: self.col_len(domino.col + 1),
                    col: domino.col + 1,
                    ..domino
                },
            },
            // The frame is a Young diagram, so only the anchor cell can be covered.
            _ => match domino.orientation {
                Orientation::Horizontal => Domino {
                    col: domino.col + 1,
                    orientation: Orientation::Vertical,
                    ..domino
                },
                Orientation::Vertical => Domino {
                    row: domino.row + 1,
                    orientation: Orientation::Horizontal,
                    ..domino
                },
            },
        }
    }
}

/// Domino tableau with dominoes kept in increasing label order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominoTableau {
    dominoes: Vec<Domino>,
}

impl DominoTableau {
    /// Inserts the entries of `permutation` left to right.
    pub fn from_permutation(permutation: &SignedPermutation) -> Self {
        let mut tableau = Self::default();
        for &value in permutation.entries() {
            tableau.insert(value);
        }
        tableau
    }

    pub fn dominoes(&self) -> &[Domino] {
        &self.dominoes
    }

    pub fn len(&self) -> usize {
        self.dominoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dominoes.is_empty()
    }

    /// Row lengths of the tiled Young diagram.
    pub fn shape(&self) -> Vec<usize> {
        let mut frame = Frame::default();
        for domino in &self.dominoes {
            frame.cover(domino);
        }
        frame.rows
    }

    pub fn vertical_count(&self) -> usize {
        self.dominoes
            .iter()
            .filter(|domino| domino.orientation == Orientation::Vertical)
            .count()
    }

    fn insert(&mut self, value: i64) {
        let label = value.unsigned_abs();
        let (mut placed, larger): (Vec<Domino>, Vec<Domino>) = self
            .dominoes
            .iter()
            .copied()
            .partition(|domino| domino.label < label);

        let mut frame = Frame::default();
        for domino in &placed {
            frame.cover(domino);
        }

        let seed = if value > 0 {
            Domino {
                label,
                row: 0,
                col: frame.row_len(0),
                orientation: Orientation::Horizontal,
            }
        } else {
            Domino {
                label,
                row: frame.col_len(0),
                col: 0,
                orientation: Orientation::Vertical,
            }
        };
        frame.cover(&seed);
        placed.push(seed);

        for domino in larger {
            let moved = frame.slide(domino);
            if moved != domino {
                trace!(
                    target: "lie_toolbox::domino",
                    label = moved.label,
                    row = moved.row,
                    col = moved.col,
                    "domino slid"
                );
            }
            frame.cover(&moved);
            placed.push(moved);
        }
        self.dominoes = placed;
    }
}

/// Produces domino tableaux for signed permutations.
///
/// Implementations must be pure so one oracle can serve concurrent requests.
pub trait DominoOracle: Send + Sync {
    fn domino_tableau(&self, permutation: &SignedPermutation) -> DominoTableau;

    fn vertical_domino_count(&self, tableau: &DominoTableau) -> usize {
        tableau.vertical_count()
    }
}

/// Reference oracle backed by [`DominoTableau::from_permutation`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DominoInsertion;

impl DominoOracle for DominoInsertion {
    fn domino_tableau(&self, permutation: &SignedPermutation) -> DominoTableau {
        DominoTableau::from_permutation(permutation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    fn tableau_of(entries: &[i64]) -> DominoTableau {
        let permutation = SignedPermutation::new(entries.to_vec()).unwrap();
        DominoInsertion.domino_tableau(&permutation)
    }

    #[test]
    fn empty_permutation_gives_empty_tableau() {
        let tableau = tableau_of(&[]);
        assert!(tableau.is_empty());
        assert!(tableau.shape().is_empty());
    }

    #[test]
    fn increasing_positive_entries_fill_the_first_row() {
        let tableau = tableau_of(&[1, 2, 3]);
        assert_eq!(tableau.shape(), vec![6]);
        assert_eq!(tableau.vertical_count(), 0);
    }

    #[test]
    fn negative_entries_stack_in_the_first_column() {
        let tableau = tableau_of(&[-1, -2]);
        assert_eq!(tableau.shape(), vec![1, 1, 1, 1]);
        assert_eq!(tableau.vertical_count(), 2);
    }

    #[test]
    fn bumping_and_rotation() {
        let bumped = tableau_of(&[2, 1]);
        assert_eq!(bumped.shape(), vec![2, 2]);
        assert_eq!(bumped.vertical_count(), 0);

        let rotated = tableau_of(&[2, -1]);
        assert_eq!(rotated.shape(), vec![2, 2]);
        assert_eq!(rotated.vertical_count(), 2);
    }

    #[test]
    fn mixed_permutation_matches_hand_insertion() {
        let tableau = tableau_of(&[-3, -4, 2, -1]);
        assert_eq!(tableau.shape(), vec![2, 2, 2, 2]);
        assert_eq!(tableau.vertical_count(), 2);
        let orientations: Vec<Orientation> =
            tableau.dominoes().iter().map(|d| d.orientation).collect();
        assert_eq!(
            orientations,
            vec![
                Orientation::Vertical,
                Orientation::Vertical,
                Orientation::Horizontal,
                Orientation::Horizontal
            ]
        );
    }

    #[test]
    fn random_permutations_tile_a_young_diagram() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..=9usize {
            for _ in 0..20 {
                let mut magnitudes: Vec<i64> = (1..=n as i64).collect();
                magnitudes.shuffle(&mut rng);
                let entries: Vec<i64> = magnitudes
                    .into_iter()
                    .map(|m| if rng.gen_bool(0.5) { m } else { -m })
                    .collect();
                let tableau = tableau_of(&entries);

                assert_eq!(tableau.len(), n);
                let mut cells = HashSet::new();
                for domino in tableau.dominoes() {
                    for cell in domino.cells() {
                        assert!(cells.insert(cell), "overlap at {cell:?} for {entries:?}");
                    }
                }
                let shape = tableau.shape();
                assert_eq!(shape.iter().sum::<usize>(), 2 * n);
                assert!(shape.windows(2).all(|w| w[0] >= w[1]), "{shape:?}");
                for (row, &len) in shape.iter().enumerate() {
                    for col in 0..len {
                        assert!(cells.contains(&(row, col)), "hole at {row},{col}");
                    }
                }
            }
        }
    }
}
