// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpiralTorch — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Partitions labelling nilpotent orbits.
//!
//! The free functions work on raw part slices so the classifier can feed
//! tableau shapes straight in; [`Partition`] wraps them with a Lie type and a
//! canonical non-increasing, zero-free form.

use crate::error::{invariant, OrbitResult};
use crate::weight::LieType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Add;
use tracing::debug;

/// Statistic selector for [`a_function`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AFunctionKind {
    A,
    B,
    D,
}

fn strip_zeros(mut parts: Vec<usize>) -> Vec<usize> {
    parts.retain(|&part| part != 0);
    parts
}

fn canonical(mut parts: Vec<usize>) -> Vec<usize> {
    parts.sort_unstable_by(|a, b| b.cmp(a));
    strip_zeros(parts)
}

fn multiplicities(parts: &[usize]) -> BTreeMap<usize, usize> {
    let mut counts = BTreeMap::new();
    for &part in parts.iter().filter(|&&part| part != 0) {
        *counts.entry(part).or_insert(0) += 1;
    }
    counts
}

fn violates(value: usize, multiplicity: usize, lie_type: LieType) -> bool {
    if multiplicity % 2 == 0 {
        return false;
    }
    match lie_type {
        LieType::A => false,
        LieType::B | LieType::D => value % 2 == 0,
        LieType::C => value % 2 == 1,
    }
}

/// Whether `parts` labels a special orbit of the given type. Zeros are ignored.
pub fn is_special(parts: &[usize], lie_type: LieType) -> bool {
    let total: usize = parts.iter().sum();
    let parity_ok = match lie_type {
        LieType::A => return true,
        LieType::B => total % 2 == 1,
        LieType::C | LieType::D => total % 2 == 0,
    };
    parity_ok
        && multiplicities(parts)
            .into_iter()
            .all(|(value, count)| !violates(value, count, lie_type))
}

/// Type D partitions whose parts are all even with even multiplicity.
pub fn is_very_even(parts: &[usize], lie_type: LieType) -> bool {
    if lie_type != LieType::D {
        return false;
    }
    let counts = multiplicities(parts);
    !counts.is_empty()
        && counts
            .into_iter()
            .all(|(value, count)| value % 2 == 0 && count % 2 == 0)
}

fn first_violation(parts: &[usize], lie_type: LieType) -> Option<usize> {
    let counts = multiplicities(parts);
    parts
        .iter()
        .copied()
        .filter(|&part| part != 0)
        .find(|part| violates(*part, counts[part], lie_type))
}

/// Largest special partition of the given type dominated by `parts`.
///
/// Type B partitions of even size first gain a box in their first row. Each
/// step moves one box from the last copy of the first offending value to the
/// first later row that can take it; `budget` bounds the number of moves.
pub fn collapse(parts: &[usize], lie_type: LieType, budget: usize) -> OrbitResult<Vec<usize>> {
    let mut p = canonical(parts.to_vec());
    if p.is_empty() {
        return Ok(p);
    }
    if lie_type == LieType::B && p.iter().sum::<usize>() % 2 == 0 {
        p[0] += 1;
    }

    let mut moves = 0usize;
    while !is_special(&p, lie_type) {
        if moves == budget {
            return Err(invariant("collapse budget exhausted", &p));
        }
        moves += 1;

        p = strip_zeros(p);
        p.push(0);
        let value = first_violation(&p, lie_type)
            .ok_or_else(|| invariant("collapse found no offending part", &p))?;
        let last = p
            .iter()
            .rposition(|&part| part == value)
            .ok_or_else(|| invariant("collapse lost its offending part", &p))?;
        let lowered = value
            .checked_sub(1)
            .filter(|&lowered| lowered > 0)
            .ok_or_else(|| invariant("collapse drove a part negative", &p))?;
        p[last] = lowered;
        let target = (last + 1..p.len())
            .find(|&index| p[index] < lowered)
            .ok_or_else(|| invariant("collapse found no row to receive a box", &p))?;
        p[target] += 1;
    }

    let collapsed = strip_zeros(p);
    debug!(
        target: "lie_toolbox::partition",
        ?lie_type,
        moves,
        parts = ?collapsed,
        "collapsed partition"
    );
    Ok(collapsed)
}

/// Approximate inverse of [`collapse`]: moves one box up inside each run the
/// type's parity rule flags. Type A is returned unchanged.
pub fn expansion(parts: &[usize], lie_type: LieType) -> Vec<usize> {
    let p = canonical(parts.to_vec());
    let mut expanded = p.clone();
    let (start, wanted_parity) = match lie_type {
        LieType::A => return p,
        LieType::B => (0, 0),
        LieType::C => (1, 1),
        LieType::D => (1, 0),
    };
    for i in (start..p.len()).step_by(2) {
        let opens_run = i == 0 || p[i - 1] != p[i];
        let paired = p.get(i + 1) == Some(&p[i]);
        if p[i] % 2 == wanted_parity && paired && opens_run {
            expanded[i] += 1;
            expanded[i + 1] -= 1;
        }
    }
    canonical(expanded)
}

/// Lusztig-style `a`, `b` and `d` statistics of a partition.
pub fn a_function(parts: &[usize], kind: AFunctionKind) -> i64 {
    let p = canonical(parts.to_vec());
    let halves: Vec<usize> = match kind {
        AFunctionKind::A => p,
        AFunctionKind::B => p
            .iter()
            .enumerate()
            .map(|(i, &part)| if i % 2 == 0 { part / 2 } else { part.div_ceil(2) })
            .collect(),
        AFunctionKind::D => p
            .iter()
            .enumerate()
            .map(|(i, &part)| if i % 2 == 0 { part.div_ceil(2) } else { part / 2 })
            .collect(),
    };
    halves
        .iter()
        .enumerate()
        .map(|(i, &part)| (i * part) as i64)
        .sum()
}

fn frame(parts: &[usize], drop_when_odd: bool) -> Vec<usize> {
    canonical(parts.to_vec())
        .into_iter()
        .enumerate()
        .map(|(i, part)| {
            let odd = (part + i + 1) % 2 == 1;
            if odd == drop_when_odd {
                part - 1
            } else {
                part
            }
        })
        .collect()
}

/// Removes one box from every row `i` where `p[i] + i + 1` is odd.
///
/// Rows stay in place, so the result can hold zeros or be out of order.
pub fn even_frame(parts: &[usize]) -> Vec<usize> {
    frame(parts, true)
}

/// Removes one box from every row `i` where `p[i] + i + 1` is even.
pub fn odd_frame(parts: &[usize]) -> Vec<usize> {
    frame(parts, false)
}

/// Zero-padded row-wise sum.
pub fn union(left: &[usize], right: &[usize]) -> Vec<usize> {
    let len = left.len().max(right.len());
    (0..len)
        .map(|i| left.get(i).copied().unwrap_or(0) + right.get(i).copied().unwrap_or(0))
        .collect()
}

/// Dominance order: every partial sum of `upper` reaches the matching one of `lower`.
pub fn dominates(upper: &[usize], lower: &[usize]) -> bool {
    let upper = canonical(upper.to_vec());
    let lower = canonical(lower.to_vec());
    let len = upper.len().max(lower.len());
    let (mut up, mut low) = (0usize, 0usize);
    for i in 0..len {
        up += upper.get(i).copied().unwrap_or(0);
        low += lower.get(i).copied().unwrap_or(0);
        if up < low {
            return false;
        }
    }
    true
}

/// Non-increasing, zero-free partition tagged with its Lie type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Partition {
    parts: Vec<usize>,
    lie_type: LieType,
}

impl Partition {
    /// Sorts `parts` descending and drops zeros.
    pub fn new(parts: Vec<usize>, lie_type: LieType) -> Self {
        Self {
            parts: canonical(parts),
            lie_type,
        }
    }

    pub fn empty(lie_type: LieType) -> Self {
        Self {
            parts: Vec::new(),
            lie_type,
        }
    }

    pub fn parts(&self) -> &[usize] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<usize> {
        self.parts
    }

    pub fn lie_type(&self) -> LieType {
        self.lie_type
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Number of boxes.
    pub fn size(&self) -> usize {
        self.parts.iter().sum()
    }

    pub fn is_special(&self) -> bool {
        is_special(&self.parts, self.lie_type)
    }

    pub fn is_very_even(&self) -> bool {
        is_very_even(&self.parts, self.lie_type)
    }

    pub fn collapse(&self, budget: usize) -> OrbitResult<Self> {
        Ok(Self {
            parts: collapse(&self.parts, self.lie_type, budget)?,
            lie_type: self.lie_type,
        })
    }

    pub fn expansion(&self) -> Self {
        Self {
            parts: expansion(&self.parts, self.lie_type),
            lie_type: self.lie_type,
        }
    }

    pub fn a_function(&self, kind: AFunctionKind) -> i64 {
        a_function(&self.parts, kind)
    }

    pub fn dominates(&self, other: &Partition) -> bool {
        dominates(&self.parts, &other.parts)
    }
}

impl Add for &Partition {
    type Output = Partition;

    fn add(self, rhs: &Partition) -> Partition {
        Partition::new(union(&self.parts, &rhs.parts), self.lie_type)
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.parts.iter().map(usize::to_string).collect();
        write!(f, "[{}]", rendered.join(", "))
    }
}
