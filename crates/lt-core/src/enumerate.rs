// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpiralTorch — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

use crate::orbit::NilpotentOrbit;
use crate::partition::{is_special, Partition};
use crate::very_even::VeryEvenType;
use crate::weight::LieType;

/// Number of boxes in the orbit labels of rank `rank`.
pub fn label_size(rank: usize, lie_type: LieType) -> usize {
    match lie_type {
        LieType::A => rank,
        LieType::B => 2 * rank + 1,
        LieType::C | LieType::D => 2 * rank,
    }
}

/// All partitions of `size` in reverse lexicographic order.
pub fn partitions(size: usize) -> Vec<Vec<usize>> {
    let mut found = Vec::new();
    let mut stack = vec![(Vec::new(), size, size)];
    while let Some((prefix, remaining, largest)) = stack.pop() {
        if remaining == 0 {
            found.push(prefix);
            continue;
        }
        for part in 1..=remaining.min(largest) {
            let mut next = prefix.clone();
            next.push(part);
            stack.push((next, remaining - part, part));
        }
    }
    found
}

/// Every nilpotent orbit of the given rank and type.
///
/// Very-even labels appear twice, Type I first.
pub fn generate_orbits(rank: usize, lie_type: LieType) -> Vec<NilpotentOrbit> {
    let mut orbits = Vec::new();
    for parts in partitions(label_size(rank, lie_type)) {
        if !is_special(&parts, lie_type) {
            continue;
        }
        let partition = Partition::new(parts, lie_type);
        if partition.is_very_even() {
            orbits.push(NilpotentOrbit::new(partition.clone(), Some(VeryEvenType::I)));
            orbits.push(NilpotentOrbit::new(partition, Some(VeryEvenType::II)));
        } else {
            orbits.push(NilpotentOrbit::new(partition, None));
        }
    }
    orbits
}
