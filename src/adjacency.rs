//! Sparse region-adjacency graph built from the label grid.
//!
//! The build scans every pixel's 8-neighborhood and records each unordered
//! pair of differing labels once, then freezes the pair set into CSR-style
//! sorted per-region neighbor lists. Memory is proportional to the number of
//! distinct adjacent pairs, never to `region_count²`, so the graph scales to
//! tens of thousands of regions. Membership tests binary-search a region's
//! sorted neighbor row.
use crate::error::SuperpixelError;
use crate::grid::{GridView, LabelView, NEIGHBORS_8};
use log::debug;
use std::collections::HashSet;

/// Symmetric, irreflexive adjacency relation over region ids.
#[derive(Debug)]
pub struct AdjacencyGraph {
    /// CSR row offsets; length `region_count + 1`.
    offsets: Vec<usize>,
    /// Flattened neighbor lists, sorted within each row.
    neighbors: Vec<u32>,
}

impl AdjacencyGraph {
    /// Scan the label grid and connect every pair of 8-neighboring regions.
    ///
    /// Re-encountering an already-connected pair is a no-op, and a pixel
    /// never connects a region to itself, so the relation comes out
    /// irreflexive and symmetric by construction. Fails fast on labels
    /// outside `[0, region_count)`.
    pub fn build(labels: &LabelView<'_>, region_count: usize) -> Result<Self, SuperpixelError> {
        let (w, h) = labels.dimensions();
        let mut pairs: HashSet<(u32, u32)> = HashSet::new();
        for y in 0..h {
            let row = labels.row(y);
            for x in 0..w {
                let a = row[x];
                if a as usize >= region_count {
                    return Err(SuperpixelError::LabelOutOfRange {
                        x,
                        y,
                        label: a,
                        region_count,
                    });
                }
                for (dx, dy) in NEIGHBORS_8 {
                    let nx = x as isize + dx;
                    let ny = y as isize + dy;
                    if nx >= 0 && nx < w as isize && ny >= 0 && ny < h as isize {
                        let b = labels.label(nx as usize, ny as usize);
                        if a != b {
                            pairs.insert(if a < b { (a, b) } else { (b, a) });
                        }
                    }
                }
            }
        }

        // Freeze the pair set into CSR rows.
        let mut degree = vec![0usize; region_count];
        for &(a, b) in &pairs {
            degree[a as usize] += 1;
            degree[b as usize] += 1;
        }
        let mut offsets = Vec::with_capacity(region_count + 1);
        let mut total = 0usize;
        offsets.push(0);
        for &d in &degree {
            total += d;
            offsets.push(total);
        }
        let mut neighbors = vec![0u32; total];
        let mut cursor: Vec<usize> = offsets[..region_count].to_vec();
        for &(a, b) in &pairs {
            neighbors[cursor[a as usize]] = b;
            cursor[a as usize] += 1;
            neighbors[cursor[b as usize]] = a;
            cursor[b as usize] += 1;
        }
        for id in 0..region_count {
            neighbors[offsets[id]..offsets[id + 1]].sort_unstable();
        }

        debug!(
            "adjacency graph: {} regions, {} pairs",
            region_count,
            pairs.len()
        );
        Ok(Self { offsets, neighbors })
    }

    pub fn region_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of distinct adjacent region pairs.
    pub fn pair_count(&self) -> usize {
        self.neighbors.len() / 2
    }

    /// Sorted ids adjacent to `id`.
    pub fn neighbors(&self, id: usize) -> Result<&[u32], SuperpixelError> {
        if id >= self.region_count() {
            return Err(SuperpixelError::RegionOutOfBounds {
                id,
                region_count: self.region_count(),
            });
        }
        Ok(&self.neighbors[self.offsets[id]..self.offsets[id + 1]])
    }

    /// True iff regions `a` and `b` share a border; `adjacent(a, a)` is
    /// always false.
    pub fn adjacent(&self, a: usize, b: usize) -> Result<bool, SuperpixelError> {
        if b >= self.region_count() {
            return Err(SuperpixelError::RegionOutOfBounds {
                id: b,
                region_count: self.region_count(),
            });
        }
        Ok(self.neighbors(a)?.binary_search(&(b as u32)).is_ok())
    }

    /// All adjacent pairs, each reported once with the smaller id first.
    pub fn iter_pairs(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.region_count()).flat_map(move |id| {
            let row = &self.neighbors[self.offsets[id]..self.offsets[id + 1]];
            let a = id as u32;
            row.iter().copied().filter(move |&b| b > a).map(move |b| (a, b))
        })
    }

    /// Largest neighbor-list length over all regions.
    pub fn max_degree(&self) -> usize {
        (0..self.region_count())
            .map(|id| self.offsets[id + 1] - self.offsets[id])
            .max()
            .unwrap_or(0)
    }
}
