mod common;

use common::synthetic_labels::{block_grid, three_by_three, vertical_stripes};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use superpixel_graph::grid::{GridView, NEIGHBORS_8};
use superpixel_graph::{LabelMap, SuperpixelError, SuperpixelMap};

#[test]
fn three_by_three_scenario_matches_expected_structures() {
    let (labels, n) = three_by_three();
    let map = SuperpixelMap::from_labels(labels, n).unwrap();

    let extent0: HashSet<_> = map.region_extent(0).unwrap().iter().copied().collect();
    assert_eq!(
        extent0,
        [(0, 0), (1, 0), (0, 1), (1, 1)].into_iter().collect()
    );
    let extent1: HashSet<_> = map.region_extent(1).unwrap().iter().copied().collect();
    assert_eq!(extent1, [(2, 0), (2, 1), (2, 2)].into_iter().collect());
    let extent2: HashSet<_> = map.region_extent(2).unwrap().iter().copied().collect();
    assert_eq!(extent2, [(0, 2), (1, 2)].into_iter().collect());

    assert_eq!(map.region_centroid(0).unwrap(), (0, 0));
    assert_eq!(map.region_centroid(1).unwrap(), (2, 1));
    assert_eq!(map.region_centroid(2).unwrap(), (0, 2));

    for (a, b) in [(0, 1), (0, 2), (1, 2)] {
        assert!(map.adjacent(a, b).unwrap(), "expected {a} adjacent to {b}");
        assert!(map.adjacent(b, a).unwrap(), "expected {b} adjacent to {a}");
    }
    for id in 0..3 {
        assert!(!map.adjacent(id, id).unwrap(), "self-loop on region {id}");
    }
    let pairs: Vec<_> = map.adjacent_pairs().collect();
    assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);

    // Every pixel except (0, 0), which is interior to region 0, sees at
    // least two differing neighbors.
    let thin = map.contour_mask(false);
    assert!(!thin.is_set(0, 0));
    assert_eq!(thin.marked(), 8);
}

#[test]
fn extents_partition_the_grid() {
    let (labels, n) = block_grid(48, 32, 8);
    let map = SuperpixelMap::from_labels(labels, n).unwrap();

    let mut seen = vec![false; 48 * 32];
    for id in 0..n {
        for &(x, y) in map.region_extent(id).unwrap() {
            let idx = y as usize * 48 + x as usize;
            assert!(!seen[idx], "pixel ({x}, {y}) covered twice");
            seen[idx] = true;
        }
    }
    assert!(seen.iter().all(|&b| b), "some pixel not covered");
}

#[test]
fn centroids_lie_inside_extent_bounding_boxes() {
    let (labels, n) = vertical_stripes(37, 11, 5);
    let map = SuperpixelMap::from_labels(labels, n).unwrap();

    for id in 0..n {
        let extent = map.region_extent(id).unwrap();
        let (cx, cy) = map.region_centroid(id).unwrap();
        let min_x = extent.iter().map(|&(x, _)| x).min().unwrap();
        let max_x = extent.iter().map(|&(x, _)| x).max().unwrap();
        let min_y = extent.iter().map(|&(_, y)| y).min().unwrap();
        let max_y = extent.iter().map(|&(_, y)| y).max().unwrap();
        assert!(
            (min_x..=max_x).contains(&cx) && (min_y..=max_y).contains(&cy),
            "centroid ({cx}, {cy}) of region {id} outside [{min_x}, {max_x}]x[{min_y}, {max_y}]"
        );
    }
}

/// Brute-force adjacency oracle: every pixel against its 8-neighbors.
fn brute_force_pairs(labels: &LabelMap) -> HashSet<(u32, u32)> {
    let (w, h) = labels.dimensions();
    let mut pairs = HashSet::new();
    for y in 0..h {
        for x in 0..w {
            let a = labels.label(x, y);
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
    pairs
}

#[test]
fn adjacency_matches_brute_force_on_random_grids() {
    let mut rng = StdRng::seed_from_u64(7);
    for round in 0..20 {
        let n = 8usize;
        let (w, h) = (16usize, 12usize);
        // Pin each id to one pixel so every region is non-empty, then fill
        // the rest at random.
        let mut cells: Vec<u32> = (0..w * h).map(|_| rng.gen_range(0..n as u32)).collect();
        for (id, cell) in cells.iter_mut().take(n).enumerate() {
            *cell = id as u32;
        }
        let labels = LabelMap::from_vec(w, h, cells).unwrap();
        let expected = brute_force_pairs(&labels);
        let map = SuperpixelMap::from_labels(labels, n).unwrap();

        let got: HashSet<_> = map.adjacent_pairs().collect();
        assert_eq!(got, expected, "pair mismatch in round {round}");
        for a in 0..n {
            assert!(!map.adjacent(a, a).unwrap());
            for b in 0..n {
                let key = if a < b { (a as u32, b as u32) } else { (b as u32, a as u32) };
                assert_eq!(
                    map.adjacent(a, b).unwrap(),
                    a != b && expected.contains(&key),
                    "adjacent({a}, {b}) disagrees with oracle in round {round}"
                );
            }
        }
    }
}

#[test]
fn construction_rejects_out_of_range_labels() {
    let labels = LabelMap::from_vec(2, 2, vec![0, 1, 2, 3]).unwrap();
    let err = SuperpixelMap::from_labels(labels, 3).unwrap_err();
    assert!(
        matches!(err, SuperpixelError::LabelOutOfRange { label: 3, .. }),
        "unexpected error {err:?}"
    );
}

#[test]
fn construction_rejects_unused_region_ids() {
    let labels = LabelMap::from_vec(2, 2, vec![0, 0, 3, 3]).unwrap();
    let err = SuperpixelMap::from_labels(labels, 4).unwrap_err();
    assert_eq!(
        err,
        SuperpixelError::EmptyRegion {
            id: 1,
            region_count: 4
        }
    );
}

#[test]
fn queries_past_region_count_fail_with_bounds_error() {
    let (labels, n) = three_by_three();
    let map = SuperpixelMap::from_labels(labels, n).unwrap();
    assert!(map.region_extent(3).is_err());
    assert!(map.region_centroid(3).is_err());
    assert!(map.neighbors(3).is_err());
    assert!(map.adjacent(0, 3).is_err());
}
