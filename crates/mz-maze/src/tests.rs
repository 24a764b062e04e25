//! Unit and property tests for mz-maze.
//!
//! Hand-built grids pin down exact search results; generated mazes are
//! checked against an independent flood fill.

#[cfg(test)]
mod helpers {
    use std::collections::{HashMap, VecDeque};

    use mz_core::{Coord, MazeRng};

    use crate::{Grid, MazeGenerator, Path, respects_avoidance};

    /// Plain BFS depth map from `start`, honouring the avoidance rule
    /// (start exempt).  Deliberately shares no code with `GridSearch`.
    pub fn bfs_depths(grid: &Grid, start: Coord, avoid: Option<Coord>) -> HashMap<Coord, u32> {
        let mut depths = HashMap::new();
        let mut queue = VecDeque::new();
        depths.insert(start, 0);
        queue.push_back(start);
        while let Some(cur) = queue.pop_front() {
            let d = depths[&cur];
            for n in cur.neighbors() {
                if grid.is_open(n) && respects_avoidance(n, avoid) && !depths.contains_key(&n) {
                    depths.insert(n, d + 1);
                    queue.push_back(n);
                }
            }
        }
        depths
    }

    /// `true` if every open cell is reachable from `from`.
    pub fn is_connected(grid: &Grid, from: Coord) -> bool {
        bfs_depths(grid, from, None).len() == grid.open_count()
    }

    /// Number of orthogonally adjacent open-cell pairs.
    pub fn open_edges(grid: &Grid) -> usize {
        grid.open_cells()
            .map(|c| {
                [Coord::new(c.x + 1, c.y), Coord::new(c.x, c.y + 1)]
                    .into_iter()
                    .filter(|&n| grid.is_open(n))
                    .count()
            })
            .sum()
    }

    /// Every step is open, adjacent to the previous one, and respects `avoid`.
    pub fn assert_valid_path(grid: &Grid, start: Coord, path: &Path, avoid: Option<Coord>) {
        let mut prev = start;
        for &step in path.iter() {
            assert!(grid.is_open(step), "{step} is a wall");
            assert!(prev.is_adjacent(step), "{prev} -> {step} is not a single step");
            assert!(respects_avoidance(step, avoid), "{step} too close to {avoid:?}");
            prev = step;
        }
    }

    pub fn generated(width: u32, height: u32, extra_walls: u32, seed: u64) -> (Grid, MazeRng) {
        let mut rng = MazeRng::new(seed);
        let mut grid = Grid::new(width, height).unwrap();
        MazeGenerator::new(extra_walls).generate(&mut grid, None, &mut rng).unwrap();
        (grid, rng)
    }

    /// Single-row corridor of `len` open cells.
    pub fn corridor(len: usize) -> Grid {
        Grid::from_rows(&[&" ".repeat(len)]).unwrap()
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use mz_core::{Coord, MazeRng};

    use crate::{Grid, MazeError};

    #[test]
    fn new_grid_is_all_walls() {
        let g = Grid::new(4, 3).unwrap();
        assert_eq!(g.cell_count(), 12);
        assert_eq!(g.open_count(), 0);
        assert!(g.cells().all(|c| g.is_wall(c)));
    }

    #[test]
    fn zero_size_rejected() {
        assert!(matches!(Grid::new(0, 3), Err(MazeError::EmptyGrid { .. })));
        assert!(matches!(Grid::from_rows(&[]), Err(MazeError::EmptyGrid { .. })));
    }

    #[test]
    fn from_rows_parses_walls() {
        let g = Grid::from_rows(&["# ", "  "]).unwrap();
        assert_eq!((g.width(), g.height()), (2, 2));
        assert!(g.is_wall(Coord::new(0, 0)));
        assert!(g.is_open(Coord::new(1, 0)));
        assert_eq!(g.open_count(), 3);
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Grid::from_rows(&["   ", "  "]).unwrap_err();
        assert!(matches!(err, MazeError::RaggedRows { row: 1, expected: 3, got: 2 }));
    }

    #[test]
    fn out_of_bounds_behaves_as_wall() {
        let g = Grid::from_rows(&["  "]).unwrap();
        assert!(!g.in_bounds(Coord::new(-1, 0)));
        assert!(g.is_wall(Coord::new(-1, 0)));
        assert!(g.is_wall(Coord::new(2, 0)));
        assert!(g.is_wall(Coord::new(0, 1)));
    }

    #[test]
    fn wall_and_border_count_includes_border() {
        let g = Grid::from_rows(&["   ", " # ", "   "]).unwrap();
        // Corner: two borders, two open neighbours.
        assert_eq!(g.wall_and_border_count(Coord::new(0, 0)), 2);
        // Top edge middle: the border above and the centre wall below.
        assert_eq!(g.wall_and_border_count(Coord::new(1, 0)), 2);
        // Centre wall: all four neighbours open.
        assert_eq!(g.wall_and_border_count(Coord::new(1, 1)), 0);
    }

    #[test]
    fn set_wall_out_of_bounds_errors() {
        let mut g = Grid::new(2, 2).unwrap();
        assert!(matches!(
            g.set_wall(Coord::new(2, 0), false),
            Err(MazeError::OutOfBounds(_))
        ));
        g.set_wall(Coord::new(1, 1), false).unwrap();
        assert!(g.is_open(Coord::new(1, 1)));
        g.fill_walls();
        assert_eq!(g.open_count(), 0);
    }

    #[test]
    fn display_matches_rows() {
        let rows = ["## #", "    ", "# ##"];
        let g = Grid::from_rows(&rows).unwrap();
        assert_eq!(g.to_string(), rows.join("\n"));
    }

    #[test]
    fn open_neighbors_skip_walls_and_border() {
        let g = Grid::from_rows(&["  #", "   "]).unwrap();
        let mut n: Vec<_> = g.open_neighbors(Coord::new(1, 0)).collect();
        n.sort();
        assert_eq!(n, vec![Coord::new(0, 0), Coord::new(1, 1)]);
    }

    #[test]
    fn random_cell_in_bounds() {
        let g = Grid::new(5, 3).unwrap();
        let mut rng = MazeRng::new(4);
        for _ in 0..500 {
            assert!(g.in_bounds(g.random_cell(&mut rng)));
        }
    }
}

// ── Generator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use proptest::prelude::*;

    use mz_core::{Coord, MazeRng};

    use super::helpers::{generated, is_connected, open_edges};
    use crate::{Grid, MazeGenerator};

    #[test]
    fn carve_starts_from_requested_seed() {
        let mut rng = MazeRng::new(1);
        let mut grid = Grid::new(7, 7).unwrap();
        let stats = MazeGenerator::new(0)
            .carve(&mut grid, Some(Coord::new(3, 4)), &mut rng)
            .unwrap();
        assert_eq!(stats.seed, Coord::new(3, 4));
        assert!(grid.is_open(Coord::new(3, 4)));
        assert_eq!(stats.carved, grid.open_count());
        assert!(!stats.carve_budget_exhausted);
    }

    #[test]
    fn out_of_bounds_seed_falls_back_to_random() {
        let mut rng = MazeRng::new(2);
        let mut grid = Grid::new(5, 5).unwrap();
        let stats = MazeGenerator::new(0)
            .carve(&mut grid, Some(Coord::new(9, 9)), &mut rng)
            .unwrap();
        assert!(grid.in_bounds(stats.seed));
    }

    #[test]
    fn regeneration_discards_previous_maze() {
        let mut rng = MazeRng::new(3);
        let mut grid = Grid::from_rows(&["     "; 5]).unwrap();
        MazeGenerator::new(0).generate(&mut grid, None, &mut rng).unwrap();
        assert!(grid.open_count() < 25, "old open cells must be walled over");
    }

    #[test]
    fn seven_by_seven_removes_one_extra_wall() {
        for seed in 0..20 {
            let mut rng = MazeRng::new(seed);
            let mut grid = Grid::new(7, 7).unwrap();
            let stats = MazeGenerator::default().generate(&mut grid, None, &mut rng).unwrap();
            assert_eq!(stats.extra_walls_removed, 1, "seed {seed}");
            assert!(!stats.removal_budget_exhausted);
            assert_eq!(grid.open_count(), stats.carved + 1);
        }
    }

    #[test]
    fn single_cell_grid_exhausts_removal_budget() {
        let mut rng = MazeRng::new(0);
        let mut grid = Grid::new(1, 1).unwrap();
        let stats = MazeGenerator::new(1).generate(&mut grid, None, &mut rng).unwrap();
        assert_eq!(stats.carved, 1);
        assert_eq!(stats.extra_walls_removed, 0);
        assert!(stats.removal_budget_exhausted);
        assert_eq!(grid.open_count(), 1);
    }

    #[test]
    fn generated_maze_displays_as_grid() {
        let (grid, _) = generated(6, 4, 1, 11);
        let text = grid.to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().all(|l| l.chars().count() == 6));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(96))]

        #[test]
        fn carved_maze_is_a_connected_tree(w in 1u32..13, h in 1u32..13, seed in any::<u64>()) {
            let mut rng = MazeRng::new(seed);
            let mut grid = Grid::new(w, h).unwrap();
            let stats = MazeGenerator::new(0).carve(&mut grid, None, &mut rng).unwrap();

            prop_assert!(!stats.carve_budget_exhausted);
            prop_assert!(is_connected(&grid, stats.seed));
            // A tree on n cells has n - 1 edges: no loops before removal.
            prop_assert_eq!(open_edges(&grid), grid.open_count() - 1);
        }

        #[test]
        fn extra_wall_removal_keeps_maze_connected(
            w in 1u32..13,
            h in 1u32..13,
            extra in 0u32..6,
            seed in any::<u64>(),
        ) {
            let mut rng = MazeRng::new(seed);
            let mut grid = Grid::new(w, h).unwrap();
            let stats = MazeGenerator::new(extra).generate(&mut grid, None, &mut rng).unwrap();

            prop_assert!(is_connected(&grid, stats.seed));
            prop_assert!(stats.extra_walls_removed <= extra);
            prop_assert_eq!(grid.open_count(), stats.carved + stats.extra_walls_removed as usize);
        }
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use proptest::prelude::*;

    use mz_core::{Coord, MazeRng};

    use super::helpers::{assert_valid_path, bfs_depths, corridor, generated};
    use crate::{Grid, GridSearch, Path, PathFinder};

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn sense_along_corridor() {
        let g = corridor(7);
        let mut rng = MazeRng::new(0);
        let p = GridSearch.bounded_sense(&g, c(0, 0), None, c(3, 0), Some(3), &mut rng).unwrap();
        assert_eq!(p, Path::from(vec![c(1, 0), c(2, 0), c(3, 0)]));
    }

    #[test]
    fn sense_respects_bound() {
        let g = corridor(7);
        let mut rng = MazeRng::new(0);
        assert!(GridSearch.bounded_sense(&g, c(0, 0), None, c(3, 0), Some(2), &mut rng).is_none());
        assert!(GridSearch.bounded_sense(&g, c(0, 0), None, c(6, 0), None, &mut rng).is_some());
    }

    #[test]
    fn sense_own_cell_is_empty_but_found() {
        let g = corridor(3);
        let mut rng = MazeRng::new(0);
        let p = GridSearch.bounded_sense(&g, c(1, 0), None, c(1, 0), Some(2), &mut rng);
        assert_eq!(p, Some(Path::default()));
    }

    #[test]
    fn sense_never_approaches_avoided_cell() {
        let g = corridor(7);
        let mut rng = MazeRng::new(0);
        let avoid = Some(c(5, 0));
        assert!(GridSearch.bounded_sense(&g, c(0, 0), avoid, c(3, 0), None, &mut rng).is_some());
        // (4,0) is adjacent to the avoided cell.
        assert!(GridSearch.bounded_sense(&g, c(0, 0), avoid, c(4, 0), None, &mut rng).is_none());
    }

    #[test]
    fn sense_wall_goal_is_unreachable() {
        let g = Grid::from_rows(&["  #"]).unwrap();
        let mut rng = MazeRng::new(0);
        assert!(GridSearch.bounded_sense(&g, c(0, 0), None, c(2, 0), None, &mut rng).is_none());
    }

    #[test]
    fn sense_is_complete_within_bound_on_open_room() {
        // Every route to the far corner of an open 3×3 room is exactly 4
        // steps; a search that gives up on cells first reached by a detour
        // would miss some of them under a tight bound.
        let g = Grid::from_rows(&["   ", "   ", "   "]).unwrap();
        for seed in 0..64 {
            let mut rng = MazeRng::new(seed);
            let p = GridSearch.bounded_sense(&g, c(0, 0), None, c(2, 2), Some(4), &mut rng);
            let p = p.unwrap_or_else(|| panic!("seed {seed}: goal within bound not found"));
            assert_eq!(p.len(), 4);
            assert_valid_path(&g, c(0, 0), &p, None);
        }
    }

    #[test]
    fn longest_path_on_corridor() {
        let g = corridor(7);
        let mut rng = MazeRng::new(0);
        let p = GridSearch.longest_path(&g, c(0, 0), None, None, &mut rng);
        assert_eq!(p.len(), 6);
        assert_eq!(p.destination(), Some(c(6, 0)));
        assert_valid_path(&g, c(0, 0), &p, None);
    }

    #[test]
    fn longest_path_bounded_and_avoiding() {
        let g = corridor(7);
        let mut rng = MazeRng::new(0);
        let p = GridSearch.longest_path(&g, c(0, 0), None, Some(2), &mut rng);
        assert_eq!(p.destination(), Some(c(2, 0)));
        let p = GridSearch.longest_path(&g, c(0, 0), Some(c(5, 0)), None, &mut rng);
        assert_eq!(p.destination(), Some(c(3, 0)));
    }

    #[test]
    fn longest_path_around_a_ring() {
        let g = Grid::from_rows(&["   ", " # ", "   "]).unwrap();
        let mut rng = MazeRng::new(7);
        let p = GridSearch.longest_path(&g, c(0, 0), None, None, &mut rng);
        assert_eq!(p.len(), 4);
        assert_eq!(p.destination(), Some(c(2, 2)));
        assert_valid_path(&g, c(0, 0), &p, None);
    }

    #[test]
    fn longest_path_nowhere_to_go_is_empty() {
        let g = Grid::from_rows(&["# #", "  #"]).unwrap();
        let mut rng = MazeRng::new(0);
        // (1,0) is open but boxed in by walls and the border.
        let lonely = Grid::from_rows(&["# #", "###"]).unwrap();
        assert!(GridSearch.longest_path(&lonely, c(1, 0), None, None, &mut rng).is_empty());
        // Avoiding the only neighbour also leaves nowhere to go.
        assert!(GridSearch.longest_path(&g, c(1, 0), Some(c(1, 1)), None, &mut rng).is_empty());
    }

    #[test]
    fn path_helpers() {
        let mut p = Path::from(vec![c(1, 0), c(2, 0), c(3, 0)]);
        assert_eq!(p.destination(), Some(c(3, 0)));
        p.truncate(2);
        assert_eq!(p.destination(), Some(c(2, 0)));
        assert_eq!(p.next_step(), Some(c(1, 0)));
        assert_eq!(p.len(), 1);
        p.clear();
        assert!(p.is_empty());
        assert_eq!(p.next_step(), None);
    }

    /// Pick an open cell from a generated maze by index.
    fn pick_open(grid: &Grid, i: usize) -> Coord {
        let open: Vec<_> = grid.open_cells().collect();
        open[i % open.len()]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn sense_finds_goal_iff_route_within_bound(
            w in 2u32..10,
            h in 2u32..10,
            extra in 0u32..4,
            seed in any::<u64>(),
            s in any::<usize>(),
            t in any::<usize>(),
            a in proptest::option::of(any::<usize>()),
            max in 1u32..16,
        ) {
            let (grid, mut rng) = generated(w, h, extra, seed);
            let start = pick_open(&grid, s);
            let goal = pick_open(&grid, t);
            let avoid = a.map(|i| pick_open(&grid, i));

            let expected = bfs_depths(&grid, start, avoid)
                .get(&goal)
                .is_some_and(|&d| d <= max);
            let found = GridSearch.bounded_sense(&grid, start, avoid, goal, Some(max), &mut rng);

            prop_assert_eq!(found.is_some(), expected);
            if let Some(path) = found {
                prop_assert!(path.len() as u32 <= max);
                if start != goal {
                    prop_assert_eq!(path.destination(), Some(goal));
                }
                assert_valid_path(&grid, start, &path, avoid);
            }
        }

        #[test]
        fn longest_path_reaches_true_maximum_depth(
            w in 2u32..10,
            h in 2u32..10,
            extra in 0u32..4,
            seed in any::<u64>(),
            s in any::<usize>(),
            a in proptest::option::of(any::<usize>()),
            max in proptest::option::of(1u32..16),
        ) {
            let (grid, mut rng) = generated(w, h, extra, seed);
            let start = pick_open(&grid, s);
            let avoid = a.map(|i| pick_open(&grid, i));

            let depths = bfs_depths(&grid, start, avoid);
            let deepest = depths
                .values()
                .copied()
                .filter(|&d| max.is_none_or(|m| d <= m))
                .max()
                .unwrap_or(0);

            let path = GridSearch.longest_path(&grid, start, avoid, max, &mut rng);
            prop_assert_eq!(path.len() as u32, deepest);
            if let Some(end) = path.destination() {
                prop_assert_eq!(depths.get(&end).copied(), Some(deepest));
            }
            assert_valid_path(&grid, start, &path, avoid);
        }
    }
}

// ── Placement ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod placement {
    use proptest::prelude::*;

    use mz_core::{Coord, MazeRng};

    use super::helpers::{bfs_depths, corridor, generated};
    use crate::{
        Grid, GridSearch, MazeError, place_exit, place_runner, place_sentry, sentry_min_distance,
    };

    #[test]
    fn runner_keeps_prior_exit_cell() {
        let g = corridor(5);
        let mut rng = MazeRng::new(0);
        let prev = Coord::new(4, 0);
        let r = place_runner(&g, Some(prev), Some(prev), None, &mut rng).unwrap();
        assert_eq!(r, prev);
    }

    #[test]
    fn runner_keeps_prior_sentry_cell() {
        let g = corridor(5);
        let mut rng = MazeRng::new(0);
        let prev = Coord::new(2, 0);
        let r = place_runner(&g, Some(prev), Some(Coord::new(4, 0)), Some(prev), &mut rng).unwrap();
        assert_eq!(r, prev);
    }

    #[test]
    fn runner_on_new_wall_is_replaced() {
        let g = Grid::from_rows(&["#   "]).unwrap();
        let mut rng = MazeRng::new(0);
        let prev = Coord::new(0, 0);
        let r = place_runner(&g, Some(prev), Some(prev), None, &mut rng).unwrap();
        assert!(g.is_open(r));
        assert_ne!(r, prev);
    }

    #[test]
    fn runner_first_placement_is_open() {
        let (g, mut rng) = generated(7, 7, 1, 5);
        for _ in 0..50 {
            let r = place_runner(&g, None, None, None, &mut rng).unwrap();
            assert!(g.is_open(r));
        }
    }

    #[test]
    fn runner_needs_an_open_cell() {
        let g = Grid::new(3, 3).unwrap();
        let mut rng = MazeRng::new(0);
        assert!(matches!(
            place_runner(&g, None, None, None, &mut rng),
            Err(MazeError::NoOpenCell)
        ));
    }

    #[test]
    fn sentry_threshold_decays() {
        let g = Grid::new(7, 7).unwrap();
        assert_eq!(sentry_min_distance(&g, 0), 7);
        assert_eq!(sentry_min_distance(&g, 9), 7);
        assert_eq!(sentry_min_distance(&g, 10), 6);
        assert_eq!(sentry_min_distance(&g, 70), 0);
        assert_eq!(sentry_min_distance(&g, 5000), 0);
    }

    #[test]
    fn sentry_placed_in_two_cell_maze() {
        let g = corridor(2);
        let mut rng = MazeRng::new(8);
        let p = place_sentry(&g, Coord::new(0, 0), &mut rng).unwrap();
        assert_eq!(p.location, Coord::new(1, 0));
        assert_eq!(p.min_distance, 0);
    }

    #[test]
    fn sentry_unplaceable_when_runner_is_alone() {
        let g = Grid::from_rows(&[" #", "##"]).unwrap();
        let mut rng = MazeRng::new(0);
        assert!(matches!(
            place_sentry(&g, Coord::new(0, 0), &mut rng),
            Err(MazeError::SentryUnplaceable { .. })
        ));
    }

    #[test]
    fn exit_is_far_end_of_corridor() {
        let g = corridor(6);
        let mut rng = MazeRng::new(0);
        assert_eq!(place_exit(&g, Coord::new(0, 0), &GridSearch, &mut rng).unwrap(), Coord::new(5, 0));
    }

    #[test]
    fn exit_unreachable_on_single_open_cell() {
        let g = Grid::from_rows(&[" #"]).unwrap();
        let mut rng = MazeRng::new(0);
        assert!(matches!(
            place_exit(&g, Coord::new(0, 0), &GridSearch, &mut rng),
            Err(MazeError::UnreachableExit { .. })
        ));
    }

    #[test]
    fn seeded_seven_by_seven_scenario() {
        let (g, mut rng) = generated(7, 7, 1, 0x5eed);
        let runner = place_runner(&g, None, None, None, &mut rng).unwrap();
        let sentry = place_sentry(&g, runner, &mut rng).unwrap();
        let exit = place_exit(&g, runner, &GridSearch, &mut rng).unwrap();

        assert!(g.is_open(runner));
        assert!(g.is_open(exit));
        assert!(bfs_depths(&g, runner, None).get(&exit).is_some_and(|&d| d >= 1));
        assert!(g.is_open(sentry.location));
        assert!(sentry.location.manhattan(runner) > sentry.min_distance);
        assert_eq!(sentry.min_distance, sentry_min_distance(&g, sentry.attempts - 1));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn exit_is_a_farthest_cell(w in 1u32..10, h in 1u32..10, seed in any::<u64>()) {
            let (g, mut rng) = generated(w, h, 1, seed);
            let runner = place_runner(&g, None, None, None, &mut rng).unwrap();
            let depths = bfs_depths(&g, runner, None);
            let result = place_exit(&g, runner, &GridSearch, &mut rng);

            if g.open_count() > 1 {
                let exit = result.unwrap();
                let deepest = depths.values().copied().max().unwrap_or(0);
                prop_assert!(deepest >= 1);
                prop_assert_eq!(depths.get(&exit).copied(), Some(deepest));
            } else {
                prop_assert!(result.is_err());
            }
        }

        #[test]
        fn sentry_is_open_and_beyond_threshold(w in 2u32..10, h in 2u32..10, seed in any::<u64>()) {
            let (g, mut rng) = generated(w, h, 1, seed);
            prop_assume!(g.open_count() > 1);
            let runner = place_runner(&g, None, None, None, &mut rng).unwrap();
            let p = place_sentry(&g, runner, &mut rng).unwrap();
            prop_assert!(g.is_open(p.location));
            prop_assert!(p.location.manhattan(runner) > p.min_distance);
        }
    }
}
