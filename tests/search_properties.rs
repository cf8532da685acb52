use maze_search::algorithms::{a_star, bfs, dfs, greedy_best_first, SearchLimits};
use maze_search::maze::{self, MazeGenerator};
use maze_search::{Algorithm, Grid, MazeError, Position, Termination};
use pathfinding::prelude::bfs as oracle_bfs;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Shortest distance computed independently of the search engine.
fn oracle_distance(grid: &Grid) -> Option<usize> {
    let goal = grid.goal();
    oracle_bfs(&grid.start(), |c| grid.neighbors(c), |c| *c == goal).map(|path| path.len() - 1)
}

/// Random grids, solvable or not, with random walls on every cell but the corners.
fn random_grids(seed: u64, count: usize) -> Vec<Grid> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let rows = rng.gen_range(1..14);
            let cols = rng.gen_range(1..14);
            let wall_prob = rng.gen_range(0.0..0.5);
            let (start, goal) = (p(0, 0), p(rows - 1, cols - 1));
            let walls: Vec<_> = (0..rows)
                .flat_map(|r| (0..cols).map(move |c| p(r, c)))
                .filter(|&pos| pos != start && pos != goal)
                .filter(|_| rng.gen_bool(wall_prob))
                .collect();
            Grid::new(rows, cols, walls, start, goal).unwrap()
        })
        .collect()
}

fn assert_valid_path(grid: &Grid, path: &[Position]) {
    assert_eq!(path.first(), Some(&grid.start()));
    assert_eq!(path.last(), Some(&grid.goal()));
    assert!(path.iter().all(|c| !grid.is_wall(*c)));
    assert!(path.windows(2).all(|w| w[0].is_adjacent(&w[1])));
}

#[test]
fn optimal_algorithms_match_oracle_distance() {
    for grid in random_grids(11, 200) {
        let expected = oracle_distance(&grid);
        for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_optimal()) {
            let result = algorithm.search(&grid, grid.start(), grid.goal()).unwrap();
            assert_eq!(result.found, expected.is_some(), "{} on\n{}", algorithm, grid);
            if let Some(distance) = expected {
                assert_eq!(result.path_length(), distance, "{} on\n{}", algorithm, grid);
            }
        }
    }
}

#[test]
fn every_algorithm_produces_consistent_results() {
    for grid in random_grids(23, 200) {
        let shortest = oracle_distance(&grid);
        for algorithm in Algorithm::ALL {
            let result = algorithm.search(&grid, grid.start(), grid.goal()).unwrap();

            let unique: HashSet<_> = result.explored_order.iter().collect();
            assert_eq!(unique.len(), result.explored_count(), "{} revisited a cell", algorithm);
            assert_eq!(result.explored_order.first(), Some(&grid.start()));

            if result.found {
                assert_eq!(result.termination, Termination::GoalReached);
                assert!(result.explored_count() >= result.path_length());
                assert_eq!(result.explored_order.last(), Some(&grid.goal()));
                assert_valid_path(&grid, &result.path);
                assert!(result.path_length() >= shortest.unwrap_or(0));
            } else {
                assert_eq!(result.termination, Termination::FrontierExhausted);
                assert!(result.path.is_empty());
                assert_eq!(
                    result.explored_count(),
                    maze::reachable_count(&grid, grid.start())
                );
            }
        }
    }
}

#[test]
fn searches_are_deterministic() {
    let grid = MazeGenerator::new(20, 30, 0.3).unwrap().generate_seeded(Some(99));
    for algorithm in Algorithm::ALL {
        let first = algorithm.search(&grid, grid.start(), grid.goal()).unwrap();
        let second = algorithm.search(&grid, grid.start(), grid.goal()).unwrap();
        assert_eq!(first.explored_order, second.explored_order);
        assert_eq!(first.path, second.path);
    }
}

#[test]
fn open_three_by_three() {
    let grid = Grid::new(3, 3, [], p(0, 0), p(2, 2)).unwrap();
    let (start, goal) = (grid.start(), grid.goal());

    assert_eq!(bfs(&grid, start, goal).unwrap().path_length(), 4);
    assert_eq!(a_star(&grid, start, goal).unwrap().path_length(), 4);
    assert_eq!(greedy_best_first(&grid, start, goal).unwrap().path_length(), 4);
    let depth = dfs(&grid, start, goal).unwrap();
    assert_eq!(depth.path, vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)]);
}

#[test]
fn walled_off_goal_fails_everywhere() {
    let grid = Grid::from_rows(
        &[[0u8, 0, 0, 0], [0, 0, 0, 0], [0, 0, 1, 1], [0, 0, 1, 0]],
        p(0, 0),
        p(3, 3),
    )
    .unwrap();
    let reachable = maze::reachable_count(&grid, grid.start());
    assert_eq!(reachable, 12);

    for algorithm in Algorithm::ALL {
        let result = algorithm.search(&grid, grid.start(), grid.goal()).unwrap();
        assert!(!result.found);
        assert!(result.path.is_empty());
        assert_eq!(result.path_length(), 0);
        assert_eq!(result.explored_count(), reachable, "{}", algorithm);
    }
}

#[test]
fn fallback_maze_comparison() {
    let grid = maze::fallback();
    let (start, goal) = (grid.start(), grid.goal());

    let breadth = bfs(&grid, start, goal).unwrap();
    let astar = a_star(&grid, start, goal).unwrap();
    assert_eq!(breadth.path_length(), 23);
    assert_eq!(astar.path_length(), 23);
    assert_eq!(breadth.explored_count(), 83);
    assert!(astar.explored_count() < breadth.explored_count());

    let depth = dfs(&grid, start, goal).unwrap();
    assert_eq!((depth.path_length(), depth.explored_count()), (37, 48));
}

#[test]
fn generator_output_is_always_solvable() {
    let mut rng = StdRng::seed_from_u64(5);
    for wall_prob in [0.0, 0.2, 0.4, 0.6, 0.9] {
        let generator = MazeGenerator::new(15, 20, wall_prob)
            .unwrap()
            .with_max_attempts(25)
            .unwrap();
        for _ in 0..5 {
            let grid = generator.generate(&mut rng);
            assert!(maze::has_valid_path(&grid));
            assert!(oracle_distance(&grid).is_some());
        }
    }
}

#[test]
fn expansion_limit_bounds_work() {
    let grid = MazeGenerator::new(30, 30, 0.2).unwrap().generate_seeded(Some(8));
    for algorithm in Algorithm::ALL {
        let result = algorithm
            .search_with_limits(&grid, grid.start(), grid.goal(), SearchLimits::max_expansions(10))
            .unwrap();
        assert!(result.explored_count() <= 10);
        if !result.found {
            assert_eq!(result.termination, Termination::ExpansionLimit);
        }
    }
}

#[test]
fn invalid_endpoints_are_configuration_errors() {
    let grid = Grid::new(3, 3, [p(1, 1)], p(0, 0), p(2, 2)).unwrap();
    assert!(matches!(
        bfs(&grid, p(0, 0), p(1, 1)),
        Err(MazeError::OnWall { .. })
    ));
    assert!(matches!(
        a_star(&grid, p(3, 0), p(2, 2)),
        Err(MazeError::OutOfBounds { .. })
    ));
}

#[test]
fn searches_share_a_grid_across_threads() {
    let grid = MazeGenerator::new(25, 25, 0.25).unwrap().generate_seeded(Some(3));
    let sequential: Vec<_> = Algorithm::ALL
        .iter()
        .map(|a| a.search(&grid, grid.start(), grid.goal()).unwrap())
        .collect();

    let parallel: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = Algorithm::ALL
            .into_iter()
            .map(|a| {
                let grid = &grid;
                s.spawn(move || a.search(grid, grid.start(), grid.goal()).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}
