use std::collections::{HashMap, HashSet, VecDeque};

use maze_core::{Maze, Point};
use maze_paths::{Algorithm, SearchResult};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Shortest step count from start to every reachable cell, by a plain
/// deterministic breadth-first flood.
fn distances(maze: &Maze) -> HashMap<Point, usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(maze.start(), 0);
    queue.push_back(maze.start());
    while let Some(p) = queue.pop_front() {
        let d = dist[&p];
        for n in p.neighbors_4() {
            if maze.is_passable(n) && !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

fn check_invariants(maze: &Maze, algo: Algorithm, r: &SearchResult) {
    let dist = distances(maze);
    let reachable = dist.contains_key(&maze.goal());
    assert_eq!(r.found, reachable, "{algo}: completeness");

    for cells in [&r.visited_order, &r.path] {
        assert!(!cells.contains(&maze.start()), "{algo}: start leaked");
        assert!(!cells.contains(&maze.goal()), "{algo}: goal leaked");
    }

    let unique: HashSet<Point> = r.visited_order.iter().copied().collect();
    assert_eq!(unique.len(), r.visited_order.len(), "{algo}: cell expanded twice");
    assert!(
        r.visited_order.iter().all(|p| dist.contains_key(p)),
        "{algo}: expanded an unreachable cell"
    );

    if r.found {
        let mut chain = vec![maze.start()];
        chain.extend(&r.path);
        chain.push(maze.goal());
        for w in chain.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{algo}: {} -> {} is not a step", w[0], w[1]);
            assert!(!maze.is_wall(w[1]), "{algo}: path crosses a wall");
        }
        if algo.is_optimal() {
            assert_eq!(r.steps(), Some(dist[&maze.goal()]), "{algo}: not shortest");
        }
    } else {
        assert!(r.path.is_empty());
        let expected: HashSet<Point> = dist
            .keys()
            .copied()
            .filter(|&p| p != maze.start())
            .collect();
        assert_eq!(unique, expected, "{algo}: exhausted search missed cells");
    }
}

#[test]
fn three_by_three_example() {
    let maze = Maze::parse("S..\n.#.\n..G").unwrap();
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        for algo in Algorithm::ALL {
            let r = algo.run(&maze, &mut rng);
            assert!(r.found);
            if algo.is_optimal() {
                assert_eq!(r.path.len(), 3);
            }
            check_invariants(&maze, algo, &r);
        }
    }
}

#[test]
fn enclosed_goal_is_not_found() {
    let maze = Maze::parse("S...\n..#.\n.#G#\n..#.").unwrap();
    let reachable: HashSet<Point> = [
        (0, 1),
        (0, 2),
        (0, 3),
        (1, 0),
        (1, 1),
        (1, 3),
        (2, 0),
        (3, 0),
        (3, 1),
    ]
    .into_iter()
    .map(|(r, c)| Point::new(r, c))
    .collect();

    let mut rng = StdRng::seed_from_u64(99);
    for algo in Algorithm::ALL {
        let r = algo.run(&maze, &mut rng);
        assert!(!r.found, "{algo}");
        assert!(r.path.is_empty(), "{algo}");
        assert_eq!(r.visited_order.len(), reachable.len(), "{algo}");
        assert_eq!(
            r.visited_order.iter().copied().collect::<HashSet<_>>(),
            reachable,
            "{algo}"
        );
    }
}

#[test]
fn same_seed_same_trace() {
    let maze = Maze::parse("S.....\n.#.##.\n......\n.##.#G").unwrap();
    for algo in Algorithm::ALL {
        let a = algo.run(&maze, &mut StdRng::seed_from_u64(17));
        let b = algo.run(&maze, &mut StdRng::seed_from_u64(17));
        assert_eq!(a, b, "{algo}");
    }
}

#[test]
fn different_seeds_vary_the_trace() {
    let maze = Maze::parse("S.....\n......\n......\n.....G").unwrap();
    for algo in [Algorithm::Bfs, Algorithm::Dfs] {
        let traces: HashSet<Vec<Point>> = (0..32)
            .map(|seed| algo.run(&maze, &mut StdRng::seed_from_u64(seed)).visited_order)
            .collect();
        assert!(traces.len() > 1, "{algo}");
    }
}

#[test]
fn searches_share_a_maze_across_threads() {
    let maze = Maze::parse("S..#....\n.#.#.##.\n.#...#..\n...#...G").unwrap();
    std::thread::scope(|s| {
        for (i, algo) in Algorithm::ALL.into_iter().enumerate() {
            let maze = &maze;
            s.spawn(move || {
                let r = algo.run(maze, &mut StdRng::seed_from_u64(i as u64));
                check_invariants(maze, algo, &r);
            });
        }
    });
}

/// Random maze text: up to 8×8, about 30% walls, distinct start and goal.
fn maze_text() -> impl Strategy<Value = String> {
    (1usize..=8, 2usize..=8)
        .prop_flat_map(|(rows, cols)| {
            let n = rows * cols;
            (
                Just(rows),
                Just(cols),
                prop::collection::vec(prop::bool::weighted(0.3), n),
                0..n,
                0..n,
            )
        })
        .prop_filter("start and goal must differ", |(_, _, _, s, g)| s != g)
        .prop_map(|(rows, cols, walls, s, g)| {
            let mut text = String::with_capacity(rows * (cols + 1));
            for r in 0..rows {
                for c in 0..cols {
                    let i = r * cols + c;
                    text.push(match i {
                        _ if i == s => 'S',
                        _ if i == g => 'G',
                        _ if walls[i] => '#',
                        _ => '.',
                    });
                }
                text.push('\n');
            }
            text
        })
}

proptest! {
    #[test]
    fn every_strategy_is_sound_and_complete(text in maze_text(), seed in any::<u64>()) {
        let maze = Maze::parse(&text).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        for algo in Algorithm::ALL {
            let r = algo.run(&maze, &mut rng);
            check_invariants(&maze, algo, &r);
        }
    }

    #[test]
    fn text_round_trips(text in maze_text()) {
        let maze = Maze::parse(&text).unwrap();
        prop_assert_eq!(maze.to_string(), text);
    }
}
