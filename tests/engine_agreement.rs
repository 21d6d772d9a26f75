use life_engine::{Boundary, Coord, DenseGrid, Generation, Pattern, SparseCellSet, presets};
use std::collections::BTreeSet;

fn live<G: Generation>(generation: &G) -> BTreeSet<Coord> {
    generation.live_cells().collect()
}

/// Seed the same pattern into both engines and compare after every step
fn assert_engines_agree(pattern: &Pattern, origin: Coord, size: usize, generations: usize) {
    let mut dense = DenseGrid::new(size, size);
    let mut sparse = SparseCellSet::new();
    pattern.place_on(&mut dense, origin);
    pattern.place_on(&mut sparse, origin);

    for generation in 1..=generations {
        dense = dense.advance();
        sparse = sparse.advance();

        // Activity must stay clear of the frozen ring for the comparison to hold
        let ((min_x, min_y), (max_x, max_y)) = sparse.bounding_box().unwrap_or(((1, 1), (1, 1)));
        let limit = size as i64 - 2;
        assert!(
            min_x > 0 && min_y > 0 && max_x < limit && max_y < limit,
            "{} reached the border at generation {}",
            pattern.name,
            generation
        );

        assert_eq!(live(&dense), live(&sparse), "{} diverged at generation {}", pattern.name, generation);
    }
}

#[test]
fn glider_agrees() {
    assert_engines_agree(&presets::glider(), (10, 10), 100, 40);
}

#[test]
fn r_pentomino_agrees() {
    assert_engines_agree(&presets::r_pentomino(), (100, 100), 200, 30);
}

#[test]
fn acorn_agrees() {
    assert_engines_agree(&presets::acorn(), (150, 150), 300, 50);
}

#[test]
fn toroidal_agrees_away_from_edges() {
    let mut dense = DenseGrid::with_boundary(60, 60, Boundary::Toroidal);
    let mut sparse = SparseCellSet::new();
    presets::pulsar().place_on(&mut dense, (20, 20));
    presets::pulsar().place_on(&mut sparse, (20, 20));

    for _ in 0..9 {
        dense = dense.advance_parallel();
        sparse = sparse.advance();
    }
    assert_eq!(live(&dense), live(&sparse));
}

#[test]
fn glider_regression() {
    let glider: SparseCellSet = [(2, 0), (2, 1), (2, 2), (1, 2), (0, 1)]
        .into_iter()
        .collect::<SparseCellSet>()
        .translated((7, -3));

    let expected_phases: [&[Coord]; 4] = [
        &[(1, 0), (1, 2), (2, 1), (2, 2), (3, 1)],
        &[(1, 2), (2, 0), (2, 2), (3, 1), (3, 2)],
        &[(1, 1), (2, 2), (2, 3), (3, 1), (3, 2)],
        &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)],
    ];

    let mut current = glider.clone();
    for phase in expected_phases {
        current = current.advance();
        let expected: SparseCellSet = phase.iter().copied().collect::<SparseCellSet>().translated((7, -3));
        assert_eq!(current, expected);
    }
    assert_eq!(current, glider.translated((1, 1)));
}

#[test]
fn dense_border_ring_never_changes() {
    let mut grid = DenseGrid::new(16, 16);
    for pattern in presets::all_patterns().iter().take(4) {
        pattern.place_on(&mut grid, (0, 0));
        pattern.place_on(&mut grid, (13, 13));
    }
    let ring = |grid: &DenseGrid| -> BTreeSet<Coord> {
        live(grid)
            .into_iter()
            .filter(|&(x, y)| x == 0 || y == 0 || x == 15 || y == 15)
            .collect()
    };

    let start = ring(&grid);
    let mut current = grid;
    for _ in 0..20 {
        current = current.advance();
        assert_eq!(ring(&current), start);
    }
}

#[test]
fn advance_is_deterministic_and_pure() {
    let mut sparse = SparseCellSet::new();
    presets::glider_gun().place_on(&mut sparse, (-18, -4));
    let dense = DenseGrid::from_live_cells(60, 30, Boundary::Frozen, sparse.translated((20, 10)).live_cells());

    let sparse_before = sparse.clone();
    let dense_before = dense.clone();

    assert_eq!(sparse.advance_by(30), sparse.advance_by(30));
    assert_eq!(dense.advance_by(30), dense.advance_by(30));
    assert_eq!(sparse, sparse_before);
    assert_eq!(dense, dense_before);
}
