use std::{cell::RefCell, rc::Rc};

use libgame::{
    Simulation,
    cell::CellState,
    grid::Grid,
    observer::{Observer, from_fn},
    pos::Position,
};
use rand::{SeedableRng, rngs::StdRng};

fn alive_positions(simulation: &Simulation) -> Vec<Position> {
    simulation
        .snapshot()
        .enumerate_cells()
        .filter(|(_, state)| state.is_alive())
        .map(|(pos, _)| pos)
        .collect()
}

fn positions(raw: &[[usize; 2]]) -> Vec<Position> {
    raw.iter().copied().map(Position::from).collect()
}

#[test]
fn blinker_oscillates_with_period_two() {
    let horizontal = [[2, 1], [2, 2], [2, 3]];
    let vertical = [[1, 2], [2, 2], [3, 2]];

    let mut simulation = Simulation::from_grid(Grid::with_alive(5, horizontal).unwrap());

    simulation.advance();
    assert_eq!(alive_positions(&simulation), positions(&vertical));

    simulation.advance();
    assert_eq!(alive_positions(&simulation), positions(&horizontal));
}

#[test]
fn block_is_a_still_life() {
    let block = [[1, 1], [1, 2], [2, 1], [2, 2]];
    let initial = Grid::with_alive(4, block).unwrap();
    let mut simulation = Simulation::from_grid(initial.clone());

    for _ in 0..10 {
        simulation.advance();
        assert_eq!(*simulation.snapshot(), initial);
    }
}

#[test]
fn block_in_a_corner_is_still_a_still_life() {
    let initial = Grid::with_alive(6, [[0, 0], [0, 1], [1, 0], [1, 1]]).unwrap();
    let mut simulation = Simulation::from_grid(initial.clone());

    simulation.advance();
    assert_eq!(*simulation.snapshot(), initial);
}

#[test]
fn survival_with_two_and_three_neighbors() {
    // (1, 1) has two live neighbors, (1, 2) has three.
    let grid = Grid::with_alive(5, [[1, 1], [1, 2], [0, 1], [2, 3]]).unwrap();
    assert_eq!(grid.live_neighbor_count([1, 1]), 2);
    assert_eq!(grid.live_neighbor_count([1, 2]), 3);

    let mut simulation = Simulation::from_grid(grid);
    simulation.advance();

    let snapshot = simulation.snapshot();
    assert_eq!(snapshot.get([1, 1]), Ok(CellState::Alive));
    assert_eq!(snapshot.get([1, 2]), Ok(CellState::Alive));
}

#[test]
fn death_by_isolation_and_overcrowding() {
    // Center of a plus sign has four neighbors, the lone corner cell none.
    let grid = Grid::with_alive(7, [[2, 2], [1, 2], [3, 2], [2, 1], [2, 3], [6, 6]]).unwrap();
    assert_eq!(grid.live_neighbor_count([2, 2]), 4);
    assert_eq!(grid.live_neighbor_count([6, 6]), 0);

    let mut simulation = Simulation::from_grid(grid);
    simulation.advance();

    let snapshot = simulation.snapshot();
    assert_eq!(snapshot.get([2, 2]), Ok(CellState::Dead));
    assert_eq!(snapshot.get([6, 6]), Ok(CellState::Dead));
}

#[test]
fn birth_with_exactly_three_neighbors() {
    let grid = Grid::with_alive(4, [[0, 0], [0, 2], [2, 1]]).unwrap();
    assert_eq!(grid.get([1, 1]), Ok(CellState::Dead));
    assert_eq!(grid.live_neighbor_count([1, 1]), 3);

    let mut simulation = Simulation::from_grid(grid);
    simulation.advance();

    assert_eq!(simulation.snapshot().get([1, 1]), Ok(CellState::Alive));
}

#[test]
fn update_reads_only_the_previous_generation() {
    // Updating in place row by row would kill (0, 0) before (1, 1) is counted,
    // leaving (1, 1) two neighbors short of a birth.
    let grid = Grid::with_alive(3, [[0, 0], [1, 2], [2, 1]]).unwrap();
    let mut simulation = Simulation::from_grid(grid);

    simulation.advance();

    let snapshot = simulation.snapshot();
    assert_eq!(snapshot.get([0, 0]), Ok(CellState::Dead));
    assert_eq!(snapshot.get([1, 1]), Ok(CellState::Alive));
}

#[test]
fn corner_cell_is_born_from_its_three_neighbors_only() {
    // Cells on the far edge must not wrap around to feed (0, 0).
    let grid = Grid::with_alive(5, [[0, 1], [1, 0], [1, 1], [4, 4], [0, 4], [4, 0]]).unwrap();
    assert_eq!(grid.live_neighbor_count([0, 0]), 3);

    let mut simulation = Simulation::from_grid(grid);
    simulation.advance();

    assert_eq!(simulation.snapshot().get([0, 0]), Ok(CellState::Alive));
}

#[test]
fn identical_grids_evolve_identically() {
    let grid = Grid::seeded(1024, 0.5, &mut StdRng::seed_from_u64(8)).unwrap();

    let mut a = Simulation::from_grid(grid.clone());
    let mut b = Simulation::from_grid(grid);

    for _ in 0..5 {
        a.advance();
        b.advance();
    }

    assert_eq!(*a.snapshot(), *b.snapshot());
}

#[test]
fn observers_are_notified_once_each_in_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut simulation = Simulation::from_grid(Grid::new(3).unwrap());

    for name in ["o1", "o2"] {
        let log = log.clone();
        simulation.subscribe(from_fn(move || {
            log.borrow_mut().push(name);
            Ok(())
        }));
    }

    assert_eq!(simulation.observer_count(), 2);

    simulation.advance();
    assert_eq!(*log.borrow(), ["o1", "o2"]);

    simulation.advance();
    assert_eq!(*log.borrow(), ["o1", "o2", "o1", "o2"]);
}

#[test]
fn observer_failure_is_isolated() {
    struct Broken;

    impl Observer for Broken {
        fn notify(&mut self) -> anyhow::Result<()> {
            anyhow::bail!("renderer closed")
        }
    }

    let notified = Rc::new(RefCell::new(0));
    let mut simulation = Simulation::from_grid(Grid::new(3).unwrap());

    simulation.subscribe(Broken);
    let counter = notified.clone();
    simulation.subscribe(from_fn(move || {
        *counter.borrow_mut() += 1;
        Ok(())
    }));

    simulation.advance();
    simulation.advance();

    assert_eq!(*notified.borrow(), 2);
    assert_eq!(simulation.generation(), 2);
}

#[test]
fn handles_follow_the_simulation() {
    let mut simulation = Simulation::from_grid(Grid::with_alive(5, [[2, 1], [2, 2], [2, 3]]).unwrap());
    let handle = simulation.handle();

    assert_eq!(handle.size(), 5);
    assert_eq!(handle.population(), 3);

    let row_before = handle.with_grid(|grid| grid.rows().nth(2).map(<[CellState]>::to_vec));

    simulation.advance();
    assert_eq!(handle.snapshot().get([1, 2]), Ok(CellState::Alive));
    assert_eq!(
        row_before,
        Some(vec![
            CellState::Dead,
            CellState::Alive,
            CellState::Alive,
            CellState::Alive,
            CellState::Dead,
        ])
    );

    let size = handle.with_grid(Grid::size);
    simulation.advance();
    assert_eq!(size, 5);
    assert_eq!(handle.population(), 3);
    assert_eq!(handle.snapshot().get([2, 1]), Ok(CellState::Dead));
}
