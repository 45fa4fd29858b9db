//! Properties of the destination search that hold for every start and roll.

use std::sync::Arc;
use std::thread;

use proptest::prelude::*;
use rustc_hash::FxHashSet;
use sleuth_board::{BoardError, BoardQuery, Grid, Location, TileKind};

fn on_board() -> impl Strategy<Value = Location> {
    (0i32..25, 0i32..24).prop_map(|(x, y)| Location::new(x, y))
}

proptest! {
    #[test]
    fn adjacency_is_west_east_north_south(x in -50i32..50, y in -50i32..50) {
        let grid = Grid::reference();
        let q = BoardQuery::new(&grid);
        prop_assert_eq!(
            q.adjacent_locations(Location::new(x, y)),
            [
                Location::new(x - 1, y),
                Location::new(x + 1, y),
                Location::new(x, y - 1),
                Location::new(x, y + 1),
            ]
        );
    }

    #[test]
    fn zero_roll_is_the_start_itself(start in on_board(), extra in on_board()) {
        let grid = Grid::reference();
        let q = BoardQuery::new(&grid);
        let exclude: FxHashSet<Location> = [start, extra].into_iter().collect();
        let got = q.available_destinations(0, start, &exclude).unwrap();
        prop_assert_eq!(got, [start].into_iter().collect::<FxHashSet<_>>());
    }

    #[test]
    fn search_is_idempotent_and_stays_on_open_tiles(start in on_board(), roll in 0u32..=6) {
        let grid = Grid::reference();
        let q = BoardQuery::new(&grid);
        let first = q.destinations_from(roll, start).unwrap();
        let second = q.destinations_from(roll, start).unwrap();
        prop_assert_eq!(&first, &second);

        for loc in &first {
            prop_assert!(grid.in_board(*loc));
            prop_assert!(loc.x >= 0 && loc.y >= 0);
            prop_assert!((loc.x as usize) < grid.width() && (loc.y as usize) < grid.height());
            if roll > 0 {
                prop_assert!(q.is_accessible(*loc).unwrap());
                prop_assert!(*loc != start);
            }
        }
    }

    #[test]
    fn immediate_exclusions_are_never_first_steps(start in on_board()) {
        let grid = Grid::reference();
        let q = BoardQuery::new(&grid);
        let mut exclude: FxHashSet<Location> = q.adjacent_locations(start).into_iter().collect();
        exclude.insert(start);
        let before = exclude.clone();
        let got = q.available_destinations(1, start, &exclude).unwrap();
        prop_assert!(got.is_empty());
        prop_assert_eq!(exclude, before);
    }

    #[test]
    fn door_rule_is_axis_bound(door in on_board()) {
        let grid = Grid::reference();
        let q = BoardQuery::new(&grid);
        match grid.tile_at(door).unwrap() {
            TileKind::DoorNorthSouth => {
                prop_assert!(q.door_accessible(Location::new(door.x, door.y - 1), door).unwrap());
                prop_assert!(q.door_accessible(Location::new(door.x, door.y + 1), door).unwrap());
                prop_assert!(!q.door_accessible(Location::new(door.x - 1, door.y), door).unwrap());
                prop_assert!(!q.door_accessible(Location::new(door.x + 1, door.y), door).unwrap());
            }
            TileKind::DoorEastWest => {
                prop_assert!(q.door_accessible(Location::new(door.x - 1, door.y), door).unwrap());
                prop_assert!(q.door_accessible(Location::new(door.x + 1, door.y), door).unwrap());
                prop_assert!(!q.door_accessible(Location::new(door.x, door.y - 1), door).unwrap());
                prop_assert!(!q.door_accessible(Location::new(door.x, door.y + 1), door).unwrap());
            }
            _ => {
                let is_not_a_door = matches!(
                    q.door_accessible(Location::new(door.x, door.y + 1), door),
                    Err(BoardError::NotADoor { .. })
                );
                prop_assert!(is_not_a_door);
            }
        }
    }
}

#[test]
fn one_grid_serves_many_threads() {
    let grid = Arc::new(Grid::reference());
    let expected = BoardQuery::new(&grid)
        .destinations_from(4, Location::new(12, 17))
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let grid = Arc::clone(&grid);
            thread::spawn(move || {
                BoardQuery::new(&grid)
                    .destinations_from(4, Location::new(12, 17))
                    .unwrap()
            })
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
