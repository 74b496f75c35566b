#[cfg(test)]
mod tests {
    use crate::lattice::{BoundingBox, Cell};
    use crate::patterns;
    use crate::Generation;

    const SEED: u64 = 42;

    fn generation(cells: &[(i64, i64)]) -> Generation {
        cells.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn neighbors_are_enumerated_north_row_first() {
        let expected = [
            (-1, 1),
            (0, 1),
            (1, 1),
            (-1, 0),
            (1, 0),
            (-1, -1),
            (0, -1),
            (1, -1),
        ]
        .map(|(x, y)| Cell::new(x, y));
        assert_eq!(Cell::new(0, 0).neighbors(), expected);
    }

    #[test]
    fn corners_of_empty_generation_default_to_origin() {
        let bbox = Generation::new().corners();
        assert_eq!(
            bbox,
            BoundingBox {
                bottom_left: Cell::new(0, 0),
                top_right: Cell::new(0, 0),
            }
        );
    }

    #[test]
    fn corners_cover_the_extremes() {
        let bbox = generation(&[(3, -7), (-2, 5), (0, 0)]).corners();
        assert_eq!(bbox.bottom_left, Cell::new(-2, -7));
        assert_eq!(bbox.top_right, Cell::new(3, 5));
    }

    #[test]
    fn duplicate_seed_cells_collapse() {
        let seeded = generation(&[(1, 1), (1, 1), (2, 1), (2, 1), (2, 1)]);
        assert_eq!(seeded.population(), 2);
    }

    #[test]
    fn living_neighbors_keeps_neighbor_order() {
        let square = generation(&[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let living = square.living_neighbors(Cell::new(1, 1));
        assert_eq!(
            living,
            vec![Cell::new(1, 2), Cell::new(2, 2), Cell::new(2, 1)]
        );
    }

    #[test]
    fn living_neighbors_matches_brute_force() {
        let soup = patterns::random_soup(16, 16, 0.3, Some(SEED)).unwrap();
        let scan = soup.corners().grown(1);
        for y in scan.bottom_left.y..=scan.top_right.y {
            for x in scan.bottom_left.x..=scan.top_right.x {
                let cell = Cell::new(x, y);
                let brute = soup
                    .cells()
                    .filter(|c| (c.x - x).abs().max((c.y - y).abs()) == 1)
                    .count();
                assert_eq!(
                    soup.living_neighbors(cell).len(),
                    brute,
                    "mismatch at ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn dead_cell_is_born_with_exactly_three_neighbors() {
        let three = generation(&[(0, 1), (1, 1), (2, 1)]);
        assert!(three.will_be_alive(Cell::new(1, 0)));

        let two = generation(&[(0, 1), (1, 1)]);
        assert!(!two.will_be_alive(Cell::new(1, 0)));

        let four = generation(&[(0, 1), (1, 1), (2, 1), (0, 0)]);
        assert!(!four.will_be_alive(Cell::new(1, 0)));
    }

    #[test]
    fn live_cell_survives_with_two_or_three_neighbors() {
        let center = Cell::new(1, 1);

        let with_two = generation(&[(1, 1), (0, 1), (2, 1)]);
        assert!(with_two.will_be_alive(center));

        let with_three = generation(&[(1, 1), (0, 1), (2, 1), (1, 2)]);
        assert!(with_three.will_be_alive(center));
    }

    #[test]
    fn live_cell_dies_outside_two_or_three_neighbors() {
        let center = Cell::new(1, 1);

        let alone = generation(&[(1, 1)]);
        assert!(!alone.will_be_alive(center));

        let with_one = generation(&[(1, 1), (0, 1)]);
        assert!(!with_one.will_be_alive(center));

        let with_four = generation(&[(1, 1), (0, 1), (2, 1), (1, 2), (1, 0)]);
        assert!(!with_four.will_be_alive(center));
    }

    #[test]
    fn empty_generation_steps_to_empty() {
        assert!(Generation::new().step().is_empty());
    }

    #[test]
    fn step_never_mutates_its_input() {
        let seed = patterns::lookup("rpentomino").unwrap();
        let before = seed.clone();
        let _ = seed.step();
        assert_eq!(seed, before);
    }
}
