#[cfg(test)]
mod tests {
    use crate::{floor_mod, Grid, LifeError};

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for &(x, y) in alive {
            grid.set_cell(x, y, true).unwrap();
        }
        grid
    }

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        let (w, h) = grid.size();
        let mut result = vec![];
        for y in 0..h {
            for x in 0..w {
                if grid.get_cell(x, y).unwrap() {
                    result.push((x, y));
                }
            }
        }
        result
    }

    #[test]
    fn test_floor_mod() {
        assert_eq!(floor_mod(-1, 5), 4);
        assert_eq!(floor_mod(5, 5), 0);
        assert_eq!(floor_mod(-6, 5), 4);
        assert_eq!(floor_mod(3, 5), 3);
    }

    #[test]
    fn test_new_is_blank() {
        let grid = Grid::new(7, 4).unwrap();
        assert_eq!(grid.size(), (7, 4));
        assert_eq!(grid.cells().len(), 28);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            LifeError::InvalidDimensions {
                width: 0,
                height: 5
            }
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(4, 3).unwrap();
        let err = LifeError::OutOfBounds {
            x: 4,
            y: 0,
            width: 4,
            height: 3,
        };
        assert_eq!(grid.set_cell(4, 0, true).unwrap_err(), err);
        assert_eq!(grid.get_cell(4, 0).unwrap_err(), err);
        assert!(grid.get_cell(0, 3).is_err());
        assert!(grid.toggle_cell(10, 10).is_err());
        assert!(grid.live_neighbors(0, 3).is_err());
    }

    #[test]
    fn test_out_of_bounds_huge_coordinates() {
        let grid = Grid::new(2, 2).unwrap();
        assert_eq!(
            grid.get_cell(usize::MAX, 1).unwrap_err(),
            LifeError::OutOfBounds {
                x: i64::MAX,
                y: 1,
                width: 2,
                height: 2
            }
        );
    }

    #[test]
    fn test_index_layout() {
        let grid = grid_with(4, 3, &[(1, 2)]);
        assert!(grid.cells()[2 * 4 + 1]);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_toggle() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(grid.toggle_cell(1, 1).unwrap());
        assert!(!grid.toggle_cell(1, 1).unwrap());
    }

    #[test]
    fn test_wraparound_neighbors() {
        let grid = grid_with(10, 10, &[(9, 0)]);
        assert_eq!(grid.live_neighbors(0, 0).unwrap(), 1);

        let grid = grid_with(
            10,
            10,
            &[
                (0, 0),
                (0, 1),
                (1, 0),
                (1, 1),
                (9, 0),
                (9, 1),
                (0, 9),
                (1, 9),
                (9, 9),
            ],
        );
        assert_eq!(grid.live_neighbors(0, 0).unwrap(), 8);
        assert_eq!(grid.live_neighbors(0, 1).unwrap(), 5);
        assert_eq!(grid.live_neighbors(1, 0).unwrap(), 5);
        assert_eq!(grid.live_neighbors(1, 1).unwrap(), 3);
    }

    #[test]
    fn test_lone_cell_dies() {
        let mut grid = grid_with(8, 8, &[(4, 4)]);
        grid.step();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_birth() {
        let mut grid = grid_with(8, 8, &[(3, 3), (4, 3), (5, 3)]);
        assert_eq!(grid.live_neighbors(4, 4).unwrap(), 3);
        grid.step();
        assert!(grid.get_cell(4, 4).unwrap());
        assert!(grid.get_cell(4, 2).unwrap());
    }

    #[test]
    fn test_survival_with_two_neighbors() {
        let mut grid = grid_with(10, 10, &[(0, 0), (0, 1), (1, 0)]);
        grid.step();
        assert!(grid.get_cell(0, 0).unwrap());
        assert!(grid.get_cell(1, 0).unwrap());
        assert!(grid.get_cell(0, 1).unwrap());
    }

    #[test]
    fn test_overpopulation() {
        let mut grid = grid_with(8, 8, &[(4, 4), (3, 3), (5, 3), (3, 5), (5, 5)]);
        grid.step();
        assert!(!grid.get_cell(4, 4).unwrap());
    }

    #[test]
    fn test_block_still_life() {
        let block = [(2, 2), (3, 2), (2, 3), (3, 3)];
        let mut grid = grid_with(6, 6, &block);
        let before = grid.cells().to_vec();
        grid.step();
        assert_eq!(grid.cells(), &before[..]);
    }

    #[test]
    fn test_block_across_corner() {
        let mut grid = grid_with(6, 5, &[(5, 4), (0, 4), (5, 0), (0, 0)]);
        let before = grid.cells().to_vec();
        grid.step_n(3);
        assert_eq!(grid.cells(), &before[..]);
    }

    #[test]
    fn test_blinker() {
        let column: [(usize, usize); 3] = [(2, 1), (2, 2), (2, 3)];
        let row: [(usize, usize); 3] = [(1, 2), (2, 2), (3, 2)];
        let mut grid = grid_with(5, 5, &column);
        grid.step();
        assert_eq!(alive_cells(&grid), row);
        grid.step();
        assert_eq!(alive_cells(&grid), column);
    }

    #[test]
    fn test_tiny_torus() {
        // on a 3x3 torus every cell neighbors all the others
        let mut grid = grid_with(3, 3, &[(1, 0), (1, 1), (1, 2)]);
        grid.step();
        assert_eq!(grid.population(), 9);
        grid.step();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_reinitialize() {
        let mut grid = grid_with(5, 5, &[(1, 1), (2, 2)]);
        grid.reinitialize(5, 5).unwrap();
        assert_eq!(grid.population(), 0);

        grid.set_cell(4, 4, true).unwrap();
        grid.reinitialize(2, 3).unwrap();
        assert_eq!(grid.size(), (2, 3));
        assert_eq!(grid.cells().len(), 6);
        assert_eq!(grid.population(), 0);
        assert!(grid.reinitialize(0, 3).is_err());
    }

    #[test]
    fn test_random_is_seeded() {
        let a = Grid::random(16, 16, Some(42), 0.3).unwrap();
        let b = Grid::random(16, 16, Some(42), 0.3).unwrap();
        assert_eq!(a.cells(), b.cells());
        assert!(a.population() > 0);

        let full = Grid::random(4, 4, None, 1.).unwrap();
        assert_eq!(full.population(), 16);

        let mut grid = Grid::random(4, 4, Some(42), 1.).unwrap();
        grid.randomize(Some(42), f64::NAN);
        assert_eq!(grid.population(), 0);
        grid.randomize(Some(42), 7.);
        assert_eq!(grid.population(), 16);
    }

    #[test]
    fn test_display() {
        let grid = grid_with(3, 2, &[(0, 0), (2, 1)]);
        assert_eq!(grid.to_string(), "#..\n..#\n");
    }
}
