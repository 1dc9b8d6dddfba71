/*
 * Spatial Grid Module
 *
 * This module defines the SpatialGrid struct for neighbour lookups that avoid
 * scanning the whole population. The plane is divided into square cells at
 * least as large as the query radius, so every neighbour of a boid lies in the
 * boid's own cell or one of the eight around it.
 *
 * The grid is only an accelerator: a query returns exactly the boids the full
 * scan would, in the same (ascending index) order, so the floating point sums
 * in the flocking rules come out bit-identical.
 */

use crate::boid::Boid;
use crate::math::are_neighbours;
use crate::neighbourhood;

// Upper bound on cells per axis; tiny radii just get coarser cells
const MAX_CELLS_PER_AXIS: f64 = 256.0;

// Headroom over the query radius so rounding in the cell arithmetic can never
// push a neighbour two cells away
const CELL_MARGIN: f64 = 1.01;

#[derive(Debug, Clone)]
pub struct SpatialGrid {
    pub cell_size: f64,
    pub columns: usize,
    pub rows: usize,
    cells: Vec<Vec<usize>>,
}

impl SpatialGrid {
    pub fn new(cell_size: f64, max_x: f64, max_y: f64) -> Self {
        let floor = max_x.max(max_y) / MAX_CELLS_PER_AXIS;
        let cell_size = cell_size.max(floor);
        let columns = ((max_x / cell_size).ceil() as usize).max(1);
        let rows = ((max_y / cell_size).ceil() as usize).max(1);

        Self {
            cell_size,
            columns,
            rows,
            cells: vec![Vec::new(); columns * rows],
        }
    }

    /// Builds a grid sized for queries up to `radius` and fills it.
    pub fn for_radius(population: &[Boid], radius: f64, max_x: f64, max_y: f64) -> Self {
        let mut grid = Self::new(radius * CELL_MARGIN, max_x, max_y);
        for (index, boid) in population.iter().enumerate() {
            grid.insert(index, boid);
        }
        grid
    }

    // Convert plane coordinates to grid cell coordinates. Out-of-plane positions
    // are clamped onto the border cells, which keeps adjacent points adjacent.
    #[inline]
    fn cell_coords(&self, x: f64, y: f64) -> (usize, usize) {
        let column = ((x / self.cell_size).floor() as isize).clamp(0, self.columns as isize - 1);
        let row = ((y / self.cell_size).floor() as isize).clamp(0, self.rows as isize - 1);
        (column as usize, row as usize)
    }

    #[inline]
    pub fn insert(&mut self, index: usize, boid: &Boid) {
        let (column, row) = self.cell_coords(boid.x, boid.y);
        self.cells[row * self.columns + column].push(index);
    }

    // Indices in the boid's cell and the eight surrounding ones (3x3 block)
    pub fn nearby_indices(&self, boid: &Boid) -> Vec<usize> {
        let (column, row) = self.cell_coords(boid.x, boid.y);
        let mut result = Vec::new();

        for check_row in row.saturating_sub(1)..=(row + 1).min(self.rows - 1) {
            let row_start = check_row * self.columns;
            for check_column in column.saturating_sub(1)..=(column + 1).min(self.columns - 1) {
                result.extend_from_slice(&self.cells[row_start + check_column]);
            }
        }

        result
    }

    /// Same contract as [`neighbourhood::neighbours`].
    pub fn neighbours<'a>(&self, subject: usize, population: &'a [Boid], radius: f64) -> Vec<&'a Boid> {
        if radius > self.cell_size {
            return neighbourhood::neighbours(subject, population, radius);
        }

        let boid = &population[subject];
        let mut candidates = self.nearby_indices(boid);
        candidates.sort_unstable();
        candidates
            .into_iter()
            .filter(|&index| index != subject)
            .map(|index| &population[index])
            .filter(|other| are_neighbours(boid, other, radius))
            .collect()
    }
}
