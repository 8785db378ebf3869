//! The 9x9 lattice of points the wave mesh is stitched from.

/// Points per grid side.
pub const GRID_SIDE: usize = 9;
/// Total number of lattice points.
pub const POINT_COUNT: usize = GRID_SIDE * GRID_SIDE;

/// A lattice point in normalized device coordinates with its phase offset
/// in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub offset: f32,
}

/// Row-major grid of points, row 0 at the top of the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    points: [Point; POINT_COUNT],
}

impl Grid {
    /// Builds the lattice with offsets drawn uniformly from the integers in
    /// `[0, 360)`.
    pub fn generate(rng: &mut fastrand::Rng) -> Self {
        let mut offsets = [0.0; POINT_COUNT];
        for offset in offsets.iter_mut() {
            *offset = rng.u32(0..360) as f32;
        }
        Self::with_offsets(offsets)
    }

    /// Builds the lattice with caller supplied offsets, in row-major order.
    pub fn with_offsets(offsets: [f32; POINT_COUNT]) -> Self {
        let points = std::array::from_fn(|i| {
            let (row, col) = (i / GRID_SIDE, i % GRID_SIDE);
            let (x, y) = lattice_position(row, col);
            Point {
                x,
                y,
                offset: offsets[i],
            }
        });
        Self { points }
    }

    /// # Panics
    /// If `row` or `col` is outside the grid.
    #[inline]
    pub fn point(&self, row: usize, col: usize) -> Point {
        assert!(row < GRID_SIDE && col < GRID_SIDE, "({row}, {col}) outside grid");
        self.points[row * GRID_SIDE + col]
    }

    pub fn points(&self) -> &[Point; POINT_COUNT] {
        &self.points
    }
}

/// Maps grid indices `0..=8` onto `[-1, 1]`, flipping rows so row 0 is `y = 1`.
#[inline]
pub fn lattice_position(row: usize, col: usize) -> (f32, f32) {
    let x = col as f32 / 4.0 - 1.0;
    let y = -(row as f32 / 4.0 - 1.0);
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn points_stay_inside_clip_space() {
        let grid = Grid::generate(&mut fastrand::Rng::with_seed(3));
        for p in grid.points() {
            assert!((-1.0..=1.0).contains(&p.x), "x = {}", p.x);
            assert!((-1.0..=1.0).contains(&p.y), "y = {}", p.y);
        }
    }

    #[test]
    fn positions_are_unique_per_index() {
        let grid = Grid::with_offsets([0.0; POINT_COUNT]);
        let seen: HashSet<(u32, u32)> = grid
            .points()
            .iter()
            .map(|p| (p.x.to_bits(), p.y.to_bits()))
            .collect();
        assert_eq!(seen.len(), POINT_COUNT);
    }

    #[test]
    fn corners() {
        let grid = Grid::with_offsets([0.0; POINT_COUNT]);
        let top_left = grid.point(0, 0);
        assert_eq!((top_left.x, top_left.y), (-1.0, 1.0));
        let bottom_right = grid.point(8, 8);
        assert_eq!((bottom_right.x, bottom_right.y), (1.0, -1.0));
        let centre = grid.point(4, 4);
        assert_eq!((centre.x, centre.y), (0.0, 0.0));
    }

    #[test]
    fn offsets_are_whole_degrees_below_360() {
        let grid = Grid::generate(&mut fastrand::Rng::with_seed(0xdead_beef));
        for p in grid.points() {
            assert!((0.0..360.0).contains(&p.offset));
            assert_eq!(p.offset.fract(), 0.0);
        }
    }

    #[test]
    fn same_seed_same_offsets() {
        let a = Grid::generate(&mut fastrand::Rng::with_seed(42));
        let b = Grid::generate(&mut fastrand::Rng::with_seed(42));
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    fn point_outside_grid_panics() {
        Grid::with_offsets([0.0; POINT_COUNT]).point(9, 0);
    }
}
