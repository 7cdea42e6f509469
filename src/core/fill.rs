//! Block fill
//!
//! Iterative flood fill over the drawing area. A work stack replaces
//! recursion so call depth does not grow with the size of the region.
//!
//! A cell is recolored the moment it is popped, before its neighbors are
//! examined. Stale stack entries (cells pushed twice before being reached)
//! are skipped because they no longer hold the original color, so every
//! cell is recolored at most once regardless of traversal order.

use tracing::trace;

use super::boundary::Boundary;
use super::canvas::to_index;
use super::geometry::Point;
use super::grid::Grid;

/// Recolor the 4-connected region of `start`'s color to `color`
///
/// Only cells inside `bounds` are visited, so the border frame is never
/// touched even when it shares the region's color. Returns the number of
/// cells recolored; filling a region with its own color is a no-op.
pub fn flood_fill(grid: &mut Grid, bounds: &Boundary, start: Point, color: char) -> usize {
    if !bounds.contains(start) {
        return 0;
    }
    let Some(old) = color_at(grid, start) else {
        return 0;
    };
    if old == color {
        return 0;
    }

    let mut stack = vec![start];
    let mut filled = 0;

    while let Some(p) = stack.pop() {
        match cell_mut(grid, p) {
            Some(cell) if *cell == old => *cell = color,
            _ => continue,
        }
        filled += 1;

        let neighbors = [
            Point::new(p.x - 1, p.y),
            Point::new(p.x, p.y - 1),
            Point::new(p.x + 1, p.y),
            Point::new(p.x, p.y + 1),
        ];
        for n in neighbors {
            if bounds.contains(n) && color_at(grid, n) == Some(old) {
                stack.push(n);
            }
        }
    }

    trace!(x = start.x, y = start.y, filled, "Block fill complete");
    filled
}

fn color_at(grid: &Grid, p: Point) -> Option<char> {
    grid.cell(to_index(p.x)?, to_index(p.y)?)
}

fn cell_mut(grid: &mut Grid, p: Point) -> Option<&mut char> {
    grid.cell_mut(to_index(p.x)?, to_index(p.y)?)
}
