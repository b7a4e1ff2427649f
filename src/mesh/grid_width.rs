//! Data structure that holds the grid width's.

use crate::{BoxSize, Float, GridSize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridWidth {
    pub x: Float,
    pub y: Float,
}

impl GridWidth {
    /// Calculates width of a grid cell given the number of cells and box size.
    pub fn new(grid_size: GridSize, box_size: BoxSize) -> GridWidth {
        GridWidth {
            x: box_size.x / grid_size.x as Float,
            y: box_size.y / grid_size.y as Float,
        }
    }
}
