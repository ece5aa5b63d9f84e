//! Turns the grid into fill commands.
//!
//! Rendering reads the grid and the frame colours only; the backend is any
//! `Surface`, e.g. a browser 2D canvas or the recording `CommandBuffer`.

use crate::grid::{CellGrid, Orientation, Shape};
use crate::palette::Rgb;
use glam::Vec2;

pub trait Surface {
    /// Clears the whole surface.
    fn fill_background(&mut self, color: Rgb);
    /// Axis-aligned square with top-left corner `origin`.
    fn fill_rect(&mut self, origin: Vec2, size: f32, color: Rgb);
    fn fill_triangle(&mut self, points: [Vec2; 3], color: Rgb);
}

/// The two right triangles a cell at `origin` splits into. The first is
/// filled with the primary colour, the second with the secondary one.
pub fn triangle_halves(orientation: Orientation, origin: Vec2, size: f32) -> [[Vec2; 3]; 2] {
    let tl = origin;
    let tr = origin + Vec2::new(size, 0.0);
    let br = origin + Vec2::new(size, size);
    let bl = origin + Vec2::new(0.0, size);
    match orientation {
        Orientation::NorthEast => [[tl, tr, br], [tl, bl, br]],
        Orientation::SouthEast => [[tr, br, bl], [tl, tr, bl]],
        Orientation::SouthWest => [[tl, bl, br], [tl, tr, br]],
        Orientation::NorthWest => [[tl, tr, bl], [tr, br, bl]],
    }
}

/// Draws every cell in row-major order over a background of the primary
/// colour.
pub fn render<S: Surface + ?Sized>(
    grid: &CellGrid,
    colors: [Rgb; 2],
    cell_size: f32,
    surface: &mut S,
) {
    surface.fill_background(colors[0]);
    for (row, col, cell) in grid.iter() {
        let origin = Vec2::new(col as f32 * cell_size, row as f32 * cell_size);
        match cell.shape {
            Shape::Square => surface.fill_rect(origin, cell_size, colors[cell.slot.index()]),
            Shape::Triangle => {
                let [a, b] = triangle_halves(cell.orientation, origin, cell_size);
                surface.fill_triangle(a, colors[0]);
                surface.fill_triangle(b, colors[1]);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Background(Rgb),
    Rect { origin: Vec2, size: f32, color: Rgb },
    Triangle { points: [Vec2; 3], color: Rgb },
}

/// `Surface` that records what it is asked to draw.
#[derive(Clone, Debug, Default)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for CommandBuffer {
    fn fill_background(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Background(color));
    }

    fn fill_rect(&mut self, origin: Vec2, size: f32, color: Rgb) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            color,
        });
    }

    fn fill_triangle(&mut self, points: [Vec2; 3], color: Rgb) {
        self.commands.push(DrawCommand::Triangle { points, color });
    }
}
