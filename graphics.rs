//! The pixels surface the grid is presented on.

use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::calculator::{GridCalculator, Point, Size};
use crate::drawing::DrawingSession;
use crate::grid::GridDimensions;
use crate::painter::{FramePainter, Palette};

/// Grid geometry for a `width x height` surface with the grid starting at
/// `origin`. One pixel is held back so the right and bottom border lines
/// stay on the surface.
pub fn layout_grid(origin: Point, width: u32, height: u32, dimensions: GridDimensions) -> GridCalculator {
    let size = Size::new(
        (width as f64 - origin.x - 1.0).max(1.0),
        (height as f64 - origin.y - 1.0).max(1.0),
    );
    GridCalculator::new(origin, size, dimensions)
}

pub struct GraphicsRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
    origin: Point,
    palette: Palette,
}

impl GraphicsRenderer {
    pub fn new(window: &Window, origin: Point, palette: Palette) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(window_size.width, window_size.height, surface_texture)?;

        Ok(Self {
            pixels,
            width: window_size.width,
            height: window_size.height,
            origin,
            palette,
        })
    }

    pub fn calculator(&self, dimensions: GridDimensions) -> GridCalculator {
        layout_grid(self.origin, self.width, self.height, dimensions)
    }

    /// Resizes the surface and buffer to the window and returns the new grid
    /// geometry.
    pub fn resize(&mut self, width: u32, height: u32, dimensions: GridDimensions) -> GridCalculator {
        if width == 0 || height == 0 {
            // Minimized; keep the old buffer.
            return self.calculator(dimensions);
        }

        self.width = width;
        self.height = height;

        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("Failed to resize surface: {}", err);
        }
        if let Err(err) = self.pixels.resize_buffer(width, height) {
            log::error!("Failed to resize buffer: {}", err);
        }
        self.calculator(dimensions)
    }

    /// Runs `draw` against a painter over the current frame.
    pub fn with_painter<R>(
        &mut self,
        calculator: GridCalculator,
        draw: impl FnOnce(&mut FramePainter<'_>) -> R,
    ) -> R {
        let (width, height, palette) = (self.width, self.height, self.palette);
        let mut painter = FramePainter::new(self.pixels.frame_mut(), width, height, calculator, palette);
        draw(&mut painter)
    }

    /// Clears the frame and paints the whole session from its model.
    pub fn render(&mut self, session: &DrawingSession) {
        let calculator = *session.calculator();
        self.with_painter(calculator, |painter| {
            painter.clear_frame();
            session.repaint(painter);
        });
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}
