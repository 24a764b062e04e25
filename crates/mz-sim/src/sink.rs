//! Output capabilities injected into the simulation.
//!
//! The simulation never touches hardware.  Everything it wants to show goes
//! through a [`DrawSink`] (one colour per grid cell) and a [`StatusSink`]
//! (terminal events), both supplied at construction.

use mz_core::{Color, Status};

/// Receives per-cell colour updates.
///
/// Only `set_cell` is required.  `present` is called once per changed frame
/// by [`SimHost`][crate::SimHost] and is where a display would latch the
/// buffered pixels.
///
/// Any `FnMut(u32, u32, Color)` closure is a `DrawSink`:
///
/// ```rust,ignore
/// let mut pixels = vec![Color::BLACK; 49];
/// let draw = |x: u32, y: u32, c: Color| pixels[(y * 7 + x) as usize] = c;
/// ```
pub trait DrawSink {
    fn set_cell(&mut self, x: u32, y: u32, color: Color);

    /// Latch everything drawn since the previous call.
    fn present(&mut self) {}

    /// Display output was switched on or off.
    fn set_enabled(&mut self, _enabled: bool) {}
}

/// Receives terminal events together with their palette colour.
pub trait StatusSink {
    fn set_status(&mut self, status: Status, color: Color);

    fn present(&mut self) {}
}

impl<F: FnMut(u32, u32, Color)> DrawSink for F {
    #[inline]
    fn set_cell(&mut self, x: u32, y: u32, color: Color) {
        self(x, y, color)
    }
}

impl<F: FnMut(Status, Color)> StatusSink for F {
    #[inline]
    fn set_status(&mut self, status: Status, color: Color) {
        self(status, color)
    }
}

/// A [`StatusSink`] that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStatus;

impl StatusSink for NoopStatus {
    fn set_status(&mut self, _status: Status, _color: Color) {}
}

// ── FrameBuffer ───────────────────────────────────────────────────────────────

/// An in-memory row-major pixel buffer.
///
/// Useful for tests and for renderers that prefer to pull whole frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width:  u32,
    height: u32,
    pixels: Vec<Color>,
    /// Number of `present` calls so far.
    pub frames: u64,
    pub enabled: bool,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
            frames: 0,
            enabled: true,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Colour at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }
}

impl DrawSink for FrameBuffer {
    fn set_cell(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }

    fn present(&mut self) {
        self.frames += 1;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
