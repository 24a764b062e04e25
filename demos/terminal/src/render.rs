//! ANSI truecolor sinks: one two-character block per cell.

use std::io::{self, Write};

use mz_core::{Color, Status};
use mz_sim::{DrawSink, FrameBuffer, StatusSink};

const HOME: &str = "\x1b[H";
const CLEAR: &str = "\x1b[2J";
const RESET: &str = "\x1b[0m";

fn background(color: Color) -> String {
    let (r, g, b) = color.components();
    format!("\x1b[48;2;{r};{g};{b}m")
}

/// Buffers cell colours and repaints the whole matrix on `present`.
pub struct AnsiMatrix {
    frame:   FrameBuffer,
    off:     Color,
    cleared: bool,
}

impl AnsiMatrix {
    pub fn new(width: u32, height: u32, off: Color) -> Self {
        Self { frame: FrameBuffer::new(width, height), off, cleared: false }
    }

    fn write_frame(&mut self, out: &mut impl Write) -> io::Result<()> {
        if !self.cleared {
            out.write_all(CLEAR.as_bytes())?;
            self.cleared = true;
        }
        out.write_all(HOME.as_bytes())?;
        for row in self.frame.rows() {
            for &c in row {
                let c = if self.frame.enabled { c } else { self.off };
                write!(out, "{}  ", background(c))?;
            }
            writeln!(out, "{RESET}")?;
        }
        out.flush()
    }
}

impl DrawSink for AnsiMatrix {
    fn set_cell(&mut self, x: u32, y: u32, color: Color) {
        self.frame.set_cell(x, y, color);
    }

    fn present(&mut self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(err) = self.write_frame(&mut out) {
            tracing::warn!(error = %err, "failed to draw frame");
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.frame.set_enabled(enabled);
        // Blank the matrix straight away, like cutting its power supply.
        self.present();
    }
}

/// The status LED: a coloured line under the matrix showing the most recent
/// terminal event.
#[derive(Default)]
pub struct AnsiStatus {
    last: Option<(Status, Color)>,
}

impl StatusSink for AnsiStatus {
    fn set_status(&mut self, status: Status, color: Color) {
        tracing::debug!(%status, %color, "status");
        self.last = Some((status, color));
    }

    fn present(&mut self) {
        let Some((status, color)) = self.last else {
            return;
        };
        let mut out = io::stdout().lock();
        let line = format!("{}  {RESET} last event: {:<8}\n", background(color), status.as_str());
        if let Err(err) = out.write_all(line.as_bytes()).and_then(|()| out.flush()) {
            tracing::warn!(error = %err, "failed to draw status line");
        }
    }
}
