//! Opaque cell colours, the five-colour scenario palette, and the status
//! signal reported to the host.
//!
//! The engine never interprets a `Color` beyond equality: the only semantic
//! rule is that a sentry colour equal to the path colour disables the sentry.

use std::fmt;

/// An opaque colour value handed unchanged to the draw sink.
///
/// The packing used by [`Color::rgb`] is `0x00RR_GGBB`, the layout most
/// addressable-LED drivers accept, but sinks are free to reinterpret it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// `(r, g, b)` components of an [`rgb`](Self::rgb)-packed value.
    #[inline]
    pub fn components(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0x00ff_ffff)
    }
}

// ── Palette ───────────────────────────────────────────────────────────────────

/// The colours of every drawable element of a scenario.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    pub path:   Color,
    pub wall:   Color,
    pub runner: Color,
    pub sentry: Color,
    pub exit:   Color,
}

impl Palette {
    /// A sentry painted in the path colour would be invisible, so that
    /// combination is the configuration switch for "no sentry".
    #[inline]
    pub fn sentry_enabled(&self) -> bool {
        self.sentry != self.path
    }

    /// Colour shown on a status indicator for `status`.
    ///
    /// `Running` has no dedicated colour; the host keeps whatever it showed
    /// at start-up.
    pub fn status_color(&self, status: Status) -> Option<Color> {
        match status {
            Status::Running => None,
            Status::Goal    => Some(self.runner),
            Status::Caught  => Some(self.sentry),
            Status::Fault   => Some(self.exit),
        }
    }
}

impl Default for Palette {
    /// The 7×7 LED matrix colours: dark path, orange walls, yellow runner,
    /// red sentry, purple exit.
    fn default() -> Self {
        Self {
            path:   Color::BLACK,
            wall:   Color::rgb(0xcc, 0x44, 0x00),
            runner: Color::rgb(0xff, 0xff, 0x00),
            sentry: Color::rgb(0xff, 0x00, 0x00),
            exit:   Color::rgb(0x77, 0x00, 0x77),
        }
    }
}

// ── Status ────────────────────────────────────────────────────────────────────

/// Externally observable scenario state, independent of rendering colour.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The scenario is in progress (or waiting out a reset delay after
    /// nothing terminal happened yet).
    #[default]
    Running,
    /// The runner reached the exit.
    Goal,
    /// The sentry caught the runner.
    Caught,
    /// An internal fault aborted the scenario; it will regenerate itself.
    Fault,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Running => "running",
            Status::Goal    => "goal",
            Status::Caught  => "caught",
            Status::Fault   => "fault",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
