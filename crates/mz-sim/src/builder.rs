//! Fluent builder for constructing a [`MazeSim`].

use mz_core::{MazeConfig, MazeRng, Palette};
use mz_maze::{Grid, GridSearch, PathFinder};

use crate::{DrawSink, MazeSim, NoopStatus, SimResult, StatusSink};

/// Fluent builder for [`MazeSim<D, S, F>`].
///
/// # Required inputs
///
/// - [`MazeConfig`] — size, agent tunables, reset delays, optional seed
/// - [`Palette`] — colours; a sentry coloured like the path disables it
/// - `D: DrawSink` — receives cell colours
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                      |
/// |---------------------|----------------------------------------------|
/// | `.status_sink(s)`   | [`NoopStatus`]                               |
/// | `.finder(f)`        | [`GridSearch`]                               |
/// | `.rng(r)`           | `config.make_rng()` (seeded or from entropy) |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = MazeSimBuilder::new(MazeConfig::default(), Palette::default(), FrameBuffer::new(7, 7))
///     .status_sink(|status: Status, _c: Color| println!("{status}"))
///     .build()?;
/// while !sim.tick() {}
/// ```
pub struct MazeSimBuilder<D: DrawSink, S: StatusSink = NoopStatus, F: PathFinder = GridSearch> {
    config:  MazeConfig,
    palette: Palette,
    draw:    D,
    status:  S,
    finder:  F,
    rng:     Option<MazeRng>,
}

impl<D: DrawSink> MazeSimBuilder<D> {
    /// Create a builder with all required inputs.
    pub fn new(config: MazeConfig, palette: Palette, draw: D) -> Self {
        Self {
            config,
            palette,
            draw,
            status: NoopStatus,
            finder: GridSearch,
            rng:    None,
        }
    }
}

impl<D: DrawSink, S: StatusSink, F: PathFinder> MazeSimBuilder<D, S, F> {
    /// Receive goal / caught / fault signals.
    pub fn status_sink<S2: StatusSink>(self, status: S2) -> MazeSimBuilder<D, S2, F> {
        MazeSimBuilder {
            config:  self.config,
            palette: self.palette,
            draw:    self.draw,
            status,
            finder:  self.finder,
            rng:     self.rng,
        }
    }

    /// Replace the default grid search used for sensing, fleeing and exit
    /// placement.
    pub fn finder<F2: PathFinder>(self, finder: F2) -> MazeSimBuilder<D, S, F2> {
        MazeSimBuilder {
            config:  self.config,
            palette: self.palette,
            draw:    self.draw,
            status:  self.status,
            finder,
            rng:     self.rng,
        }
    }

    /// Inject the random source.  Overrides `config.seed`.
    pub fn rng(mut self, rng: MazeRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the configuration, allocate the grid, and lay out the first
    /// scenario.
    ///
    /// A failed first layout is not an error here: the simulation is
    /// returned in its fault countdown and rebuilds itself after
    /// `error_delay` ticks, as it would for a fault at any later point.
    pub fn build(self) -> SimResult<MazeSim<D, S, F>> {
        self.config.validate()?;
        let grid = Grid::new(self.config.width, self.config.height)?;
        let rng = match self.rng {
            Some(rng) => rng,
            None => self.config.make_rng(),
        };

        let mut sim = MazeSim::new(
            self.config,
            self.palette,
            grid,
            rng,
            self.finder,
            self.draw,
            self.status,
        );
        if let Err(err) = sim.init() {
            tracing::warn!(error = %err, "first layout failed; waiting out the error delay");
        }
        Ok(sim)
    }
}
