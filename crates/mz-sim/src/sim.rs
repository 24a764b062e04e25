//! The `MazeSim` struct and its tick state machine.

use mz_agent::{Agent, Runner, RunnerTuning, Sentry, SentryTuning, StepContext};
use mz_core::{Color, Coord, MazeConfig, MazeRng, Palette, Status};
use mz_maze::{Grid, GridSearch, MazeGenerator, PathFinder, place_exit, place_runner, place_sentry};

use crate::{DrawSink, NoopStatus, SimError, SimResult, StatusSink};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Where the tick state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Agents move every tick.
    Running,
    /// A terminal event (or fault) is on display.  The payload is the number
    /// of further unchanged ticks before the scenario is rebuilt.
    ResetPending(u32),
}

// ── MazeSim ───────────────────────────────────────────────────────────────────

/// One runner, an optional sentry, and an exit in a generated maze.
///
/// `MazeSim<D, S, F>` owns all scenario state and advances it one step per
/// [`tick`][MazeSim::tick]:
///
/// 1. **Reset countdown**: while a goal, catch, or fault is on display,
///    count down; at zero rebuild the maze and redraw everything.
/// 2. **Runner** moves.  Reaching the exit ends the scenario with
///    [`Status::Goal`].
/// 3. **Sentry** moves (if enabled).  Landing on the runner ends the
///    scenario with [`Status::Caught`].
/// 4. **Redraw** if either agent moved.
///
/// Any error inside a step ends the scenario with [`Status::Fault`]; it never
/// escapes `tick`.
///
/// Create via [`MazeSimBuilder`][crate::MazeSimBuilder].
pub struct MazeSim<D: DrawSink, S: StatusSink = NoopStatus, F: PathFinder = GridSearch> {
    config:    MazeConfig,
    palette:   Palette,
    grid:      Grid,
    rng:       MazeRng,
    generator: MazeGenerator,
    finder:    F,

    runner: Option<Runner>,
    /// Always `None` when the palette disables the sentry.
    sentry: Option<Sentry>,
    exit:   Option<Coord>,

    status: Status,
    phase:  Phase,

    draw:        D,
    status_sink: S,
}

impl<D: DrawSink, S: StatusSink, F: PathFinder> MazeSim<D, S, F> {
    /// Assemble an uninitialised simulation.  The builder calls
    /// [`init`][Self::init] straight after.
    pub(crate) fn new(
        config:      MazeConfig,
        palette:     Palette,
        grid:        Grid,
        rng:         MazeRng,
        finder:      F,
        draw:        D,
        status_sink: S,
    ) -> Self {
        Self {
            generator: MazeGenerator::new(config.extra_walls),
            config,
            palette,
            grid,
            rng,
            finder,
            runner: None,
            sentry: None,
            exit: None,
            status: Status::Running,
            phase: Phase::Running,
            draw,
            status_sink,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Regenerate the maze and place the runner, the sentry and the exit.
    ///
    /// The maze is carved outward from the runner's previous cell so that a
    /// runner standing on the old exit (or the old sentry) visibly carries on
    /// from there.  Nothing is drawn.
    ///
    /// On failure the scenario is left empty, [`Status::Fault`] is signalled
    /// and the reset countdown starts at `error_delay`; the error is returned
    /// for the caller to log.
    pub fn init(&mut self) -> SimResult<()> {
        let prior_runner = self.runner.take().map(|r| r.location());
        let prior_sentry = self.sentry.take().map(|s| s.location());
        let prior_exit = self.exit.take();

        match self.layout(prior_runner, prior_exit, prior_sentry) {
            Ok(()) => {
                self.status = Status::Running;
                self.phase = Phase::Running;
                self.log_layout();
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "maze initialisation failed");
                self.runner = None;
                self.sentry = None;
                self.exit = None;
                self.finish(Status::Fault, self.config.error_delay);
                Err(err)
            }
        }
    }

    /// Advance one step.  Returns `true` if the frame changed and should be
    /// presented.
    pub fn tick(&mut self) -> bool {
        match self.phase {
            Phase::ResetPending(0) => {
                if self.init().is_err() {
                    return false;
                }
                self.redraw();
                true
            }
            Phase::ResetPending(n) => {
                self.phase = Phase::ResetPending(n - 1);
                false
            }
            Phase::Running => match self.step() {
                Ok(changed) => changed,
                Err(err) => {
                    tracing::error!(error = %err, "error in maze runner step");
                    self.finish(Status::Fault, self.config.error_delay);
                    false
                }
            },
        }
    }

    /// Paint every cell, then the exit, the runner and the sentry on top.
    pub fn redraw(&mut self) {
        let Palette { path, wall, .. } = self.palette;
        for cell in self.grid.cells() {
            let color = if self.grid.is_wall(cell) { wall } else { path };
            paint(&mut self.draw, cell, color);
        }
        if let Some(exit) = self.exit {
            paint(&mut self.draw, exit, self.palette.exit);
        }
        if let Some(runner) = &self.runner {
            paint(&mut self.draw, runner.location(), self.palette.runner);
        }
        if let Some(sentry) = &self.sentry {
            paint(&mut self.draw, sentry.location(), self.palette.sentry);
        }
    }

    /// Latch the current frame on both sinks.
    pub fn present(&mut self) {
        self.draw.present();
        self.status_sink.present();
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn runner(&self) -> Option<&Runner> {
        self.runner.as_ref()
    }

    #[inline]
    pub fn sentry(&self) -> Option<&Sentry> {
        self.sentry.as_ref()
    }

    #[inline]
    pub fn exit(&self) -> Option<Coord> {
        self.exit
    }

    /// The most recent terminal event, or `Running` since the last rebuild.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn draw_sink(&self) -> &D {
        &self.draw
    }

    pub fn draw_sink_mut(&mut self) -> &mut D {
        &mut self.draw
    }

    pub fn status_sink(&self) -> &S {
        &self.status_sink
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn layout(
        &mut self,
        prior_runner: Option<Coord>,
        prior_exit:   Option<Coord>,
        prior_sentry: Option<Coord>,
    ) -> SimResult<()> {
        self.generator.generate(&mut self.grid, prior_runner, &mut self.rng)?;

        let runner = place_runner(&self.grid, prior_runner, prior_exit, prior_sentry, &mut self.rng)?;
        self.runner = Some(Runner::new(runner, RunnerTuning::from(&self.config)));

        if self.palette.sentry_enabled() {
            let placed = place_sentry(&self.grid, runner, &mut self.rng)?;
            self.sentry = Some(Sentry::new(placed.location, SentryTuning::from(&self.config)));
        }

        self.exit = Some(place_exit(&self.grid, runner, &self.finder, &mut self.rng)?);
        Ok(())
    }

    fn step(&mut self) -> SimResult<bool> {
        let exit = self.exit.ok_or(SimError::NotInitialized)?;
        let sentry_at = self.sentry.as_ref().map(|s| s.location());
        let runner = self.runner.as_mut().ok_or(SimError::NotInitialized)?;

        let ctx = StepContext::new(&self.grid, exit, runner.location(), sentry_at);
        let mut moved = runner.step(&ctx, &self.finder, &mut self.rng)?;
        let runner_at = runner.location();

        if runner_at == exit {
            tracing::debug!(exit = %runner_at, "runner reached exit");
            self.finish(Status::Goal, self.config.goal_delay);
            self.redraw();
            return Ok(true);
        }

        if let Some(sentry) = self.sentry.as_mut() {
            let ctx = StepContext::new(&self.grid, exit, runner_at, Some(sentry.location()));
            moved |= sentry.step(&ctx, &self.finder, &mut self.rng)?;

            if sentry.location() == runner_at {
                // No redraw: the frame on display is the one from the last
                // move.  If the sentry closed in, that frame shows the runner
                // on this cell; if the runner walked into a waiting sentry,
                // it shows the sentry.
                tracing::debug!(at = %runner_at, "runner caught by sentry");
                self.finish(Status::Caught, self.config.catch_delay);
                return Ok(true);
            }
        }

        if moved {
            self.redraw();
        }
        Ok(moved)
    }

    /// Record a terminal event, signal it, and start the reset countdown.
    fn finish(&mut self, status: Status, delay: u32) {
        self.status = status;
        if let Some(color) = self.palette.status_color(status) {
            self.status_sink.set_status(status, color);
        }
        self.phase = Phase::ResetPending(delay);
    }

    fn log_layout(&self) {
        if !tracing::enabled!(tracing::Level::TRACE) {
            return;
        }
        let runner = self.runner.as_ref().map(|r| r.location());
        let sentry = self.sentry.as_ref().map(|s| s.location());

        let mut out = String::new();
        for y in 0..self.grid.height() as i32 {
            out.push('|');
            for x in 0..self.grid.width() as i32 {
                let cell = Coord::new(x, y);
                let ch = if Some(cell) == self.exit {
                    'E'
                } else if Some(cell) == sentry {
                    'S'
                } else if Some(cell) == runner {
                    'R'
                } else if self.grid.is_wall(cell) {
                    '#'
                } else {
                    ' '
                };
                out.push(ch);
            }
            out.push_str("|\n");
        }
        tracing::trace!("new maze layout\n{out}");
    }
}

#[inline]
fn paint<D: DrawSink>(draw: &mut D, at: Coord, color: Color) {
    // Agents and the exit only ever sit on in-bounds cells.
    draw.set_cell(at.x as u32, at.y as u32, color);
}
