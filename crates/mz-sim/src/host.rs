//! Adapter that runs a [`MazeSim`] as a switchable display task.

use mz_maze::PathFinder;

use crate::{DrawSink, MazeSim, StatusSink};

/// Lifecycle of something that paints a display on a fixed interval.
pub trait DisplayTask {
    /// Begin producing frames.  Returns `false` if already started.
    fn start(&mut self) -> bool;

    /// Stop producing frames.  Returns `false` if not started.
    fn stop(&mut self) -> bool;

    /// Switch display output on or off without stopping the task.
    fn set_enabled(&mut self, enabled: bool);
}

/// Drives a [`MazeSim`] from a fixed-interval loop.
///
/// The driver owns the timing and calls [`poll`][SimHost::poll] once per
/// interval; the host decides whether to step the simulation and whether a
/// frame needs presenting.
pub struct SimHost<D: DrawSink, S: StatusSink, F: PathFinder> {
    sim:     MazeSim<D, S, F>,
    started: bool,
    enabled: bool,
}

impl<D: DrawSink, S: StatusSink, F: PathFinder> SimHost<D, S, F> {
    /// Wrap `sim`.  The host starts stopped and enabled.
    pub fn new(sim: MazeSim<D, S, F>) -> Self {
        Self { sim, started: false, enabled: true }
    }

    /// Step once if running and enabled.  Returns `true` if a frame was
    /// presented.
    pub fn poll(&mut self) -> bool {
        if !self.started || !self.enabled {
            return false;
        }
        if self.sim.tick() {
            self.sim.present();
            return true;
        }
        false
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn sim(&self) -> &MazeSim<D, S, F> {
        &self.sim
    }

    pub fn sim_mut(&mut self) -> &mut MazeSim<D, S, F> {
        &mut self.sim
    }

    pub fn into_inner(self) -> MazeSim<D, S, F> {
        self.sim
    }
}

impl<D: DrawSink, S: StatusSink, F: PathFinder> DisplayTask for SimHost<D, S, F> {
    fn start(&mut self) -> bool {
        if self.started {
            tracing::warn!("display task already started");
            return false;
        }

        // The builder has normally laid out a scenario already; only an empty
        // simulation (a failed layout) gets another attempt here.  A failure
        // is logged by `init` and leaves the fault countdown running, with
        // nothing to show until it rebuilds.
        let laid_out = self.sim.runner().is_some() || self.sim.init().is_ok();
        if laid_out {
            self.sim.redraw();
            self.sim.present();
        }
        self.started = true;
        tracing::info!(
            width = self.sim.grid().width(),
            height = self.sim.grid().height(),
            "maze display task started"
        );
        true
    }

    fn stop(&mut self) -> bool {
        if !self.started {
            return false;
        }
        self.started = false;
        tracing::info!("maze display task stopped");
        true
    }

    fn set_enabled(&mut self, enabled: bool) {
        tracing::info!("setting display to {}", if enabled { "on" } else { "off" });
        self.enabled = enabled;
        self.sim.draw_sink_mut().set_enabled(enabled);
    }
}
