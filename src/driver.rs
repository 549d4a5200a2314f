use crate::{render::render_to, Cell, GoLEngine, Grid};
use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use std::io::Write;
use std::time::{Duration, Instant};

/// Parameters of a console simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of columns of the grid.
    pub width: u32,
    /// Number of rows of the grid.
    pub height: u32,
    /// How many transitions to perform.
    pub generations: u64,
    /// Pause after each transition.
    pub delay: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 25,
            height: 25,
            generations: 15,
            delay: Duration::from_secs(1),
        }
    }
}

impl SimulationConfig {
    /// Checks that the grid described by the config can be built.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(anyhow!(
                "Width and height must be positive, got {}x{}",
                self.width,
                self.height
            ));
        }
        Ok(())
    }
}

/// Something that waits between generations.
///
/// An error means the wait was cut short. The driver treats it as
/// non-fatal and goes on with the next generation.
pub trait Pause {
    fn pause(&mut self, delay: Duration) -> Result<()>;
}

/// Blocks the current thread for the whole delay.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleep;

impl Pause for ThreadSleep {
    fn pause(&mut self, delay: Duration) -> Result<()> {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        Ok(())
    }
}

/// Summary of a finished run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationReport {
    /// Transitions actually performed.
    pub generations: u64,
    /// Pauses that returned an error.
    pub interrupted_pauses: u64,
    /// The last grid that was rendered.
    pub final_grid: Grid,
}

/// Runs an engine over a grid, rendering every generation.
///
/// The initial grid is rendered first, then each transition is followed by
/// rendering the new grid and pausing for [`SimulationConfig::delay`].
pub struct Simulation<E: GoLEngine, P: Pause> {
    config: SimulationConfig,
    engine: E,
    pause: P,
}

impl<E: GoLEngine, P: Pause> Simulation<E, P> {
    /// # Errors
    ///
    /// Returns an error if `config` fails [`SimulationConfig::validate`].
    pub fn new(config: SimulationConfig, engine: E, pause: P) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            engine,
            pause,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Builds the starting grid from `seeds` using the configured size.
    pub fn seed(&self, seeds: impl IntoIterator<Item = Cell>) -> Result<Grid> {
        Grid::new(self.config.width, self.config.height, seeds)
    }

    /// Runs the configured number of generations starting from `initial`,
    /// writing every rendered grid to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial` does not have the configured size or
    /// writing to `out` fails. Failed pauses are logged and skipped.
    pub fn run<W: Write>(&mut self, initial: Grid, out: &mut W) -> Result<SimulationReport> {
        let (w, h) = (self.config.width, self.config.height);
        if initial.width() != w || initial.height() != h {
            return Err(anyhow!(
                "Initial grid is {}x{}, expected {}x{}",
                initial.width(),
                initial.height(),
                w,
                h
            ));
        }

        info!(
            "Running {} generations on a {}x{} grid with the {} engine",
            self.config.generations,
            w,
            h,
            self.engine.name()
        );
        let timer = Instant::now();
        let mut grid = initial;
        let mut interrupted_pauses = 0;
        render_to(out, &grid, w, h)?;

        for generation in 1..=self.config.generations {
            grid = self.engine.next_generation(&grid);
            debug!(
                "Generation {}: population {}",
                generation,
                grid.population()
            );
            render_to(out, &grid, w, h)?;
            out.flush()?;

            if let Err(err) = self.pause.pause(self.config.delay) {
                warn!("Pause after generation {} was interrupted: {:#}", generation, err);
                interrupted_pauses += 1;
            }
        }

        info!(
            "Simulated {} generations in {:.1} secs",
            self.config.generations,
            timer.elapsed().as_secs_f64()
        );
        Ok(SimulationReport {
            generations: self.config.generations,
            interrupted_pauses,
            final_grid: grid,
        })
    }
}
