//! Deterministic trajectory simulation.
//!
//! A point mass under gravity and linear drag, bouncing off the floor at
//! `y = 0`. Every quantity is a [`FixedValue`]; floats appear only in the
//! configuration and are converted once, before the first step.
//!
//! The state after every step is fed into a [`ValueHasher`], so two runs
//! with the same config produce the same digest on any platform.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::fixed::FixedValue;
use crate::core::format::FormatConfig;
use crate::core::hash::{ValueDigest, ValueHasher};
use crate::error::FixedError;

/// Simulation configuration.
///
/// Every field is optional in JSON; missing fields take the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of steps to run
    pub steps: u32,
    /// Seconds per step
    pub time_step: f32,
    /// Downward acceleration (units/s^2)
    pub gravity: f32,
    /// Fraction of velocity lost per second
    pub drag: f32,
    /// Fraction of vertical speed kept on a bounce
    pub restitution: f32,
    /// Starting position (x, y)
    pub initial_position: [f32; 2],
    /// Starting velocity (x, y)
    pub initial_velocity: [f32; 2],
    /// Steps between progress reports (0 disables them)
    pub report_interval: u32,
    /// Rendering of reported values
    pub format: FormatConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            steps: 600,                        // 10 seconds at 60 Hz
            time_step: 1.0 / 60.0,
            gravity: 9.8,
            drag: 0.05,
            restitution: 0.75,
            initial_position: [0.0, 10.0],
            initial_velocity: [3.0, 12.0],
            report_interval: 120,
            format: FormatConfig::default(),
        }
    }
}

/// Position and velocity of the simulated body.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyState {
    /// X position
    pub x: FixedValue,
    /// Y position
    pub y: FixedValue,
    /// X velocity
    pub vx: FixedValue,
    /// Y velocity
    pub vy: FixedValue,
}

impl BodyState {
    fn as_array(&self) -> [FixedValue; 4] {
        [self.x, self.y, self.vx, self.vy]
    }

    /// True if every component matches, sign included.
    pub fn same_state(&self, other: &Self) -> bool {
        self.as_array()
            .iter()
            .zip(other.as_array().iter())
            .all(|(a, b)| a.same_value(*b))
    }
}

/// Per-step constants, converted from the config once.
#[derive(Clone, Copy, Debug)]
struct StepParams {
    dt: FixedValue,
    gravity_dt: FixedValue,
    damping: FixedValue,
    restitution: FixedValue,
}

impl StepParams {
    fn from_config(config: &SimConfig) -> Result<Self, FixedError> {
        let dt = FixedValue::try_from_float(config.time_step)?;
        let gravity = FixedValue::try_from_float(config.gravity)?;
        let drag = FixedValue::try_from_float(config.drag)?;
        Ok(Self {
            dt,
            gravity_dt: gravity * dt,
            damping: FixedValue::ONE - drag * dt,
            restitution: FixedValue::try_from_float(config.restitution)?,
        })
    }
}

/// Result of a simulation run.
#[derive(Clone, Debug)]
pub struct SimReport {
    /// State after the last step
    pub final_state: BodyState,
    /// Steps executed
    pub steps: u32,
    /// Number of floor bounces
    pub bounces: u32,
    /// Steps where the slope was undefined (zero horizontal speed)
    pub vertical_steps: u32,
    /// Digest over the state after every step
    pub digest: ValueDigest,
}

/// Advance one step. Returns true if the body bounced.
fn step(state: &mut BodyState, params: &StepParams) -> bool {
    state.vy -= params.gravity_dt;
    state.vx *= params.damping;
    state.vy *= params.damping;

    state.x += state.vx * params.dt;
    state.y += state.vy * params.dt;

    if state.y < FixedValue::ZERO {
        state.y = -state.y;
        state.vy = -state.vy * params.restitution;
        return true;
    }
    false
}

/// Run the simulation described by `config`.
///
/// Fails only if a float in the config is NaN or infinite.
pub fn run(config: &SimConfig) -> Result<SimReport, FixedError> {
    let params = StepParams::from_config(config)?;

    let mut state = BodyState {
        x: FixedValue::try_from_float(config.initial_position[0])?,
        y: FixedValue::try_from_float(config.initial_position[1])?,
        vx: FixedValue::try_from_float(config.initial_velocity[0])?,
        vy: FixedValue::try_from_float(config.initial_velocity[1])?,
    };

    let mut hasher = ValueHasher::for_trace();
    hasher.update_u32(config.steps);
    hasher.update_values(&state.as_array());

    let mut bounces = 0;
    let mut vertical_steps = 0;

    for t in 1..=config.steps {
        if step(&mut state, &params) {
            bounces += 1;
        }
        hasher.update_values(&state.as_array());

        let slope = state.vy.checked_div(state.vx);
        if slope.is_err() {
            vertical_steps += 1;
        }

        if config.report_interval == 0 || t % config.report_interval != 0 {
            continue;
        }

        let fmt = &config.format;
        match slope {
            Ok(slope) => debug!(
                "Step {}: pos=({}, {}) vel=({}, {}) slope={}",
                t,
                fmt.render(state.x),
                fmt.render(state.y),
                fmt.render(state.vx),
                fmt.render(state.vy),
                fmt.render(slope),
            ),
            Err(e) => warn!("Step {}: slope undefined ({})", t, e),
        }
    }

    Ok(SimReport {
        final_state: state,
        steps: config.steps,
        bounces,
        vertical_steps,
        digest: hasher.finalize(),
    })
}
