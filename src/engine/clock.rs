//! Two-phase animation clock.
//!
//! Maps real time to simulated generation time for both streams. Each cycle
//! plays at 1x for `normal_duration` seconds of real time and then at
//! `speedup_factor`. When the streams are fully revealed the clock holds for
//! `pause_duration` and then starts the next cycle from zero.
//!
//! The multiplier is picked from the real time at the *end* of a tick and
//! applied to that tick's whole interval. A tick that straddles the phase
//! boundary therefore runs entirely at the faster speed. The error is at most
//! one frame interval times `speedup_factor - 1`.

use crate::engine::config::AnimationConfig;
use crate::engine::scheduler::STREAM_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Normal,
    SpedUp,
}

/// Badge transitions for the renderer. Emitted once per change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    EnteredSpedUp,
    LeftSpedUp,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedSchedule {
    pub normal_duration: f64,
    pub speedup_factor: f64,
    pub pause_duration: f64,
}

impl SpeedSchedule {
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self {
            normal_duration: config.normal_duration,
            speedup_factor: config.speedup_factor,
            pause_duration: config.pause_duration,
        }
    }

    /// Phase and multiplier in effect `real` seconds into a cycle.
    pub fn speed_at(&self, real: f64) -> (Phase, f64) {
        if real <= self.normal_duration {
            (Phase::Normal, 1.0)
        } else {
            (Phase::SpedUp, self.speedup_factor)
        }
    }
}

impl Default for SpeedSchedule {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}

/// Everything the clock remembers between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockState {
    /// Real time of the first tick of this cycle; unset until that tick.
    pub cycle_start: Option<f64>,
    pub last_real_in_cycle: f64,
    pub simulated: [f64; STREAM_COUNT],
    pub phase: Phase,
    pub badge_visible: bool,
    pub finished: bool,
    pub finish_time: Option<f64>,
    /// Completed resets since the clock was built.
    pub cycle: u64,
}

impl Default for ClockState {
    fn default() -> Self {
        Self {
            cycle_start: None,
            last_real_in_cycle: 0.0,
            simulated: [0.0; STREAM_COUNT],
            phase: Phase::Normal,
            badge_visible: false,
            finished: false,
            finish_time: None,
            cycle: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockTick {
    /// Holding the finished frame; nothing moves.
    Paused,
    Advanced {
        simulated: [f64; STREAM_COUNT],
        event: Option<PhaseEvent>,
        /// This tick began a new cycle; reveal state must be cleared first.
        restarted: bool,
    },
}

impl ClockState {
    /// Initial state of the next cycle.
    pub fn reset(self) -> Self {
        Self {
            cycle: self.cycle + 1,
            ..Self::default()
        }
    }

    pub fn step(self, now: f64, schedule: &SpeedSchedule) -> (Self, ClockTick) {
        let mut state = self;
        let mut restarted = false;

        if state.finished {
            let finished_at = state.finish_time.unwrap_or(now);
            if now - finished_at >= schedule.pause_duration {
                state = state.reset();
                restarted = true;
            } else {
                return (state, ClockTick::Paused);
            }
        }

        let cycle_start = match state.cycle_start {
            Some(start) => start,
            None => {
                state.cycle_start = Some(now);
                state.last_real_in_cycle = 0.0;
                now
            }
        };

        let real = now - cycle_start;
        let delta_real = (real - state.last_real_in_cycle).max(0.0);
        state.last_real_in_cycle = real;

        let (phase, speed) = schedule.speed_at(real);
        state.phase = phase;
        let event = match phase {
            Phase::SpedUp if !state.badge_visible => {
                state.badge_visible = true;
                Some(PhaseEvent::EnteredSpedUp)
            }
            Phase::Normal if state.badge_visible => {
                state.badge_visible = false;
                Some(PhaseEvent::LeftSpedUp)
            }
            _ => None,
        };

        let delta_sim = delta_real * speed;
        for simulated in state.simulated.iter_mut() {
            *simulated += delta_sim;
        }

        (
            state,
            ClockTick::Advanced {
                simulated: state.simulated,
                event,
                restarted,
            },
        )
    }

    /// Enters the finished sub-state; only the first call has an effect.
    pub fn finish(self, now: f64) -> (Self, Option<PhaseEvent>) {
        if self.finished {
            return (self, None);
        }
        let mut state = self;
        state.finished = true;
        state.finish_time = Some(now);
        let event = if state.badge_visible {
            state.badge_visible = false;
            Some(PhaseEvent::LeftSpedUp)
        } else {
            None
        };
        (state, event)
    }
}

/// Single owner of [`ClockState`].
#[derive(Debug, Clone)]
pub struct AnimationClock {
    state: ClockState,
    schedule: SpeedSchedule,
}

impl AnimationClock {
    pub fn new(schedule: SpeedSchedule) -> Self {
        Self {
            state: ClockState::default(),
            schedule,
        }
    }

    pub fn tick(&mut self, now: f64) -> ClockTick {
        let (state, tick) = self.state.step(now, &self.schedule);
        self.state = state;
        tick
    }

    pub fn finish(&mut self, now: f64) -> Option<PhaseEvent> {
        let (state, event) = self.state.finish(now);
        self.state = state;
        event
    }

    /// Drops the current cycle; the next tick starts a fresh one.
    pub fn restart(&mut self) -> Option<PhaseEvent> {
        let event = self.state.badge_visible.then_some(PhaseEvent::LeftSpedUp);
        self.state = self.state.reset();
        event
    }

    pub fn state(&self) -> &ClockState {
        &self.state
    }

    pub fn schedule(&self) -> &SpeedSchedule {
        &self.schedule
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn badge_visible(&self) -> bool {
        self.state.badge_visible
    }

    pub fn is_finished(&self) -> bool {
        self.state.finished
    }

    pub fn cycle(&self) -> u64 {
        self.state.cycle
    }
}
