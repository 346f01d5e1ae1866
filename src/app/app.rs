use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::{PaneState, RenderState};
use crate::engine::{
    AnimationClock, AnimationConfig, Clock, ClockTick, DualStreamScheduler, PhaseEvent,
    SpeedSchedule, SystemClock, STREAM_COUNT,
};
use crate::reading::{wrap_text, TextStream};
use std::time::Duration;
use tracing::{debug, info};

/// Ties the clock, the scheduler and the wrapper together, one tick at a time.
pub struct App<C: Clock = SystemClock> {
    pub mode: AppMode,
    time: C,
    clock: AnimationClock,
    scheduler: DualStreamScheduler,
    config: AnimationConfig,
    wrapped: [String; STREAM_COUNT],
}

impl<C: Clock> App<C> {
    pub fn new(streams: [TextStream; STREAM_COUNT], config: AnimationConfig, time: C) -> Self {
        Self {
            mode: AppMode::Running,
            time,
            clock: AnimationClock::new(SpeedSchedule::from_config(&config)),
            scheduler: DualStreamScheduler::new(streams),
            config,
            wrapped: Default::default(),
        }
    }

    /// Advances the animation to the injected clock's current reading.
    pub fn tick(&mut self) {
        let now = self.time.now();
        self.tick_at(now);
    }

    pub fn tick_at(&mut self, now: f64) {
        let (simulated, event, restarted) = match self.clock.tick(now) {
            ClockTick::Paused => return,
            ClockTick::Advanced {
                simulated,
                event,
                restarted,
            } => (simulated, event, restarted),
        };

        if restarted {
            self.scheduler.reset();
            info!(cycle = self.clock.cycle(), "starting new cycle");
        }
        if let Some(event) = event {
            log_phase_event(event, now);
        }

        let added = self.scheduler.advance(&simulated);
        if restarted || added.iter().any(|&count| count > 0) {
            self.rewrap();
        }

        if self.scheduler.is_complete() && !self.clock.is_finished() {
            if let Some(event) = self.clock.finish(now) {
                log_phase_event(event, now);
            }
            let cycle_start = self.clock.state().cycle_start.unwrap_or(now);
            info!(
                cycle = self.clock.cycle(),
                reveal_seconds = now - cycle_start,
                "both streams revealed, pausing"
            );
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
            AppEvent::Restart => {
                if let Some(event) = self.clock.restart() {
                    log_phase_event(event, self.time.now());
                }
                self.scheduler.reset();
                self.rewrap();
                info!(cycle = self.clock.cycle(), "restarted by user");
            }
            AppEvent::None => {}
        }
    }

    fn rewrap(&mut self) {
        for (index, wrapped) in self.wrapped.iter_mut().enumerate() {
            *wrapped = wrap_text(self.scheduler.revealed_text(index), self.config.wrap_width);
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        let revealed = self.scheduler.revealed();
        let panes = std::array::from_fn(|index| {
            let stream = &self.scheduler.streams()[index];
            PaneState {
                title: stream.title().to_string(),
                elapsed: stream.total_elapsed(),
                text: self.wrapped[index].clone(),
                revealed: revealed[index],
                total: stream.len(),
            }
        });

        RenderState {
            mode: self.mode,
            panes,
            badge: self
                .clock
                .badge_visible()
                .then(|| self.config.badge_label()),
            phase: self.clock.phase(),
            finished: self.clock.is_finished(),
            cycle: self.clock.cycle(),
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn frame_interval(&self) -> Duration {
        self.config.frame_interval()
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn scheduler(&self) -> &DualStreamScheduler {
        &self.scheduler
    }

    pub fn revealed(&self) -> [usize; STREAM_COUNT] {
        self.scheduler.revealed()
    }
}

fn log_phase_event(event: PhaseEvent, now: f64) {
    match event {
        PhaseEvent::EnteredSpedUp => debug!(now, "entering sped-up phase"),
        PhaseEvent::LeftSpedUp => debug!(now, "leaving sped-up phase"),
    }
}
