pub mod config;
pub mod error;

pub mod clock;
pub mod scheduler;
pub mod time;

pub use clock::{AnimationClock, ClockState, ClockTick, Phase, PhaseEvent, SpeedSchedule};
pub use config::{AnimationConfig, Config, SourceConfig};
pub use error::ConfigError;
pub use scheduler::{revealed_count, DualStreamScheduler, RevealState, STREAM_COUNT};
pub use time::{Clock, ManualClock, SystemClock};
