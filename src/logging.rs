//! Subscriber setup and a stderr writer that can be silenced while the TUI
//! owns the screen.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::writer::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Writer factory for stderr that drops everything while muted.
#[derive(Clone, Default)]
pub struct StderrSwitch {
    muted: Arc<AtomicBool>,
}

impl StderrSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Silences output until the returned guard is dropped.
    pub fn mute(&self) -> MuteGuard {
        self.muted.store(true, Ordering::SeqCst);
        MuteGuard {
            muted: self.muted.clone(),
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::SeqCst)
    }
}

impl<'a> MakeWriter<'a> for StderrSwitch {
    type Writer = SwitchWriter;

    fn make_writer(&'a self) -> Self::Writer {
        if self.is_muted() {
            SwitchWriter::Muted(io::sink())
        } else {
            SwitchWriter::Stderr(io::stderr())
        }
    }
}

/// Unmutes its [`StderrSwitch`] on drop.
pub struct MuteGuard {
    muted: Arc<AtomicBool>,
}

impl Drop for MuteGuard {
    fn drop(&mut self) {
        self.muted.store(false, Ordering::SeqCst);
    }
}

pub enum SwitchWriter {
    Stderr(io::Stderr),
    Muted(io::Sink),
}

impl Write for SwitchWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            SwitchWriter::Stderr(stderr) => stderr.write(buf),
            SwitchWriter::Muted(sink) => sink.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            SwitchWriter::Stderr(stderr) => stderr.flush(),
            SwitchWriter::Muted(sink) => sink.flush(),
        }
    }
}

/// Where log events end up.
pub enum LogTarget {
    File,
    Stderr(StderrSwitch),
}

impl LogTarget {
    /// Keeps the terminal quiet for the guard's lifetime; file logging is left alone.
    pub fn quiet(&self) -> Option<MuteGuard> {
        match self {
            LogTarget::File => None,
            LogTarget::Stderr(switch) => Some(switch.mute()),
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `level`.
pub fn setup_logging(level: &str, log_file: Option<&Path>) -> io::Result<LogTarget> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            subscriber
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
            Ok(LogTarget::File)
        }
        None => {
            let switch = StderrSwitch::new();
            subscriber
                .with(tracing_subscriber::fmt::layer().with_writer(switch.clone()))
                .init();
            Ok(LogTarget::Stderr(switch))
        }
    }
}
