//! File logging pipeline for unattended runs.
//!
//! There is no interactive surface on a machine being provisioned: the log
//! file (plus the remote progress events) is the only record of what
//! happened. Callers must never block on disk, so `log::*` macros enqueue
//! onto an unbounded crossbeam channel drained by a dedicated writer
//! thread; a flush handshake lets shutdown wait for pending lines.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use crossbeam_channel::{unbounded, Sender};
use log::{LevelFilter, Log, Metadata, Record};

/// Internal log line or flush marker.
enum LogMessage {
    Line(String),
    /// Flush marker with a channel sender to signal completion.
    Flush(std::sync::mpsc::Sender<()>),
}

/// Logger writing timestamped lines to a single agent log file.
pub struct FileLogger {
    tx: Sender<LogMessage>,
    level: LevelFilter,
    mirror_stderr: bool,
}

impl FileLogger {
    /// Open (or create) the log file and spawn the writer thread.
    ///
    /// The writer runs on a plain OS thread with a blocking `recv`, so log
    /// lines reach disk regardless of what the tokio runtime is doing.
    pub fn new(
        path: PathBuf,
        level: LevelFilter,
        mirror_stderr: bool,
    ) -> Result<Self, String> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("failed to create log directory: {e}"))?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| format!("failed to open log file {}: {e}", path.display()))?;

        let (tx, rx) = unbounded::<LogMessage>();

        std::thread::spawn(move || {
            for message in rx.iter() {
                match message {
                    LogMessage::Line(line) => {
                        let _ = writeln!(file, "{line}");
                    }
                    LogMessage::Flush(ack) => {
                        let _ = file.flush();
                        let _ = ack.send(());
                    }
                }
            }
            let _ = file.flush();
        });

        Ok(FileLogger {
            tx,
            level,
            mirror_stderr,
        })
    }

    /// Block until every line enqueued so far has been written and synced.
    pub fn flush_and_wait(&self) {
        let (ack_tx, ack_rx) = std::sync::mpsc::channel();
        if self.tx.send(LogMessage::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.recv_timeout(Duration::from_secs(2));
        }
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "{} [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.args()
        );
        if self.mirror_stderr {
            eprintln!("{line}");
        }
        let _ = self.tx.send(LogMessage::Line(line));
    }

    fn flush(&self) {
        self.flush_and_wait();
    }
}
