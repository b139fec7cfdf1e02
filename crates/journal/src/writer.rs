//! Journal writer: a tokio task that appends entries to a JSONL file.
//!
//! The game loop only pushes entries into an unbounded channel and never waits
//! on disk I/O. `close` drops the sender, lets the task drain the channel and
//! waits for the final flush.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tokio::fs::OpenOptions;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use blockfall_engine::{GameEvent, Observer};

use crate::record::{Entry, Record};

pub struct Journal {
    runtime: Runtime,
    tx: Option<mpsc::UnboundedSender<Entry>>,
    writer: Option<JoinHandle<Result<u64>>>,
    path: PathBuf,
    seq: u64,
}

impl Journal {
    /// Open `path` for appending and start the writer task
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let runtime = Runtime::new().context("failed to create tokio runtime")?;

        let file = runtime
            .block_on(OpenOptions::new().create(true).append(true).open(&path))
            .with_context(|| format!("failed to open journal {}", path.display()))?;

        let (tx, mut rx) = mpsc::unbounded_channel::<Entry>();
        let writer = runtime.spawn(async move {
            let mut out = BufWriter::new(file);
            let mut buf: Vec<u8> = Vec::with_capacity(4096);
            let mut written = 0u64;

            while let Some(entry) = rx.recv().await {
                buf.clear();
                serde_json::to_writer(&mut buf, &entry).context("failed to encode entry")?;
                buf.push(b'\n');
                out.write_all(&buf)
                    .await
                    .context("failed to write journal entry")?;
                written += 1;
            }

            out.flush().await.context("failed to flush journal")?;
            Ok::<u64, anyhow::Error>(written)
        });

        Ok(Self {
            runtime,
            tx: Some(tx),
            writer: Some(writer),
            path,
            seq: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries queued so far
    pub fn queued(&self) -> u64 {
        self.seq
    }

    /// Queue a record; returns its sequence number
    pub fn record(&mut self, record: Record) -> u64 {
        self.seq += 1;
        if let Some(tx) = &self.tx {
            // A dead writer surfaces its error from `close`.
            let _ = tx.send(Entry {
                seq: self.seq,
                record,
            });
        }
        self.seq
    }

    /// Drain the queue, flush, and return how many entries were written
    pub fn close(mut self) -> Result<u64> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<u64> {
        self.tx.take();
        let Some(writer) = self.writer.take() else {
            return Ok(0);
        };
        self.runtime
            .block_on(writer)
            .map_err(|e| anyhow!("journal writer panicked: {e}"))?
    }
}

impl Observer for Journal {
    fn observe(&mut self, event: &GameEvent<'_>) {
        self.record(Record::from_event(event));
    }
}

impl Drop for Journal {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

/// Read a journal file back into entries
pub fn read_entries(path: impl AsRef<Path>) -> Result<Vec<Entry>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read journal {}", path.display()))?;
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("{}:{}: bad journal entry", path.display(), i + 1))
        })
        .collect()
}
