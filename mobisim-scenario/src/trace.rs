//! Trace file writers and results collection.
//!
//! Writers are explicit objects with lifecycles scoped to the run; the
//! header is written once at creation. At the end of a run the generated
//! trace files are moved into the results directory.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use mobisim_common::{CellId, Error, SimTime, UeId};

/// File name of the RSRP trace.
pub const RSRP_TRACE_FILE: &str = "measurements.txt";

/// File name of the handover event trace.
pub const HANDOVER_TRACE_FILE: &str = "handovers.txt";

/// Writes the per-tick serving-cell RSRP trace.
///
/// Format: a `time\tRSRP` header, then one tab-separated row per sample
/// with the time in seconds and the RSRP in dBm.
pub struct RsrpTraceWriter {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl RsrpTraceWriter {
    /// Creates the trace file and writes the header.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let mut writer = BufWriter::new(File::create(&path)?);
        writeln!(writer, "time\tRSRP")?;
        Ok(Self { writer, path })
    }

    /// Appends one sample row.
    pub fn record(&mut self, time: SimTime, rsrp_dbm: f64) -> Result<(), Error> {
        writeln!(self.writer, "{:.3}\t{:.2}", time.as_secs_f64(), rsrp_dbm)?;
        Ok(())
    }

    /// Flushes and returns the trace file path.
    pub fn finish(mut self) -> Result<PathBuf, Error> {
        self.writer.flush()?;
        Ok(self.path)
    }
}

/// A handover lifecycle event for the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoverEvent {
    /// The engine emitted a decision.
    Decision,
    /// The attachment controller acknowledged the move.
    Complete,
    /// The target was unreachable.
    Failed,
}

impl HandoverEvent {
    fn label(&self) -> &'static str {
        match self {
            Self::Decision => "decision",
            Self::Complete => "complete",
            Self::Failed => "failed",
        }
    }
}

/// Writes the handover event trace.
///
/// Format: a `time\tue\tsource\ttarget\tevent` header, then one row per
/// lifecycle event.
pub struct HandoverTraceWriter {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl HandoverTraceWriter {
    /// Creates the trace file and writes the header.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let mut writer = BufWriter::new(File::create(&path)?);
        writeln!(writer, "time\tue\tsource\ttarget\tevent")?;
        Ok(Self { writer, path })
    }

    /// Appends one event row.
    pub fn record(
        &mut self,
        time: SimTime,
        ue_id: UeId,
        source: CellId,
        target: CellId,
        event: HandoverEvent,
    ) -> Result<(), Error> {
        writeln!(
            self.writer,
            "{:.3}\t{}\t{}\t{}\t{}",
            time.as_secs_f64(),
            ue_id,
            source,
            target,
            event.label()
        )?;
        Ok(())
    }

    /// Flushes and returns the trace file path.
    pub fn finish(mut self) -> Result<PathBuf, Error> {
        self.writer.flush()?;
        Ok(self.path)
    }
}

/// Moves generated trace files into the results directory.
///
/// The directory is created if absent. A file that cannot be moved is
/// logged and skipped; the run result is unaffected.
pub fn collect_traces<P: AsRef<Path>>(output_dir: P, files: &[PathBuf]) -> Result<(), Error> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    for file in files {
        let Some(name) = file.file_name() else {
            continue;
        };
        if !file.exists() {
            continue;
        }
        let dest = output_dir.join(name);
        if let Err(e) = fs::rename(file, &dest) {
            warn!("failed to move trace {} -> {}: {e}", file.display(), dest.display());
        }
    }
    Ok(())
}
