use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{export::encode::ExportArtifact, foundation::error::ShalomResult};

/// User-facing message raised once for any failed export.
pub const EXPORT_ERROR_MESSAGE: &str = "Error al generar la imagen. Por favor, intenta de nuevo.";

/// Destination of finished exports; the browser download in the editor page.
pub trait DownloadSink: Send {
    /// Hand over one artifact. Called at most once per export.
    fn deliver(&mut self, artifact: ExportArtifact) -> ShalomResult<()>;
}

/// User-visible alert channel.
pub trait Notifier: Send {
    /// Show `message` to the user.
    fn alert(&mut self, message: &str);
}

/// Writes each artifact as `<dir>/<file_name>`.
#[derive(Debug)]
pub struct DirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    /// Sink writing into `dir`, created on first delivery.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in delivery order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, artifact: ExportArtifact) -> ShalomResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        let path = self.dir.join(&artifact.file_name);
        std::fs::write(&path, &artifact.png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        tracing::info!(path = %path.display(), bytes = artifact.png.len(), "export written");
        self.written.push(path);
        Ok(())
    }
}

/// Keeps delivered artifacts in memory.
#[derive(Debug, Default)]
pub struct InMemorySink {
    artifacts: Vec<ExportArtifact>,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivered artifacts, in order.
    pub fn artifacts(&self) -> &[ExportArtifact] {
        &self.artifacts
    }
}

impl DownloadSink for InMemorySink {
    fn deliver(&mut self, artifact: ExportArtifact) -> ShalomResult<()> {
        self.artifacts.push(artifact);
        Ok(())
    }
}

/// Reports alerts through `tracing` at error level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&mut self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Records alerts for later inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    alerts: Vec<String>,
}

impl RecordingNotifier {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alerts received so far.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
