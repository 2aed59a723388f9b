/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Decoding,
    Resizing,
    Converting,
    Quantizing,
    Indexing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decoding => write!(f, "Decoding image"),
            Self::Resizing => write!(f, "Resizing"),
            Self::Converting => write!(f, "Converting to Lab"),
            Self::Quantizing => write!(f, "Building palette"),
            Self::Indexing => write!(f, "Indexing pixels"),
        }
    }
}

/// Thread-safe progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has started. `total_items` is the number of
    /// work items in this stage (e.g., pixel count), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// Work items within the current stage have completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `generate` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
