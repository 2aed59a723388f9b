pub mod progress;
pub mod state;
pub mod stroke;

pub use progress::{ProgressInfo, ProgressState};
pub use state::{ColoringSession, SessionPhase, SessionState, TapOutcome};
pub use stroke::Stroke;
