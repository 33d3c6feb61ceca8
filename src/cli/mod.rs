pub mod orchestration;

pub use orchestration::{ReleaseOrchestrator, SyncOutcome};
