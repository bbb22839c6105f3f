pub mod classify;
pub mod engine;
pub mod locate;
pub mod marshal;
pub mod runner;
pub mod spec;

pub use classify::ClassifiedOutcome;
pub use engine::{EngineConfig, ScanEngine};
pub use marshal::{FlagValue, ResolvedArgs};
pub use spec::SubcommandSpec;
