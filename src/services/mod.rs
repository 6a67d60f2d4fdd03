// External-collaborator ports and adapters
pub mod dispatch;
pub mod notifier;

pub use dispatch::MatchDispatcher;
pub use notifier::{EmailSimulationNotifier, MatchNotifier, RecordingNotifier};
