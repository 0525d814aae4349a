pub mod controller;
pub mod loading;

pub use controller::{StylesOutcome, TriggerOutcome, UiController};
pub use loading::{LoadingGuard, LoadingState};
