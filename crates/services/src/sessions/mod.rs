mod runner;
mod snapshot;

pub use runner::{QuizRunner, RunnerConfig};
pub use snapshot::{QuizSnapshot, SubmitStatus};
