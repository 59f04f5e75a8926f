//! Submission boundary: where a validated record goes after submit

mod log_handler;
mod traits;

pub use log_handler::LogSubmissionHandler;
pub use traits::SubmissionHandler;

#[cfg(test)]
pub use traits::MockSubmissionHandler;
