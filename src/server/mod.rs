pub mod contact;

// Re-export commonly used functionality
pub use contact::{ HttpSubmitter, SimulatedSubmitter, Submitter, submission_trace };
