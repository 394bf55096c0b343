mod submit;

pub use submit::SubmitError;
