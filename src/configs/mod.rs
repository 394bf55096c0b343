mod site;

pub use site::*;
