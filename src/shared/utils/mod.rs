// Utility functions
pub mod timer;

pub use timer::sleep;
