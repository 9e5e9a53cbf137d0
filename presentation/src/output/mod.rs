//! Console output

pub mod console;
pub mod notifier;
