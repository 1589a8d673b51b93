//! Request and response models

pub mod interaction;
pub mod report;

pub use interaction::*;
pub use report::*;
