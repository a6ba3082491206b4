pub mod bump_classifier;
pub mod release_notes;

pub use bump_classifier::{BumpClassifier, BumpFlags};
pub use release_notes::{compose, NO_NOTABLE_CHANGES};
