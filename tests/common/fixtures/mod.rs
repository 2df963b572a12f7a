mod centrograms;
mod documents;

// Re-export test fixtures
pub use centrograms::*;
pub use documents::*;
