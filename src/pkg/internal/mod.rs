pub mod adaptors;
pub mod extract;
pub mod matching;
pub mod profile;
