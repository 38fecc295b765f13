pub mod directory;
pub mod seed;

pub use directory::{AccessCodes, MemoryDirectory};
pub use seed::SeedData;
