pub mod ecosystem;
pub mod filter;
pub mod seeds;
pub mod types;

pub use ecosystem::{EcosystemAnalyzer, EcosystemInput};
pub use seeds::SeedExtractor;
