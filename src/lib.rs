pub mod spec;
pub mod types;
pub mod utils;

pub use spec::SpecIntegrityChecker;
