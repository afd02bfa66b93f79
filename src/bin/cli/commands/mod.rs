pub mod codes;
pub mod convert;
pub mod drill;
pub mod dump;
pub mod stats;
