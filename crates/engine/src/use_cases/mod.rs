//! Use cases - User story orchestration.
//!
//! Use cases orchestrate the domain generators over the repository ports.

pub mod galaxy;

pub use galaxy::GalaxyUseCases;
