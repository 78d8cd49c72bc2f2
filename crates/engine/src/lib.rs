//! GalaxyForge Engine library.
//!
//! Galaxy tree lifecycle on top of the pure generators in `galaxyforge-domain`.
//!
//! ## Structure
//!
//! - `use_cases/` - Galaxy creation, tree population, teardown and repositioning
//! - `infrastructure/` - Ports plus the in-memory store, clock, random sources and config
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
