//! Population registry - which citizens live in which kingdom

pub mod registry;

pub use registry::PopulationRegistry;
