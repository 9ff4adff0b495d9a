//! Core utilities shared by the domain, systems and simulation layers.

// Macros must be declared before the modules that use them.
#[macro_use]
pub mod utils;
