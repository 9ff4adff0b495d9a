//! Browser binding: the DOM-backed scene and the page entry point.

pub mod boot;
pub mod dom;
