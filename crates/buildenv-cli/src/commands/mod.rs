//! CLI command implementations

pub mod check;
pub mod render;

pub use check::execute as execute_check;
pub use render::execute as execute_render;
