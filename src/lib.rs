mod common;
pub mod format;
pub mod grid_loop;

pub use common::*;
