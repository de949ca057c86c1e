pub mod color;
pub mod logging;
