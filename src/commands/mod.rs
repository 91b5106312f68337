pub mod generate;
pub mod icns;
pub mod png;
