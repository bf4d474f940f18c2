pub mod colors;
pub mod spawn;
