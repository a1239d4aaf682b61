pub mod encoder;
pub mod renderer;
pub mod router;

pub use encoder::*;
pub use router::*;
