pub mod barcode;
pub mod delivery;
pub mod request;

pub use barcode::*;
pub use delivery::*;
pub use request::*;
