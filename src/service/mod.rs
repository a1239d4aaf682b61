pub mod barcode;
pub mod interpreter;
pub mod usage;

pub use barcode::DeliveryRouter;
pub use interpreter::interpret;
pub use usage::describe;
