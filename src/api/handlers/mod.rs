pub mod barcode;
pub mod usage;
