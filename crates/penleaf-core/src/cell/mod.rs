//! Cell addressing and values

mod address;
mod value;

pub use address::CellAddress;
pub use value::CellValue;
