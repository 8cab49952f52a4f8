pub mod coercions;
pub mod errors;
pub mod factor;
pub mod frame;
pub mod records;
pub mod values;

pub use errors::*;
pub use factor::*;
pub use frame::*;
pub use records::*;
pub use values::*;
