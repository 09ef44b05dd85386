pub mod c_source;
pub mod preview;

pub use c_source::{symbol_name, Artifacts};
pub use preview::save_preview;
