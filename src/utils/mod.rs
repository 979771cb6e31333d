// Utils compartidos

pub mod storage;
pub mod leaflet_ffi;

pub use storage::*;
