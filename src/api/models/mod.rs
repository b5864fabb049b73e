pub mod weather;

pub use weather::{SaveResponse, SaveResult};
