pub mod types;
pub mod resolver;
pub mod decoration;
pub mod analytics;
pub mod sample;
pub mod wasm;

pub use types::*;
pub use resolver::*;
pub use decoration::*;
pub use analytics::*;
pub use sample::*;
pub use wasm::*;
