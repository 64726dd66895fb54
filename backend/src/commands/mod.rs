//! Commands Layer
//!
//! Entry points for the presentation layer. Every command takes the shared
//! `AppState` explicitly.

mod item_cmd;
mod property_cmd;
mod report_cmd;

pub use item_cmd::*;
pub use property_cmd::*;
pub use report_cmd::*;
