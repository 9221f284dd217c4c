pub mod engine;

pub use crate::core::engine::DemoEngine;
pub use crate::domain::ports::{ConfigProvider, Demonstration};
