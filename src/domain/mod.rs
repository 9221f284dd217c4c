// Domain layer: the report model and the ports the engine and binary depend on.

pub mod model;
pub mod ports;

pub use crate::domain::model::DemoReport;
pub use crate::domain::ports::{ConfigProvider, Demonstration};
