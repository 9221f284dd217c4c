use crate::domain::model::DemoReport;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Demonstration: Send + Sync {
    fn name(&self) -> &'static str;
    fn summary(&self) -> &'static str;
    async fn run(&self) -> Result<DemoReport>;
}

pub trait ConfigProvider: Send + Sync {
    fn principles(&self) -> &[String];
    fn student_name(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn verbose(&self) -> bool;
}
