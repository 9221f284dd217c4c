use crate::domain::model::DemoReport;
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;

pub struct DemoEngine {
    demos: Vec<Box<dyn Demonstration>>,
}

impl DemoEngine {
    pub fn new(demos: Vec<Box<dyn Demonstration>>) -> Self {
        Self { demos }
    }

    pub async fn run(&self) -> Result<Vec<DemoReport>> {
        println!("Running {} demonstrations...", self.demos.len());

        let mut reports = Vec::with_capacity(self.demos.len());
        for demo in &self.demos {
            tracing::info!(principle = demo.name(), "running demonstration");
            println!("== {}: {}", demo.name(), demo.summary());

            let report = demo.run().await?;
            for line in &report.lines {
                println!("   {}", line);
            }

            reports.push(report);
        }

        println!("Done: {} reports collected", reports.len());
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::Demonstration;
    use async_trait::async_trait;

    struct FixedDemo {
        line: &'static str,
    }

    #[async_trait]
    impl Demonstration for FixedDemo {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn summary(&self) -> &'static str {
            "fixed demo for engine tests"
        }

        async fn run(&self) -> Result<DemoReport> {
            let mut report = DemoReport::new(self.name(), self.summary());
            report.push(self.line);
            Ok(report)
        }
    }

    #[tokio::test]
    async fn test_engine_collects_reports_in_order() {
        let engine = DemoEngine::new(vec![
            Box::new(FixedDemo { line: "first" }),
            Box::new(FixedDemo { line: "second" }),
        ]);

        let reports = engine.run().await.unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].lines, vec!["first"]);
        assert_eq!(reports[1].lines, vec!["second"]);
    }

    #[tokio::test]
    async fn test_engine_with_no_demos_yields_no_reports() {
        let engine = DemoEngine::new(Vec::new());
        let reports = engine.run().await.unwrap();
        assert!(reports.is_empty());
    }
}
