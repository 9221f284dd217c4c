//! Single Responsibility Principle.
//!
//! A class should have one, and only one, reason to change. The `legacy`
//! module bundles task CRUD, API connectivity, reporting and notification
//! delivery into a single type; the refactored version gives each concern
//! its own collaborator with no cross-calls and no shared state.

use crate::domain::model::DemoReport;
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;
use async_trait::async_trait;

pub mod legacy {
    /// The problematic version: four unrelated reasons to change in one type.
    #[derive(Debug, Default)]
    pub struct TaskManager;

    impl TaskManager {
        pub fn new() -> Self {
            Self
        }

        pub fn connect_api(&self) {}

        pub fn create_task(&self) -> &'static str {
            "Create Task"
        }

        pub fn update_task(&self) -> &'static str {
            "Update Task"
        }

        pub fn remove_task(&self) -> &'static str {
            "Remove Task"
        }

        pub fn send_notification(&self) -> &'static str {
            "Send Notification"
        }

        pub fn send_report(&self) -> &'static str {
            "Send Report"
        }
    }
}

/// Owns external connectivity and nothing else.
#[derive(Debug, Default)]
pub struct ApiConnector;

impl ApiConnector {
    pub fn new() -> Self {
        Self
    }

    pub fn connect_api(&self) -> Result<()> {
        tracing::debug!("connecting to external API");
        Ok(())
    }
}

/// Owns report delivery and nothing else.
#[derive(Debug, Default)]
pub struct Report;

impl Report {
    pub fn new() -> Self {
        Self
    }

    pub fn send_report(&self) -> &'static str {
        "Send Report"
    }
}

/// Owns notification delivery and nothing else.
#[derive(Debug, Default)]
pub struct Notificator;

impl Notificator {
    pub fn new() -> Self {
        Self
    }

    pub fn send_notification(&self) -> &'static str {
        "Send notification"
    }
}

/// After the split, only task CRUD remains here.
#[derive(Debug, Default)]
pub struct TaskManager;

impl TaskManager {
    pub fn new() -> Self {
        Self
    }

    pub fn create_task(&self) -> &'static str {
        "Create Task"
    }

    pub fn update_task(&self) -> &'static str {
        "Update Task"
    }

    pub fn remove_task(&self) -> &'static str {
        "Remove Task"
    }
}

pub struct SrpDemo;

#[async_trait]
impl Demonstration for SrpDemo {
    fn name(&self) -> &'static str {
        "srp"
    }

    fn summary(&self) -> &'static str {
        "Single Responsibility: one reason to change per collaborator"
    }

    async fn run(&self) -> Result<DemoReport> {
        let mut report = DemoReport::new(self.name(), self.summary());

        let monolith = legacy::TaskManager::new();
        report.push(format!(
            "legacy TaskManager mixes concerns: {}, {}",
            monolith.create_task(),
            monolith.send_report()
        ));

        let connector = ApiConnector::new();
        connector.connect_api()?;

        let tasks = TaskManager::new();
        report.push(tasks.create_task());
        report.push(tasks.update_task());
        report.push(tasks.remove_task());
        report.push(Notificator::new().send_notification());
        report.push(Report::new().send_report());

        Ok(report)
    }
}
