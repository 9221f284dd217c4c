//! Open-Closed Principle.
//!
//! A pile of conditions checking a type tag is the usual symptom. The
//! `legacy` approver branches on the exam kind; the refactored version
//! moves approval behind a capability contract, so a new exam category is
//! a new implementer rather than another arm in the conditional.

use crate::domain::model::DemoReport;
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamKind {
    Blood,
    XRay,
}

#[derive(Debug, Clone, Copy)]
pub struct Exam {
    pub kind: ExamKind,
}

pub mod legacy {
    use super::{Exam, ExamKind};

    /// Tag-branching approver. Every new exam kind means editing
    /// `approve_request_exam`.
    #[derive(Debug, Default)]
    pub struct ExamApprove;

    impl ExamApprove {
        pub fn new() -> Self {
            Self
        }

        pub fn approve_request_exam(&self, exam: &Exam) -> Option<&'static str> {
            match exam.kind {
                ExamKind::Blood => {
                    if self.verify_conditions_blood(exam) {
                        Some("Blood Exam Approved")
                    } else {
                        None
                    }
                }
                ExamKind::XRay => {
                    if self.verify_conditions_xray(exam) {
                        Some("XRay Exam Approved!")
                    } else {
                        None
                    }
                }
            }
        }

        // Left inverted on purpose: the legacy path silently rejects every
        // blood exam, which is part of what the walkthrough demonstrates.
        pub fn verify_conditions_blood(&self, _exam: &Exam) -> bool {
            false
        }

        pub fn verify_conditions_xray(&self, _exam: &Exam) -> bool {
            true
        }
    }
}

/// The capability contract: one implementer per exam category.
pub trait ExamApproval {
    fn approve_request_exam(&self, exam: &Exam) -> Option<String>;
    fn verify_condition_exam(&self, exam: &Exam) -> bool;
}

#[derive(Debug, Default)]
pub struct BloodExamApprove;

impl ExamApproval for BloodExamApprove {
    fn approve_request_exam(&self, exam: &Exam) -> Option<String> {
        if self.verify_condition_exam(exam) {
            Some("Blood Exam Approved".to_string())
        } else {
            None
        }
    }

    fn verify_condition_exam(&self, _exam: &Exam) -> bool {
        true
    }
}

#[derive(Debug, Default)]
pub struct RayXExamApprove;

impl ExamApproval for RayXExamApprove {
    fn approve_request_exam(&self, exam: &Exam) -> Option<String> {
        if self.verify_condition_exam(exam) {
            Some("RayX Exam Approved".to_string())
        } else {
            None
        }
    }

    fn verify_condition_exam(&self, _exam: &Exam) -> bool {
        true
    }
}

pub struct OcpDemo;

#[async_trait]
impl Demonstration for OcpDemo {
    fn name(&self) -> &'static str {
        "ocp"
    }

    fn summary(&self) -> &'static str {
        "Open-Closed: new exam categories extend, they do not modify"
    }

    async fn run(&self) -> Result<DemoReport> {
        let mut report = DemoReport::new(self.name(), self.summary());

        let blood = Exam {
            kind: ExamKind::Blood,
        };
        let xray = Exam { kind: ExamKind::XRay };

        let branchy = legacy::ExamApprove::new();
        match branchy.approve_request_exam(&blood) {
            Some(message) => report.push(message),
            None => report.push("legacy check rejected the blood exam"),
        }
        if let Some(message) = branchy.approve_request_exam(&xray) {
            report.push(message);
        }

        let approvers: Vec<Box<dyn ExamApproval + Send + Sync>> =
            vec![Box::new(BloodExamApprove), Box::new(RayXExamApprove)];
        let exams = [blood, xray];

        for (approver, exam) in approvers.iter().zip(exams.iter()) {
            if let Some(message) = approver.approve_request_exam(exam) {
                tracing::debug!(%message, "exam approved");
                report.push(message);
            }
        }

        Ok(report)
    }
}
