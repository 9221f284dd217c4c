//! Liskov Substitution Principle.
//!
//! Implementers must be usable wherever their contract is expected. The
//! `legacy` contract forces postgraduate students to stub `deliver_tcc`
//! (the undergraduate final thesis) into a silent no-op; the refactored
//! version keeps only the genuinely shared `study` operation on the common
//! contract and gives graduation students the extra operation as their own.

use crate::domain::model::DemoReport;
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;
use async_trait::async_trait;

pub mod legacy {
    /// The broken contract: `deliver_tcc` is declared for every student,
    /// but only graduation students can honour it.
    pub trait Student {
        fn name(&self) -> &str;

        fn study(&self) -> String {
            format!("{} is studying", self.name())
        }

        fn deliver_tcc(&self) -> Option<String>;
    }

    pub struct StudentGraduation {
        pub name: String,
    }

    impl Student for StudentGraduation {
        fn name(&self) -> &str {
            &self.name
        }

        fn deliver_tcc(&self) -> Option<String> {
            Some(format!("{} delivered the TCC", self.name))
        }
    }

    pub struct PostgraduateStudent {
        pub name: String,
    }

    impl Student for PostgraduateStudent {
        fn name(&self) -> &str {
            &self.name
        }

        fn study(&self) -> String {
            format!("{} is studying and searching", self.name)
        }

        // Forced no-op: postgraduate students do not deliver a TCC, so
        // substituting one here breaks the caller's expectation.
        fn deliver_tcc(&self) -> Option<String> {
            None
        }
    }
}

/// Only the operation every student track actually shares.
pub trait Study {
    fn name(&self) -> &str;
    fn study(&self) -> String;
}

pub struct StudentGraduation {
    pub name: String,
}

impl StudentGraduation {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn deliver_tcc(&self) -> String {
        format!("{} delivered the TCC", self.name)
    }
}

impl Study for StudentGraduation {
    fn name(&self) -> &str {
        &self.name
    }

    fn study(&self) -> String {
        format!("{} is studying", self.name)
    }
}

pub struct StudentPostGraduation {
    pub name: String,
}

impl StudentPostGraduation {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Study for StudentPostGraduation {
    fn name(&self) -> &str {
        &self.name
    }

    fn study(&self) -> String {
        format!("{} is studying and searching", self.name)
    }
}

pub struct LspDemo {
    pub student_name: String,
}

impl LspDemo {
    pub fn new(student_name: impl Into<String>) -> Self {
        Self {
            student_name: student_name.into(),
        }
    }
}

#[async_trait]
impl Demonstration for LspDemo {
    fn name(&self) -> &'static str {
        "lsp"
    }

    fn summary(&self) -> &'static str {
        "Liskov Substitution: siblings share only what both can honour"
    }

    async fn run(&self) -> Result<DemoReport> {
        let mut report = DemoReport::new(self.name(), self.summary());

        let broken: Vec<Box<dyn legacy::Student + Send + Sync>> = vec![
            Box::new(legacy::StudentGraduation {
                name: self.student_name.clone(),
            }),
            Box::new(legacy::PostgraduateStudent {
                name: self.student_name.clone(),
            }),
        ];
        for student in &broken {
            match student.deliver_tcc() {
                Some(line) => report.push(line),
                None => report.push(format!(
                    "{} was asked for a TCC but has none to deliver",
                    student.name()
                )),
            }
        }

        let students: Vec<Box<dyn Study + Send + Sync>> = vec![
            Box::new(StudentGraduation::new(self.student_name.clone())),
            Box::new(StudentPostGraduation::new(self.student_name.clone())),
        ];
        for student in &students {
            report.push(student.study());
        }

        let graduate = StudentGraduation::new(self.student_name.clone());
        report.push(graduate.deliver_tcc());

        Ok(report)
    }
}
