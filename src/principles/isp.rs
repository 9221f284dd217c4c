//! Interface Segregation Principle.
//!
//! No implementer should be forced into methods it never uses. Both the
//! seller and the receptionist earn a salary, but only the seller earns a
//! commission; the `legacy` contract forces the receptionist to stub the
//! commission method, the refactored version splits the two capabilities
//! into independent contracts.

use crate::domain::model::DemoReport;
use crate::domain::ports::Demonstration;
use crate::utils::error::Result;
use async_trait::async_trait;

pub mod legacy {
    /// Fat contract: salary and commission bundled together.
    pub trait Employee {
        fn salary(&self) -> u32;
        fn generate_commission(&self) -> Option<String>;
    }

    pub struct Seller;

    impl Employee for Seller {
        fn salary(&self) -> u32 {
            1000
        }

        fn generate_commission(&self) -> Option<String> {
            Some("Generating Commission".to_string())
        }
    }

    pub struct Receptionist;

    impl Employee for Receptionist {
        fn salary(&self) -> u32 {
            1000
        }

        // Forced stub: receptionists have no commission.
        fn generate_commission(&self) -> Option<String> {
            None
        }
    }
}

pub trait Employee {
    fn salary(&self) -> u32;
}

pub trait Commissionable {
    fn generate_commission(&self) -> String;
}

pub struct Seller;

impl Employee for Seller {
    fn salary(&self) -> u32 {
        1000
    }
}

impl Commissionable for Seller {
    fn generate_commission(&self) -> String {
        "Generating Commission".to_string()
    }
}

/// Implements `Employee` only; there is no commission operation to stub.
pub struct Receptionist;

impl Employee for Receptionist {
    fn salary(&self) -> u32 {
        1000
    }
}

pub struct IspDemo;

#[async_trait]
impl Demonstration for IspDemo {
    fn name(&self) -> &'static str {
        "isp"
    }

    fn summary(&self) -> &'static str {
        "Interface Segregation: no forced no-op implementations"
    }

    async fn run(&self) -> Result<DemoReport> {
        let mut report = DemoReport::new(self.name(), self.summary());

        let legacy_staff: Vec<Box<dyn legacy::Employee + Send + Sync>> =
            vec![Box::new(legacy::Seller), Box::new(legacy::Receptionist)];
        for employee in &legacy_staff {
            if employee.generate_commission().is_none() {
                report.push("legacy contract forced a no-op commission stub");
            }
        }

        let payroll: Vec<Box<dyn Employee + Send + Sync>> =
            vec![Box::new(Seller), Box::new(Receptionist)];
        let total: u32 = payroll.iter().map(|e| e.salary()).sum();
        report.push(format!("payroll covers {} employees, total {}", payroll.len(), total));

        // Only the seller ends up behind the commission contract.
        let commissioned: Vec<Box<dyn Commissionable + Send + Sync>> = vec![Box::new(Seller)];
        for earner in &commissioned {
            report.push(earner.generate_commission());
        }

        Ok(report)
    }
}
