//! Dependency Inversion Principle.
//!
//! The `legacy` service constructs its own concrete repository, so swapping
//! the storage backend means editing the service. The refactored service
//! receives an `OrderRepository` at construction and never learns which
//! backend is behind it.

use crate::domain::model::DemoReport;
use crate::domain::ports::Demonstration;
use crate::utils::error::{DemoError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}

/// The storage capability the service depends on.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn save_order(&self, order: &Order) -> Result<()>;
}

#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<Mutex<Vec<Order>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn saved_orders(&self) -> Vec<Order> {
        self.orders.lock().await.clone()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save_order(&self, order: &Order) -> Result<()> {
        let mut orders = self.orders.lock().await;
        orders.push(order.clone());
        Ok(())
    }
}

/// Persists each order as `order_<id>.json` under a base path.
#[derive(Debug, Clone)]
pub struct JsonFileOrderRepository {
    base_path: PathBuf,
}

impl JsonFileOrderRepository {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn order_path(&self, id: u64) -> PathBuf {
        Path::new(&self.base_path).join(format!("order_{}.json", id))
    }
}

#[async_trait]
impl OrderRepository for JsonFileOrderRepository {
    async fn save_order(&self, order: &Order) -> Result<()> {
        std::fs::create_dir_all(&self.base_path)?;
        let json = serde_json::to_string_pretty(order)?;
        std::fs::write(self.order_path(order.id), json)?;
        Ok(())
    }
}

pub mod legacy {
    use super::{InMemoryOrderRepository, Order, OrderRepository};
    use crate::utils::error::Result;

    /// Tightly coupled: the service news up its own repository, so the
    /// backend cannot be substituted without editing this type.
    pub struct OrderService {
        order_repository: InMemoryOrderRepository,
    }

    impl OrderService {
        #[allow(clippy::new_without_default)]
        pub fn new() -> Self {
            Self {
                order_repository: InMemoryOrderRepository::new(),
            }
        }

        pub async fn process_order(&self, order: &Order) -> Result<()> {
            self.order_repository.save_order(order).await
        }

        pub async fn saved_orders(&self) -> Vec<Order> {
            self.order_repository.saved_orders().await
        }
    }
}

/// Depends on the abstraction; the concrete repository arrives through the
/// constructor.
pub struct OrderService<R: OrderRepository> {
    order_repository: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(order_repository: R) -> Self {
        Self { order_repository }
    }

    pub async fn process_order(&self, order: &Order) -> Result<()> {
        tracing::debug!(order_id = order.id, "processing order");
        self.order_repository.save_order(order).await.map_err(|e| {
            DemoError::RepositoryError {
                message: format!("failed to save order {}: {}", order.id, e),
            }
        })
    }
}

pub struct DipDemo;

#[async_trait]
impl Demonstration for DipDemo {
    fn name(&self) -> &'static str {
        "dip"
    }

    fn summary(&self) -> &'static str {
        "Dependency Inversion: the service receives its repository"
    }

    async fn run(&self) -> Result<DemoReport> {
        let mut report = DemoReport::new(self.name(), self.summary());

        let coupled = legacy::OrderService::new();
        coupled.process_order(&Order::new(1, "Keyboard")).await?;
        report.push("legacy service constructed its own repository");

        let repository = InMemoryOrderRepository::new();
        let service = OrderService::new(repository.clone());
        service.process_order(&Order::new(2, "Monitor")).await?;
        service.process_order(&Order::new(3, "Mouse")).await?;

        for order in repository.saved_orders().await {
            report.push(format!("order {} ({}) persisted", order.id, order.name));
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_legacy_service_is_stuck_with_its_backend() {
        let service = legacy::OrderService::new();
        service.process_order(&Order::new(1, "Keyboard")).await.unwrap();

        let saved = service.saved_orders().await;
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].name, "Keyboard");
    }

    #[tokio::test]
    async fn test_service_routes_to_the_injected_memory_repository() {
        let repository = InMemoryOrderRepository::new();
        let service = OrderService::new(repository.clone());

        service.process_order(&Order::new(7, "Desk")).await.unwrap();

        let saved = repository.saved_orders().await;
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, 7);
    }

    #[tokio::test]
    async fn test_service_routes_to_the_injected_file_repository() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonFileOrderRepository::new(temp_dir.path());
        let order_path = repository.order_path(9);

        let service = OrderService::new(repository);
        service.process_order(&Order::new(9, "Chair")).await.unwrap();

        assert!(order_path.exists());
        let json = std::fs::read_to_string(order_path).unwrap();
        let saved: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(saved.id, 9);
        assert_eq!(saved.name, "Chair");
    }

    #[tokio::test]
    async fn test_substituting_repositories_needs_no_service_change() {
        let temp_dir = TempDir::new().unwrap();
        let order = Order::new(4, "Lamp");

        let memory = InMemoryOrderRepository::new();
        OrderService::new(memory.clone())
            .process_order(&order)
            .await
            .unwrap();

        let file = JsonFileOrderRepository::new(temp_dir.path());
        let order_path = file.order_path(4);
        OrderService::new(file).process_order(&order).await.unwrap();

        assert_eq!(memory.saved_orders().await, vec![order]);
        assert!(order_path.exists());
    }
}
