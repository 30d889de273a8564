//! Interface Segregation tests for the todo list repository ports
//!
//! These tests verify that:
//! 1. Clients can depend on the read half or the write half alone
//! 2. The blanket implementation provides TodoListRepository from both halves

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;
use todo_domain::{
    errors::DomainResult,
    repositories::{TodoListReader, TodoListRepository, TodoListWriter},
    todo_item::TodoItem,
    value_objects::{CategoryRegistry, TodoItemId},
};

// ============================================================================
// Test double
// ============================================================================

#[derive(Default)]
struct StubRepository {
    items: Mutex<BTreeMap<TodoItemId, TodoItem>>,
    last_id: Mutex<i64>,
    categories: CategoryRegistry,
}

#[async_trait]
impl TodoListReader for StubRepository {
    async fn find_by_id(&self, id: &TodoItemId) -> DomainResult<Option<TodoItem>> {
        Ok(self.items.lock().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<TodoItem>> {
        Ok(self.items.lock().unwrap().values().cloned().collect())
    }

    async fn all_categories(&self) -> DomainResult<Vec<String>> {
        Ok(self.categories.names().to_vec())
    }

    async fn category_exists(&self, category: &str) -> DomainResult<bool> {
        Ok(self.categories.contains(category))
    }
}

#[async_trait]
impl TodoListWriter for StubRepository {
    async fn add(&self, item: &TodoItem) -> DomainResult<()> {
        self.items.lock().unwrap().insert(item.id(), item.clone());
        Ok(())
    }

    async fn update(&self, item: &TodoItem) -> DomainResult<()> {
        let mut items = self.items.lock().unwrap();
        if let Some(slot) = items.get_mut(&item.id()) {
            *slot = item.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &TodoItemId) -> DomainResult<()> {
        self.items.lock().unwrap().remove(id);
        Ok(())
    }

    async fn next_id(&self) -> DomainResult<TodoItemId> {
        let mut last = self.last_id.lock().unwrap();
        *last += 1;
        Ok(TodoItemId::new(*last))
    }
}

// ============================================================================
// ISP Test 1: Clients can depend on TodoListReader only
// ============================================================================

/// A read-only client, proving it never needs write methods
struct CompletionReport<R: TodoListReader> {
    reader: R,
}

impl<R: TodoListReader> CompletionReport<R> {
    async fn completed_count(&self) -> DomainResult<usize> {
        let items = self.reader.find_all().await?;
        Ok(items.iter().filter(|item| item.is_completed()).count())
    }
}

// ============================================================================
// ISP Test 2: Clients can depend on TodoListWriter only
// ============================================================================

/// A write-only client, proving it never needs read methods
struct Importer<W: TodoListWriter> {
    writer: W,
}

impl<W: TodoListWriter> Importer<W> {
    async fn import(&self, title: &str) -> DomainResult<TodoItemId> {
        let id = self.writer.next_id().await?;
        let item = TodoItem::create(id, title.to_string(), None, "Work".to_string())?;
        self.writer.add(&item).await?;
        Ok(id)
    }
}

// ============================================================================
// ISP Test 3: Blanket impl provides TodoListRepository
// ============================================================================

fn full_repository<R: TodoListRepository>(_repo: &R) {
    // Compiles = blanket impl works
}

#[tokio::test]
async fn test_reader_only_client() {
    let repo = StubRepository::default();
    let mut done = TodoItem::create(TodoItemId::new(1), "Done".into(), None, "Work".into()).unwrap();
    done.add_progression(chrono::Utc::now(), Decimal::ONE_HUNDRED).unwrap();
    let open = TodoItem::create(TodoItemId::new(2), "Open".into(), None, "Work".into()).unwrap();
    repo.add(&done).await.unwrap();
    repo.add(&open).await.unwrap();

    let report = CompletionReport { reader: repo };
    assert_eq!(report.completed_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_writer_only_client() {
    let importer = Importer {
        writer: StubRepository::default(),
    };

    let first = importer.import("First").await.unwrap();
    let second = importer.import("Second").await.unwrap();
    assert!(second > first);
}

#[tokio::test]
async fn test_blanket_repository_impl() {
    let repo = StubRepository::default();
    full_repository(&repo);

    assert!(repo.category_exists("Health").await.unwrap());
    assert_eq!(repo.all_categories().await.unwrap().len(), 5);
}
