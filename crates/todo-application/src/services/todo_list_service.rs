//! TodoList Application Service
//!
//! Orchestrates todo item use cases using the TodoItem aggregate.
//! Stateless and reusable across requests; depends only on the repository
//! abstraction from the domain layer.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::dto::{ProgressionCommand, TodoItemCommand, TodoItemDto};
use crate::errors::{ApplicationError, ApplicationResult};
use crate::report;

use todo_domain::repositories::TodoListRepository;
use todo_domain::todo_item::{Progression, TodoItem};
use todo_domain::value_objects::TodoItemId;

/// TodoList Application Service
///
/// All mutable state is persisted via the repository. Every operation is
/// audit-logged: entry and success at info, rejections at warn, storage
/// failures at error.
pub struct TodoListService<R>
where
    R: TodoListRepository,
{
    repository: Arc<R>,
}

impl<R> TodoListService<R>
where
    R: TodoListRepository + 'static,
{
    /// Create a new TodoListService with injected dependencies
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List all items in repository order
    pub async fn list_all(&self) -> ApplicationResult<Vec<TodoItemDto>> {
        info!("Getting all TodoItems");

        let items = audit("list_all", self.repository.find_all().await.map_err(Into::into))?;
        info!(count = items.len(), "Retrieved TodoItems");
        Ok(items.iter().map(TodoItemDto::from_domain).collect())
    }

    /// Get an item by ID
    pub async fn get_by_id(&self, id: TodoItemId) -> ApplicationResult<TodoItemDto> {
        info!(%id, "Getting TodoItem");

        let item = audit("get_by_id", self.load(id).await)?;
        Ok(TodoItemDto::from_domain(&item))
    }

    /// List valid categories in registry order
    pub async fn list_categories(&self) -> ApplicationResult<Vec<String>> {
        info!("Getting all categories");

        let categories = audit(
            "list_categories",
            self.repository.all_categories().await.map_err(Into::into),
        )?;
        debug!(count = categories.len(), "Retrieved categories");
        Ok(categories)
    }

    /// Reserve the next item ID
    pub async fn next_id(&self) -> ApplicationResult<TodoItemId> {
        let id = audit("next_id", self.repository.next_id().await.map_err(Into::into))?;
        debug!(%id, "Next available id");
        Ok(id)
    }

    /// Create a new todo item and return it as stored
    pub async fn create(&self, cmd: Option<TodoItemCommand>) -> ApplicationResult<TodoItemDto> {
        let created = audit("create", self.try_create(cmd.as_ref()).await)?;
        info!(id = created.id, "Added TodoItem");
        Ok(created)
    }

    /// Update an item's description
    ///
    /// The whole command is validated like on creation, but `title` and
    /// `category` are not applied: only the description is mutable.
    pub async fn update(
        &self,
        id: TodoItemId,
        cmd: Option<TodoItemCommand>,
    ) -> ApplicationResult<TodoItemDto> {
        info!(%id, "Updating TodoItem");

        let updated = audit("update", self.try_update(id, cmd.as_ref()).await)?;
        info!(%id, "Updated TodoItem");
        Ok(updated)
    }

    /// Remove an item that has at most 50% progress
    pub async fn remove(&self, id: TodoItemId) -> ApplicationResult<()> {
        info!(%id, "Removing TodoItem");

        audit("remove", self.try_remove(id).await)?;
        info!(%id, "Removed TodoItem");
        Ok(())
    }

    /// Register progress on an item and return it as stored
    pub async fn register_progression(
        &self,
        id: TodoItemId,
        cmd: Option<ProgressionCommand>,
    ) -> ApplicationResult<TodoItemDto> {
        let updated = audit(
            "register_progression",
            self.try_register_progression(id, cmd.as_ref()).await,
        )?;
        info!(%id, "Registered progression");
        Ok(updated)
    }

    /// Render the progress report for all items, ordered by ID
    pub async fn print_output(&self) -> ApplicationResult<String> {
        info!("Generating print output for all TodoItems");

        let mut items = audit(
            "print_output",
            self.repository.find_all().await.map_err(Into::into),
        )?;
        items.sort_by_key(|item| item.id());

        let dtos: Vec<TodoItemDto> = items.iter().map(TodoItemDto::from_domain).collect();
        Ok(report::render_items(&dtos))
    }

    // ========================================================================
    // Use case bodies
    // ========================================================================

    async fn try_create(&self, cmd: Option<&TodoItemCommand>) -> ApplicationResult<TodoItemDto> {
        let cmd = self.validate_item_command(cmd).await?;
        info!(title = %cmd.title, category = %cmd.category, "Adding TodoItem");

        let id = self.repository.next_id().await?;
        let item = TodoItem::create(
            id,
            cmd.title.clone(),
            cmd.description.clone(),
            cmd.category.clone(),
        )?;
        self.repository.add(&item).await?;

        let stored = self.load(id).await?;
        Ok(TodoItemDto::from_domain(&stored))
    }

    async fn try_update(
        &self,
        id: TodoItemId,
        cmd: Option<&TodoItemCommand>,
    ) -> ApplicationResult<TodoItemDto> {
        let cmd = self.validate_item_command(cmd).await?;

        let mut item = self.load(id).await?;
        item.update_description(cmd.description.clone())?;
        self.repository.update(&item).await?;

        let stored = self.load(id).await?;
        Ok(TodoItemDto::from_domain(&stored))
    }

    async fn try_remove(&self, id: TodoItemId) -> ApplicationResult<()> {
        let item = self.load(id).await?;

        if !item.can_be_deleted() {
            return Err(ApplicationError::OperationNotAllowed(
                "Cannot remove a TodoItem that has more than 50% progress".to_string(),
            ));
        }

        self.repository.delete(&id).await?;
        Ok(())
    }

    async fn try_register_progression(
        &self,
        id: TodoItemId,
        cmd: Option<&ProgressionCommand>,
    ) -> ApplicationResult<TodoItemDto> {
        let cmd = cmd.ok_or_else(|| {
            ApplicationError::ValidationFailed("Request cannot be null".to_string())
        })?;

        if Progression::validate_percent(cmd.percent).is_err() {
            return Err(ApplicationError::ValidationFailed(
                "Percent must be between 0.1 and 100.0".to_string(),
            ));
        }

        info!(%id, percent = %cmd.percent, date = %cmd.date, "Registering progression");

        let mut item = self.load(id).await?;
        item.add_progression(cmd.date, cmd.percent)?;
        self.repository.update(&item).await?;

        let stored = self.load(id).await?;
        Ok(TodoItemDto::from_domain(&stored))
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn load(&self, id: TodoItemId) -> ApplicationResult<TodoItem> {
        self.repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::TodoItemNotFound(id.to_string()))
    }

    async fn validate_item_command<'a>(
        &self,
        cmd: Option<&'a TodoItemCommand>,
    ) -> ApplicationResult<&'a TodoItemCommand> {
        let cmd = cmd.ok_or_else(|| {
            ApplicationError::ValidationFailed("Request cannot be null".to_string())
        })?;

        if cmd.title.trim().is_empty() {
            return Err(ApplicationError::ValidationFailed(
                "Title is required".to_string(),
            ));
        }

        self.validate_category(&cmd.category).await?;
        Ok(cmd)
    }

    async fn validate_category(&self, category: &str) -> ApplicationResult<()> {
        if category.trim().is_empty() {
            return Err(ApplicationError::ValidationFailed(
                "Category is required".to_string(),
            ));
        }

        if !self.repository.category_exists(category).await? {
            let valid = self.repository.all_categories().await?;
            return Err(ApplicationError::ValidationFailed(format!(
                "Category '{}' is not valid. Valid categories are: {}",
                category,
                valid.join(", ")
            )));
        }

        Ok(())
    }
}

/// Log a failed operation at a level matching its kind, then pass it on
fn audit<T>(operation: &'static str, result: ApplicationResult<T>) -> ApplicationResult<T> {
    if let Err(err) = &result {
        match err {
            ApplicationError::RepositoryError(_) => {
                error!(operation, error = %err, "TodoList operation failed")
            }
            _ => warn!(operation, error = %err, "TodoList operation rejected"),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use todo_domain::errors::{DomainError, DomainResult};
    use todo_domain::repositories::{TodoListReader, TodoListWriter};
    use todo_domain::value_objects::CategoryRegistry;

    /// Repository whose every call fails, to exercise the storage error path
    struct FailingRepository;

    fn storage_failure<T>() -> DomainResult<T> {
        Err(DomainError::StorageFailure {
            reason: "disk on fire".to_string(),
        })
    }

    #[async_trait]
    impl TodoListReader for FailingRepository {
        async fn find_by_id(&self, _id: &TodoItemId) -> DomainResult<Option<TodoItem>> {
            storage_failure()
        }

        async fn find_all(&self) -> DomainResult<Vec<TodoItem>> {
            storage_failure()
        }

        async fn all_categories(&self) -> DomainResult<Vec<String>> {
            storage_failure()
        }

        async fn category_exists(&self, _category: &str) -> DomainResult<bool> {
            storage_failure()
        }
    }

    #[async_trait]
    impl TodoListWriter for FailingRepository {
        async fn add(&self, _item: &TodoItem) -> DomainResult<()> {
            storage_failure()
        }

        async fn update(&self, _item: &TodoItem) -> DomainResult<()> {
            storage_failure()
        }

        async fn delete(&self, _id: &TodoItemId) -> DomainResult<()> {
            storage_failure()
        }

        async fn next_id(&self) -> DomainResult<TodoItemId> {
            storage_failure()
        }
    }

    /// Minimal keyed repository; unordered on purpose
    #[derive(Default)]
    struct MapRepository {
        items: Mutex<HashMap<TodoItemId, TodoItem>>,
        last_id: Mutex<i64>,
        categories: CategoryRegistry,
    }

    #[async_trait]
    impl TodoListReader for MapRepository {
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
    impl TodoListWriter for MapRepository {
        async fn add(&self, item: &TodoItem) -> DomainResult<()> {
            self.items.lock().unwrap().insert(item.id(), item.clone());
            Ok(())
        }

        async fn update(&self, item: &TodoItem) -> DomainResult<()> {
            self.items.lock().unwrap().insert(item.id(), item.clone());
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

    #[tokio::test]
    async fn test_storage_failures_surface_as_repository_errors() {
        let service = TodoListService::new(Arc::new(FailingRepository));

        let result = service.list_all().await;
        assert!(matches!(result, Err(ApplicationError::RepositoryError(_))));

        let result = service.print_output().await;
        assert!(matches!(result, Err(ApplicationError::RepositoryError(_))));

        let result = service
            .create(Some(TodoItemCommand::new("Title", None, "Work")))
            .await;
        assert!(matches!(result, Err(ApplicationError::RepositoryError(_))));
    }

    #[tokio::test]
    async fn test_print_output_sorts_by_id() {
        let service = TodoListService::new(Arc::new(MapRepository::default()));
        for title in ["First", "Second", "Third", "Fourth"] {
            service
                .create(Some(TodoItemCommand::new(title, None, "Work")))
                .await
                .unwrap();
        }

        let output = service.print_output().await.unwrap();
        let headers: Vec<&str> = output.lines().filter(|l| !l.is_empty()).collect();

        assert_eq!(
            headers,
            vec![
                "1) First -  (Work) Completed:False",
                "2) Second -  (Work) Completed:False",
                "3) Third -  (Work) Completed:False",
                "4) Fourth -  (Work) Completed:False",
            ]
        );
    }

    #[tokio::test]
    async fn test_progression_request_percent_checked_before_lookup() {
        let service = TodoListService::new(Arc::new(MapRepository::default()));

        let result = service
            .register_progression(
                TodoItemId::new(99),
                Some(ProgressionCommand {
                    date: chrono::Utc::now(),
                    percent: Decimal::ZERO,
                }),
            )
            .await;

        assert_eq!(
            result,
            Err(ApplicationError::ValidationFailed(
                "Percent must be between 0.1 and 100.0".to_string()
            ))
        );
    }
}
