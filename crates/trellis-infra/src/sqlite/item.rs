//! SQLite store for the example item model.
//!
//! Functions take a borrowed connection so they run inside whatever
//! session the caller holds.

use chrono::{DateTime, Utc};
use sqlx::{Row, SqliteConnection};

use trellis_types::error::ItemError;
use trellis_types::item::{DEFAULT_PRIORITY, ExampleItem, NewItem};

struct ItemRow {
    id: i64,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: String,
    priority: i32,
}

impl ItemRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get("created_at")?,
            priority: row.try_get("priority")?,
        })
    }

    fn into_item(self) -> Result<ExampleItem, ItemError> {
        Ok(ExampleItem {
            id: self.id,
            name: self.name,
            description: self.description,
            is_active: self.is_active,
            created_at: parse_datetime(&self.created_at)?,
            priority: self.priority,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, ItemError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ItemError::Storage(format!("invalid datetime '{s}': {e}")))
}

fn storage(e: sqlx::Error) -> ItemError {
    ItemError::Storage(e.to_string())
}

/// Insert a validated item and return it as stored.
pub async fn insert_item(
    conn: &mut SqliteConnection,
    item: &NewItem,
) -> Result<ExampleItem, ItemError> {
    let created_at = Utc::now();
    let is_active = item.is_active.unwrap_or(true);
    let priority = item.priority.unwrap_or(DEFAULT_PRIORITY);

    let result = sqlx::query(
        "INSERT INTO example_items (name, description, is_active, created_at, priority) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&item.name)
    .bind(&item.description)
    .bind(is_active)
    .bind(created_at.to_rfc3339())
    .bind(priority)
    .execute(&mut *conn)
    .await
    .map_err(storage)?;

    Ok(ExampleItem {
        id: result.last_insert_rowid(),
        name: item.name.clone(),
        description: item.description.clone(),
        is_active,
        created_at,
        priority,
    })
}

/// All items, oldest first.
pub async fn list_items(conn: &mut SqliteConnection) -> Result<Vec<ExampleItem>, ItemError> {
    let rows = sqlx::query(
        "SELECT id, name, description, is_active, created_at, priority FROM example_items ORDER BY id",
    )
    .fetch_all(&mut *conn)
    .await
    .map_err(storage)?;

    rows.iter()
        .map(|row| ItemRow::from_row(row).map_err(storage)?.into_item())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::Database;

    fn new_item(name: &str) -> NewItem {
        NewItem {
            name: name.to_string(),
            description: None,
            is_active: None,
            priority: None,
        }
    }

    #[tokio::test]
    async fn test_insert_applies_defaults() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let mut session = db.session().await.unwrap();

        let item = insert_item(&mut session, &new_item("widget")).await.unwrap();
        assert_eq!(item.id, 1);
        assert!(item.is_active);
        assert_eq!(item.priority, DEFAULT_PRIORITY);
        assert!(item.description.is_none());
    }

    #[tokio::test]
    async fn test_list_returns_inserted_items_in_order() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let mut session = db.session().await.unwrap();

        insert_item(&mut session, &new_item("first")).await.unwrap();
        insert_item(
            &mut session,
            &NewItem {
                name: "second".to_string(),
                description: Some("with details".to_string()),
                is_active: Some(false),
                priority: Some(5),
            },
        )
        .await
        .unwrap();

        let items = list_items(&mut session).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "first");
        assert_eq!(items[1].name, "second");
        assert_eq!(items[1].description.as_deref(), Some("with details"));
        assert!(!items[1].is_active);
        assert_eq!(items[1].priority, 5);
    }

    #[tokio::test]
    async fn test_list_empty_table() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let mut session = db.session().await.unwrap();
        assert!(list_items(&mut session).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_table_rejects_oversized_name() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let mut session = db.session().await.unwrap();

        let result = insert_item(&mut session, &new_item(&"n".repeat(101))).await;
        assert!(matches!(result, Err(ItemError::Storage(_))));
    }

    #[tokio::test]
    async fn test_created_at_round_trips() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let mut session = db.session().await.unwrap();

        let inserted = insert_item(&mut session, &new_item("clock")).await.unwrap();
        let listed = list_items(&mut session).await.unwrap();
        assert_eq!(listed[0].created_at, inserted.created_at);
    }
}
