use anyhow::{Context, Result};

use crate::models::{Item, ItemInput};
use crate::store::{StoreConnection, on_connection};

const SELECT_ALL: &str = "SELECT id, name, is_complete FROM items ORDER BY id";
const SELECT_ONE: &str = "SELECT id, name, is_complete FROM items WHERE id = ?";
const INSERT: &str = "INSERT INTO items (name, is_complete) VALUES (?, ?)";
const UPDATE: &str = "UPDATE items SET name = ?, is_complete = ? WHERE id = ?";
const DELETE: &str = "DELETE FROM items WHERE id = ?";

/// CRUD operations on the `items` table over one borrowed connection
///
/// Store failures are propagated as-is; nothing here retries.
pub struct ItemRepository<'c> {
    conn: &'c mut StoreConnection,
}

impl<'c> ItemRepository<'c> {
    pub fn new(conn: &'c mut StoreConnection) -> Self {
        Self { conn }
    }

    /// Every item currently stored, no pagination
    pub async fn list(&mut self) -> Result<Vec<Item>> {
        let items = on_connection!(&mut *self.conn, c => {
            sqlx::query_as::<_, Item>(SELECT_ALL).fetch_all(&mut **c).await
        })
        .context("Failed to list items")?;

        tracing::debug!("Listed {} items", items.len());
        Ok(items)
    }

    /// Read one item by id
    ///
    /// # Returns
    /// * `Ok(Some(item))` - Item found
    /// * `Ok(None)` - No row with that id
    /// * `Err(_)` - Query failed
    pub async fn get(&mut self, id: i64) -> Result<Option<Item>> {
        let item = on_connection!(&mut *self.conn, c => {
            sqlx::query_as::<_, Item>(SELECT_ONE)
                .bind(id)
                .fetch_optional(&mut **c)
                .await
        })
        .context("Failed to read item")?;

        Ok(item)
    }

    /// Insert a new item and return it with its store-assigned id
    pub async fn create(&mut self, input: ItemInput) -> Result<Item> {
        let id = match &mut *self.conn {
            StoreConnection::Sqlite(c) => sqlx::query(INSERT)
                .bind(&input.name)
                .bind(input.is_complete)
                .execute(&mut **c)
                .await
                .map(|result| result.last_insert_rowid()),
            StoreConnection::MySql(c) => sqlx::query(INSERT)
                .bind(&input.name)
                .bind(input.is_complete)
                .execute(&mut **c)
                .await
                .map(|result| result.last_insert_id() as i64),
        }
        .context("Failed to insert item")?;

        tracing::debug!("Inserted item with id: {}", id);
        Ok(Item {
            id,
            name: input.name,
            is_complete: input.is_complete,
        })
    }

    /// Overwrite name and completion flag of an existing item
    ///
    /// Returns `Ok(None)` without touching the table when `id` is unknown.
    pub async fn update(&mut self, id: i64, input: ItemInput) -> Result<Option<Item>> {
        // Looked up first: MySQL counts an UPDATE that changes nothing as zero affected rows.
        if self.get(id).await?.is_none() {
            return Ok(None);
        }

        let updated = on_connection!(&mut *self.conn, c => {
            sqlx::query(UPDATE)
                .bind(&input.name)
                .bind(input.is_complete)
                .bind(id)
                .execute(&mut **c)
                .await
                .map(drop)
        });
        updated.context("Failed to update item")?;

        Ok(Some(Item {
            id,
            name: input.name,
            is_complete: input.is_complete,
        }))
    }

    /// Remove an item permanently, returning whether a row existed
    pub async fn delete(&mut self, id: i64) -> Result<bool> {
        let rows_affected = on_connection!(&mut *self.conn, c => {
            sqlx::query(DELETE)
                .bind(id)
                .execute(&mut **c)
                .await
                .map(|result| result.rows_affected())
        })
        .context("Failed to delete item")?;

        Ok(rows_affected > 0)
    }
}
