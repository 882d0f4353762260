//! Todo repository
//!
//! Every operation is a single statement on the borrowed connection, so the
//! caller's transaction scope is the only session state.

use sqlx::{FromRow, SqliteConnection};

/// Todo record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub done: bool,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} not found")]
    NotFound { resource: &'static str },
}

impl DbError {
    fn todo_not_found() -> Self {
        Self::NotFound { resource: "Todo" }
    }
}

/// Todo repository over a request-scoped connection
pub struct TodoRepo<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> TodoRepo<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Insert a new todo and return the stored record with its assigned id.
    pub async fn create(&mut self, title: &str, done: bool) -> Result<Todo, DbError> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (title, done)
            VALUES (?1, ?2)
            RETURNING id, title, done
            "#,
        )
        .bind(title)
        .bind(done)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(todo)
    }

    /// List every todo in storage-native (rowid) order.
    pub async fn list(&mut self) -> Result<Vec<Todo>, DbError> {
        let todos = sqlx::query_as::<_, Todo>("SELECT id, title, done FROM todos")
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(todos)
    }

    /// Overwrite every field of the todo with `id`.
    ///
    /// Returns the updated record, or NotFound if `id` matches no row.
    pub async fn update(&mut self, id: i64, title: &str, done: bool) -> Result<Todo, DbError> {
        sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET title = ?1, done = ?2
            WHERE id = ?3
            RETURNING id, title, done
            "#,
        )
        .bind(title)
        .bind(done)
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(DbError::todo_not_found)
    }

    /// Remove the todo with `id` permanently.
    ///
    /// Returns NotFound if `id` matches no row.
    pub async fn delete(&mut self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::todo_not_found());
        }

        Ok(())
    }
}
