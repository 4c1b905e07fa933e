use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Per-test environment holding a private in-memory SQLite database.
///
/// Every context owns its own database, so tests never observe each other's rows. Keep the
/// context alive for as long as the connection (or clones of it) is in use.
pub struct TestContext {
    /// Connection to the in-memory database, opened on the first `database()` call.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a context without opening a connection yet.
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the connection, opening `sqlite::memory:` if none is open yet.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Open connection
    /// - `Err(TestError::Database)` - SQLite could not be opened
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        let db = match self.db.take() {
            Some(db) => db,
            None => Database::connect("sqlite::memory:").await?,
        };

        Ok(&*self.db.insert(db))
    }

    /// Runs the given CREATE TABLE statements in order.
    ///
    /// Referenced tables must come before the tables holding foreign keys to them.
    /// `TestBuilder::build()` calls this with the tables it collected.
    ///
    /// # Returns
    /// - `Ok(())` - Every table exists
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
