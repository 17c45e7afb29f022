use sea_orm::DatabaseConnection;

/// State shared by every request handler
///
/// The connection is a pool handle, cloning it is cheap.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
