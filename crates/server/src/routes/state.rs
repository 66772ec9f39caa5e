use sea_orm::DatabaseConnection;

/// Shared handler state. The connection is a pool; each request checks out
/// what it needs for the duration of its service call.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}
