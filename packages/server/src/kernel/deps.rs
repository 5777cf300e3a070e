//! Server dependencies for workflow actions (using traits for testability)
//!
//! This is the central dependency container handed into every action. The
//! primary Postgres pool is used directly; the real-time mirror store goes
//! through the `BaseMirrorStore` trait so tests can swap in an in-memory
//! fake.

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::Config;
use crate::domains::messaging::MessageReplicator;
use crate::kernel::{BaseMirrorStore, FirebaseRtdbClient};

/// Server dependencies accessible to workflow actions
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    pub replicator: MessageReplicator,
}

impl ServerDeps {
    /// Build production dependencies from config.
    pub fn new(db_pool: PgPool, config: &Config) -> Self {
        let mirror: Arc<dyn BaseMirrorStore> = Arc::new(FirebaseRtdbClient::new(
            config.firebase_database_url.clone(),
            config.firebase_auth_token.clone(),
        ));
        Self {
            db_pool,
            replicator: MessageReplicator::new(mirror),
        }
    }

    /// Build dependencies with an explicit mirror store (tests).
    pub fn with_mirror(db_pool: PgPool, mirror: Arc<dyn BaseMirrorStore>) -> Self {
        Self {
            db_pool,
            replicator: MessageReplicator::new(mirror),
        }
    }
}
