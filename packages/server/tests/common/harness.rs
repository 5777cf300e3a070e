//! Test harness with testcontainers for integration testing.
//!
//! A single Postgres container is shared across all tests; migrations run
//! once on first use. Each test connects its own pool and gets a fresh
//! in-memory mirror store.

use anyhow::{Context, Result};
use sqlx::PgPool;
use std::sync::Arc;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

use recruit_core::kernel::{InMemoryMirrorStore, ServerDeps};

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    db_url: String,
    // Keep the container alive for the entire test run.
    // None when TEST_DATABASE_URL points at an externally managed Postgres.
    _postgres: Option<ContainerAsync<Postgres>>,
}

/// Global shared infrastructure - initialized once, reused by all tests.
static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Respect RUST_LOG; try_init avoids panicking if already installed.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        // TEST_DATABASE_URL bypasses testcontainers for environments
        // without a Docker daemon but with a local Postgres.
        let (db_url, postgres) = match std::env::var("TEST_DATABASE_URL") {
            Ok(url) => (url, None),
            Err(_) => {
                let postgres = Postgres::default()
                    .with_tag("16")
                    .with_cmd(["-c", "max_connections=200"])
                    .start()
                    .await
                    .context("Failed to start Postgres container")?;

                let pg_host = postgres.get_host().await?;
                let pg_port = postgres.get_host_port_ipv4(5432).await?;
                let db_url = format!(
                    "postgresql://postgres:postgres@{}:{}/postgres",
                    pg_host, pg_port
                );
                (db_url, Some(postgres))
            }
        };

        let pool = PgPool::connect(&db_url)
            .await
            .context("Failed to connect to Postgres for migrations")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self {
            db_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Per-test context: shared database, fresh mirror store.
pub struct TestHarness {
    pub db_pool: PgPool,
    pub mirror: InMemoryMirrorStore,
    pub deps: ServerDeps,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        let infra = SharedTestInfra::get().await;
        let db_pool = PgPool::connect(&infra.db_url)
            .await
            .expect("Failed to connect to shared test database");
        let mirror = InMemoryMirrorStore::new();
        let deps = ServerDeps::with_mirror(db_pool.clone(), Arc::new(mirror.clone()));
        Self {
            db_pool,
            mirror,
            deps,
        }
    }

    async fn teardown(self) {
        self.db_pool.close().await;
    }
}
