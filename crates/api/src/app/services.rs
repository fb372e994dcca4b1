use std::sync::Arc;

use stockdesk_infra::{InMemoryProductStore, PostgresProductStore, ProductStore};

/// Shared request-handler state: the product store behind its trait seam.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn ProductStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn ProductStore {
        self.store.as_ref()
    }
}

pub async fn build_services() -> AppServices {
    let use_persistent = std::env::var("USE_PERSISTENT_STORE")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if use_persistent {
        return build_persistent_services().await;
    }

    build_in_memory_services()
}

fn build_in_memory_services() -> AppServices {
    // In-memory store (dev/test): state lives for the process only.
    AppServices::new(Arc::new(InMemoryProductStore::new()))
}

async fn build_persistent_services() -> AppServices {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set when USE_PERSISTENT_STORE=true");

    let store = PostgresProductStore::connect(&database_url)
        .await
        .expect("failed to connect to Postgres");

    AppServices::new(Arc::new(store))
}
