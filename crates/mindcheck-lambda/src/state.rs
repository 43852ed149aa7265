use std::sync::Arc;

use mindcheck_auth::jwt::TokenValidator;
use mindcheck_session::service::SessionService;
use mindcheck_storage::catalog::{QuestionCatalog, S3QuestionCatalog};
use mindcheck_storage::client;
use mindcheck_storage::memory::MemoryStore;
use mindcheck_storage::sessions::{S3SessionStore, SessionStore};

use crate::config::{ApiConfig, StorageBackend};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SessionService>,
    pub tokens: Arc<TokenValidator>,
}

impl AppState {
    pub fn new(service: SessionService, tokens: TokenValidator) -> Self {
        Self {
            service: Arc::new(service),
            tokens: Arc::new(tokens),
        }
    }

    /// Wire the configured storage backend. The S3 client is built once here.
    pub async fn from_config(config: &ApiConfig) -> Self {
        let (catalog, sessions): (Arc<dyn QuestionCatalog>, Arc<dyn SessionStore>) =
            match config.storage {
                StorageBackend::S3 => {
                    let s3 = match &config.region {
                        Some(region) => client::build_client_with_region(region).await,
                        None => client::build_client().await,
                    };
                    (
                        Arc::new(S3QuestionCatalog::new(s3.clone(), &config.bucket)),
                        Arc::new(S3SessionStore::new(s3, &config.bucket)),
                    )
                }
                StorageBackend::Memory => {
                    let store = MemoryStore::new();
                    (Arc::new(store.clone()), Arc::new(store))
                }
            };

        let service = SessionService::new(catalog, sessions, config.safety.clone());
        let tokens = TokenValidator::new(config.jwt_secret.as_bytes(), &config.jwt_issuer);
        Self::new(service, tokens)
    }
}
