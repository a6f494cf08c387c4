use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::applications::ledger::ApplicationLedger;
use crate::generation::composer::ResumeComposer;
use crate::jobs::catalog::JobCatalog;
use crate::llm_client::TextGenerator;
use crate::profile::repository::ProfileStore;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub profiles: ProfileStore,
    pub catalog: JobCatalog,
    pub ledger: ApplicationLedger,
    pub composer: ResumeComposer,
    /// Cancelled on shutdown; in-flight generation gives up when it fires.
    pub shutdown: CancellationToken,
}

impl AppState {
    /// All repositories share one document store.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        generator: Arc<dyn TextGenerator>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            profiles: ProfileStore::new(store.clone()),
            catalog: JobCatalog::new(store.clone()),
            ledger: ApplicationLedger::new(store),
            composer: ResumeComposer::new(generator),
            shutdown,
        }
    }
}
