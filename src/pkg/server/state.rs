use std::sync::Arc;

use tokio::sync::{mpsc::UnboundedSender, RwLock};

use crate::{
    conf::settings,
    pkg::internal::{
        auth::{CredentialVerifier, SessionStore, SharedSecretVerifier},
        notify::{spawn_dispatcher, NotifyEvent},
        store::{ContentStore, Shadow},
    },
    prelude::Result,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<ContentStore>>,
    pub sessions: Arc<SessionStore>,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub notifier: UnboundedSender<NotifyEvent>,
    pub http: Arc<reqwest::Client>,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        let store = ContentStore::load(Shadow::new(&settings.data_dir)).await;
        Ok(AppState {
            store: Arc::new(RwLock::new(store)),
            sessions: Arc::new(SessionStore::new(settings.session_ttl_minutes)),
            verifier: Arc::new(SharedSecretVerifier::new(settings.admin_secret.clone())),
            notifier: spawn_dispatcher(),
            http: Arc::new(reqwest::Client::new()),
        })
    }
}
