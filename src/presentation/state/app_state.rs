use std::sync::Arc;

use crate::application::services::{SimplificationService, WordInfoService};
use crate::presentation::access::AccessPolicy;

#[derive(Clone)]
pub struct AppState {
    pub simplification_service: Arc<SimplificationService>,
    pub word_info_service: Arc<WordInfoService>,
    pub access_policy: Arc<AccessPolicy>,
    pub max_upload_bytes: usize,
}
