use std::sync::Arc;

use crate::{
    application::use_cases::identity::IdTokenVerifier,
    infra::config::AppConfig,
    use_cases::contacts::ContactUseCases,
    use_cases::waitlist::WaitlistUseCases,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub waitlist_use_cases: Arc<WaitlistUseCases>,
    pub contact_use_cases: Arc<ContactUseCases>,
    pub identity_verifier: Arc<dyn IdTokenVerifier>,
}
