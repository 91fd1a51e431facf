use crate::{
    adapters::{
        email::resend::ResendEmailSender, http::app_state::AppState,
        identity::google::GoogleTokenVerifier, notify::slack::SlackAnnouncer,
    },
    application::use_cases::identity::IdTokenVerifier,
    infra::{config::AppConfig, http_client::build_client, postgres_persistence},
    use_cases::{
        contacts::{ContactRepo, ContactUseCases},
        notifications::SignupNotifier,
        waitlist::{WaitlistRepo, WaitlistUseCases},
    },
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let postgres_arc = Arc::new(postgres_persistence(&config.database_url).await?);

    let client = build_client();

    let email = Arc::new(ResendEmailSender::new(
        client.clone(),
        config.resend_api_key.clone(),
        config.email_from.clone(),
    ));
    let announcer = Arc::new(SlackAnnouncer::new(
        client.clone(),
        config.slack_webhook_url.clone(),
    ));
    let notifier = SignupNotifier::new(email, announcer);

    let waitlist_use_cases =
        WaitlistUseCases::new(postgres_arc.clone() as Arc<dyn WaitlistRepo>, notifier);
    let contact_use_cases = ContactUseCases::new(postgres_arc.clone() as Arc<dyn ContactRepo>);

    let identity_verifier: Arc<dyn IdTokenVerifier> = Arc::new(GoogleTokenVerifier::new(
        client,
        config.google_client_id.clone(),
    ));

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
        contact_use_cases: Arc::new(contact_use_cases),
        identity_verifier,
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gistanswers_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs)
    let file = File::create("app.log").expect("cannot create log file");
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
