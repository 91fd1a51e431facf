use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use uuid::Uuid;

/// The product waitlist a signup belongs to. Each collection is keyed
/// independently: the same email may appear once per collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum WaitlistCollection {
    GistAnswers,
    AskAnything,
}

impl WaitlistCollection {
    /// Human-readable product name, used in confirmation emails.
    pub fn product_name(&self) -> &'static str {
        match self {
            WaitlistCollection::GistAnswers => "Gist Answers",
            WaitlistCollection::AskAnything => "Ask Anything",
        }
    }

    /// Public site for the product, linked from the email footer.
    pub fn site_url(&self) -> &'static str {
        match self {
            WaitlistCollection::GistAnswers => "https://www.gistanswers.ai",
            WaitlistCollection::AskAnything => "https://www.getaskanything.com",
        }
    }
}

/// How a signup reached the waitlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupSource {
    /// Email entered into the signup modal by hand.
    Form,
    /// Verified identity handed to us after a Google sign-in completed.
    GoogleOauth,
}

impl SignupSource {
    pub fn is_oauth(&self) -> bool {
        matches!(self, SignupSource::GoogleOauth)
    }

    /// Label used in the chat notification.
    pub fn label(&self) -> &'static str {
        match self {
            SignupSource::Form => "Manual Form",
            SignupSource::GoogleOauth => "OAuth Google",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub collection: WaitlistCollection,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub is_oauth: bool,
    pub created_at: NaiveDateTime,
}
