use chrono::{Datelike, Utc};
use url::Url;

use crate::domain::entities::waitlist::WaitlistCollection;

const COMPANY_NAME: &str = "ProRata";
const SUPPORT_EMAIL: &str = "hello@prorata.ai";
const HEADER_GRADIENT: &str = "linear-gradient(135deg, #FFAF07 0%, #926DD7 100%)";
const ACCENT_COLOR: &str = "#926DD7";

/// Display label for a site link, e.g. "www.gistanswers.ai".
fn site_label(site_url: &str) -> String {
    Url::parse(site_url)
        .ok()
        .and_then(|url| url.host_str().map(|host| host.to_string()))
        .unwrap_or_else(|| site_url.to_string())
}

fn section_heading(text: &str) -> String {
    format!(
        r#"<h2 style="color: {ACCENT_COLOR}; font-size: 24px; margin-top: 30px; margin-bottom: 15px;">{text}</h2>"#
    )
}

fn product_blurb(collection: WaitlistCollection) -> &'static str {
    match collection {
        WaitlistCollection::GistAnswers => {
            "Gist Answers is a customizable AI search engine that keeps visitors on your site \
             with instant, accurate answers. It's powered by your content and enhanced by a \
             licensed library of 700+ trusted publications."
        }
        WaitlistCollection::AskAnything => {
            "Ask Anything lets your audience ask natural-language questions and get instant, \
             cited answers drawn from content you trust."
        }
    }
}

/// Confirmation email sent after a successful waitlist signup. Returns
/// `(subject, html_body)`.
pub fn waitlist_confirmation_email(collection: WaitlistCollection) -> (String, String) {
    let product = collection.product_name();
    let site_url = collection.site_url();
    let subject = format!("You're on the {product} waitlist! 🎉");

    let whats_next = section_heading("What's Next?");
    let what_is = section_heading(&format!("What is {product}?"));
    let questions = section_heading("Questions?");
    let blurb = product_blurb(collection);
    let year = Utc::now().year();
    let site_text = site_label(site_url);

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">

  <div style="background: {HEADER_GRADIENT}; padding: 40px 20px; text-align: center; border-radius: 12px 12px 0 0;">
    <h1 style="color: white; margin: 0; font-size: 32px; font-weight: 600;">Welcome to {product}!</h1>
  </div>

  <div style="background: #ffffff; padding: 40px 30px; border-radius: 0 0 12px 12px; box-shadow: 0 2px 4px rgba(0,0,0,0.1);">

    <p style="font-size: 16px; margin-bottom: 20px;">
      Thanks for joining the waitlist. You're one step closer to transforming how visitors engage with your content.
    </p>

    {whats_next}

    <p style="font-size: 16px; margin-bottom: 15px;">
      We're working hard to bring {product} to more publishers. Here's what you can expect:
    </p>

    <ul style="font-size: 16px; line-height: 1.8; margin-bottom: 25px;">
      <li><strong>Early Access:</strong> You'll be among the first to know when we're ready for new partners</li>
      <li><strong>Custom Demo:</strong> See how {product} works with your specific content</li>
      <li><strong>Exclusive Updates:</strong> Get insights on AI search and visitor engagement</li>
    </ul>

    {what_is}

    <p style="font-size: 16px; margin-bottom: 25px;">
      {blurb}
    </p>

    {questions}

    <p style="font-size: 16px; margin-bottom: 30px;">
      Reply to this email or reach out to us at <a href="mailto:{SUPPORT_EMAIL}" style="color: {ACCENT_COLOR}; text-decoration: none;">{SUPPORT_EMAIL}</a>.
    </p>

    <p style="font-size: 16px; margin-bottom: 5px;">
      We'll be in touch soon!
    </p>

    <p style="font-size: 16px; font-weight: 600; color: {ACCENT_COLOR};">
      The {COMPANY_NAME} Team
    </p>

  </div>

  <div style="text-align: center; padding: 20px; color: #999; font-size: 12px;">
    <p style="margin: 5px 0;">© {year} {COMPANY_NAME}. All rights reserved.</p>
    <p style="margin: 5px 0;">
      <a href="{site_url}" style="color: {ACCENT_COLOR}; text-decoration: none;">Visit {site_text}</a>
    </p>
  </div>

</body>
</html>
"#
    );

    (subject, html)
}
