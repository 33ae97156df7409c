use seatwatch_infra::IBrowserSession;

/// Phrases that the ticketing site's anti-automation interstitials show
/// instead of the seating UI.
const BLOCK_PHRASES: &[&str] = &[
    "you have been blocked",
    "you have been banned",
    "access denied",
    "access to this page has been denied",
    "pardon our interruption",
    "verify you are a human",
];

/// Best-effort detection of a block page. Never fails: when the page text
/// cannot be read at all this reports "not blocked", so an unrelated page
/// error cannot trip the sweep-wide circuit breaker.
pub async fn is_blocked(session: &dyn IBrowserSession) -> bool {
    let text = match session.visible_text().await {
        Ok(text) => text,
        Err(_) => return false,
    };
    let text = text.to_lowercase();
    BLOCK_PHRASES.iter().any(|phrase| text.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeBrowser, FakePage};
    use seatwatch_infra::IBrowserGateway;

    async fn session_with_body(body: &str) -> Box<dyn IBrowserSession> {
        let browser = FakeBrowser::default();
        browser.insert_page(
            "https://example.com/seats",
            FakePage {
                body_text: body.to_string(),
                ..Default::default()
            },
        );
        let session = browser.open_session().await.unwrap();
        session.navigate("https://example.com/seats").await.unwrap();
        session
    }

    #[tokio::test]
    async fn detects_block_page_text() {
        let session = session_with_body("Pardon Our Interruption. Access to this page has been denied.").await;
        assert!(is_blocked(session.as_ref()).await);
    }

    #[tokio::test]
    async fn regular_seating_page_is_not_blocked() {
        let session = session_with_body("Select your seats for tonight's showing").await;
        assert!(!is_blocked(session.as_ref()).await);
    }

    #[tokio::test]
    async fn unreadable_page_is_not_blocked() {
        // No navigation happened, so there is no page text to read.
        let browser = FakeBrowser::default();
        let session = browser.open_session().await.unwrap();
        assert!(!is_blocked(session.as_ref()).await);
    }
}
