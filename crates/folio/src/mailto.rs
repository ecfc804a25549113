//! Mailto handoff: message delivery is delegated to the user's local email
//! client via a generated URI. Fire-and-forget; no delivery confirmation
//! exists.

/// Subject line used by the contact form.
pub const SUBJECT: &str = "Portfolio Contact";

/// Compose the plain-text mail body from the form fields.
pub fn build_body(name: &str, email: &str, message: &str) -> String {
    format!("Name: {name}\nEmail: {email}\n\nMessage:\n{message}")
}

/// Compose the full `mailto:` URL with percent-encoded subject and body.
pub fn build_mailto(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{to}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// Hand the URL to the operating system's default mail handler.
///
/// Returns whether the handoff was dispatched; failure says nothing about
/// delivery, only that no handler could be invoked.
pub fn open(url: &str) -> bool {
    match webbrowser::open(url) {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(%err, "failed to open mail client");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_every_field_literally() {
        let body = build_body("Jane", "j@x.com", "Hi");
        assert!(body.contains("Name: Jane"));
        assert!(body.contains("Email: j@x.com"));
        assert!(body.contains("Hi"));
    }

    #[test]
    fn url_targets_the_recipient_with_encoded_parts() {
        let body = build_body("Jane", "j@x.com", "Hi there");
        let url = build_mailto(folio_content::profile::EMAIL, SUBJECT, &body);
        assert!(url.starts_with("mailto:lylechadya139@gmail.com?subject=Portfolio%20Contact&body="));
        // Raw newlines and spaces never appear in the query string.
        let query = url.split_once('?').unwrap().1;
        assert!(!query.contains('\n'));
        assert!(!query.contains(' '));
    }

    #[test]
    fn encoded_body_decodes_back_verbatim() {
        let body = build_body("Jane", "j@x.com", "Hi\nthere & welcome");
        let url = build_mailto("a@b.c", SUBJECT, &body);
        let encoded = url.rsplit_once("&body=").unwrap().1;
        assert_eq!(urlencoding::decode(encoded).unwrap(), body);
    }
}
