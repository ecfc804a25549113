//! Contact form state and timed indicator logic.
//!
//! Both types are driven by an explicit millisecond clock so their timing
//! behavior is unit-testable without a terminal: the "copied" indicator
//! holds for exactly 2000ms, and the form status returns to idle exactly
//! 3000ms after a success or error transition.

use folio_core::FormStatus;

use crate::mailto;

/// How long the "copied" check mark stays lit, in milliseconds.
pub const COPIED_MS: u64 = 2000;

/// How long a success/error status holds before reverting to idle.
pub const STATUS_RESET_MS: u64 = 3000;

/// Timed "copied" indicator for a copy-to-clipboard control.
#[derive(Debug, Default)]
pub struct CopyIndicator {
    copied_until_ms: Option<u64>,
}

impl CopyIndicator {
    /// Light the indicator for [`COPIED_MS`] from `now_ms`.
    pub fn mark(&mut self, now_ms: u64) {
        self.copied_until_ms = Some(now_ms + COPIED_MS);
    }

    /// Whether the indicator is currently lit.
    pub fn is_copied(&self, now_ms: u64) -> bool {
        self.copied_until_ms.is_some_and(|until| now_ms < until)
    }
}

/// The focusable fields of the contact form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Name,
    Email,
    Message,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "NAME",
            Field::Email => "EMAIL",
            Field::Message => "MESSAGE",
        }
    }
}

/// Contact form: three text fields and a submission state machine.
///
/// Submitting builds the mailto URL and moves to Loading; the app performs
/// the actual handoff and reports back via [`finish`], which holds Success
/// or Error for [`STATUS_RESET_MS`] before [`tick`] restores Idle.
///
/// [`finish`]: ContactForm::finish
/// [`tick`]: ContactForm::tick
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: Field,
    pub editing: bool,
    status: FormStatus,
    reset_at_ms: Option<u64>,
}

impl ContactForm {
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Begin submission: build the mailto URL and enter Loading.
    ///
    /// Returns `None` while a previous submission is still in flight.
    pub fn submit(&mut self, _now_ms: u64) -> Option<String> {
        if self.status == FormStatus::Loading {
            return None;
        }
        self.status = FormStatus::Loading;
        self.reset_at_ms = None;
        let body = mailto::build_body(&self.name, &self.email, &self.message);
        Some(mailto::build_mailto(
            folio_content::profile::EMAIL,
            mailto::SUBJECT,
            &body,
        ))
    }

    /// Record the handoff outcome. Success clears the fields; both outcomes
    /// revert to idle after [`STATUS_RESET_MS`].
    pub fn finish(&mut self, now_ms: u64, dispatched: bool) {
        if dispatched {
            self.status = FormStatus::Success;
            self.name.clear();
            self.email.clear();
            self.message.clear();
        } else {
            self.status = FormStatus::Error;
        }
        self.reset_at_ms = Some(now_ms + STATUS_RESET_MS);
    }

    /// Restore idle once the status hold expires.
    pub fn tick(&mut self, now_ms: u64) {
        if let Some(reset_at) = self.reset_at_ms
            && now_ms >= reset_at
        {
            self.status = FormStatus::Idle;
            self.reset_at_ms = None;
        }
    }

    /// Append a character to the focused field.
    pub fn input(&mut self, ch: char) {
        self.field_mut().push(ch);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.field_mut().pop();
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copied_indicator_holds_for_exactly_two_seconds() {
        let mut copied = CopyIndicator::default();
        assert!(!copied.is_copied(0));
        copied.mark(100);
        assert!(copied.is_copied(100));
        assert!(copied.is_copied(2099));
        assert!(!copied.is_copied(2100));
    }

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Jane".into(),
            email: "j@x.com".into(),
            message: "Hi".into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn submit_builds_the_mail_url_from_the_fields() {
        let mut form = filled_form();
        let url = form.submit(0).unwrap();
        assert_eq!(form.status(), FormStatus::Loading);
        let body = urlencoding::decode(url.rsplit_once("&body=").unwrap().1)
            .unwrap()
            .into_owned();
        assert!(body.contains("Name: Jane"));
        assert!(body.contains("Email: j@x.com"));
        assert!(body.contains("Hi"));
    }

    #[test]
    fn status_walks_idle_loading_success_idle() {
        let mut form = filled_form();
        assert_eq!(form.status(), FormStatus::Idle);
        form.submit(0);
        assert_eq!(form.status(), FormStatus::Loading);
        form.finish(50, true);
        assert_eq!(form.status(), FormStatus::Success);
        form.tick(3049);
        assert_eq!(form.status(), FormStatus::Success);
        // Idle restored 3000ms after the transition.
        form.tick(3050);
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn success_clears_the_fields_but_error_keeps_them() {
        let mut form = filled_form();
        form.submit(0);
        form.finish(0, true);
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());

        let mut form = filled_form();
        form.submit(0);
        form.finish(0, false);
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.name, "Jane");
        form.tick(3000);
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn resubmit_is_refused_while_loading() {
        let mut form = filled_form();
        assert!(form.submit(0).is_some());
        assert!(form.submit(1).is_none());
    }

    #[test]
    fn input_edits_the_focused_field() {
        let mut form = ContactForm::default();
        form.input('J');
        form.input('o');
        form.backspace();
        assert_eq!(form.name, "J");
        form.focus = form.focus.next();
        form.input('x');
        assert_eq!(form.email, "x");
        assert_eq!(Field::Message.next(), Field::Name);
        assert_eq!(Field::Name.prev(), Field::Message);
    }
}
