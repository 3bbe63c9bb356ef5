use std::future::Future;

use api::{Delivery, FormFields, FormRelay};

use crate::i18n::{t, Lang};
use crate::view::{Selector, View};

/// How long the status message stays up once a submission resolves.
pub const STATUS_DISPLAY_MS: u32 = 5_000;

pub const SUCCESS_CLASS: &str = "text-green-500";
pub const FAILURE_CLASS: &str = "text-red-500";

const STATUS_ID: &str = "result";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// The contact form's submission state machine.
///
/// Overlapping submissions are not deduplicated: each one runs its own
/// begin / resolve / expire sequence against the same status element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    state: SubmissionState,
    in_flight: u32,
}

impl ContactForm {
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }

    /// Capture the fields and show the "please wait" status. Returns the payload to send.
    pub fn begin(&mut self, view: &mut impl View, lang: Lang) -> FormFields {
        let fields = collect_fields(view);
        if let Some(status) = view.query(Selector::Id(STATUS_ID)) {
            view.remove_style(status, "display");
            view.set_text(status, &t(lang, "contact.status.wait"));
        }
        self.state = SubmissionState::Submitting;
        self.in_flight += 1;
        tracing::debug!(
            "contact.begin: fields={} in_flight={}",
            fields.len(),
            self.in_flight
        );
        fields
    }

    /// Show the outcome and reset the form.
    pub fn resolve(&mut self, view: &mut impl View, lang: Lang, delivery: &Delivery) {
        let status = view.query(Selector::Id(STATUS_ID));
        match delivery {
            Delivery::Sent(_) => {
                tracing::info!("contact.resolve: sent");
                if let Some(status) = status {
                    view.set_text(status, &t(lang, "contact.status.sent"));
                    view.set_class(status, FAILURE_CLASS, false);
                    view.set_class(status, SUCCESS_CLASS, true);
                }
                self.state = SubmissionState::Succeeded;
            }
            Delivery::Rejected(reply) => {
                tracing::warn!(
                    "contact.resolve: relay rejected status={} message={:?} body={}",
                    reply.status,
                    reply.message(),
                    reply.body
                );
                if let Some(status) = status {
                    view.set_text(status, &t(lang, "contact.status.error"));
                    view.set_class(status, SUCCESS_CLASS, false);
                    view.set_class(status, FAILURE_CLASS, true);
                }
                self.state = SubmissionState::Failed;
            }
            Delivery::Broken(err) => {
                tracing::error!("contact.resolve: {err}");
                if let Some(status) = status {
                    view.set_text(status, &t(lang, "contact.status.broken"));
                }
                self.state = SubmissionState::Failed;
            }
        }
        reset_fields(view);
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.in_flight > 0 {
            self.state = SubmissionState::Submitting;
        }
    }

    /// The display window elapsed: hide the status.
    pub fn expire(&mut self, view: &mut impl View) {
        if let Some(status) = view.query(Selector::Id(STATUS_ID)) {
            view.set_style(status, "display", "none");
        }
        if self.in_flight == 0 {
            self.state = SubmissionState::Idle;
        }
    }
}

/// A point in a submission's life after `begin`.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Resolved(Delivery),
    Expired,
}

/// Send `fields`, report the outcome, hold it for the display window, then report expiry.
///
/// `sleep` supplies the timer so the sequence runs the same under a browser or a test.
pub async fn finish<R, S, Fut>(relay: &R, fields: &FormFields, sleep: S, mut step: impl FnMut(Step))
where
    R: FormRelay + ?Sized,
    S: FnOnce(u32) -> Fut,
    Fut: Future<Output = ()>,
{
    let delivery = Delivery::from(relay.submit(fields).await);
    step(Step::Resolved(delivery));
    sleep(STATUS_DISPLAY_MS).await;
    step(Step::Expired);
}

/// Every named field's current value, in document order.
pub fn collect_fields(view: &impl View) -> FormFields {
    view.query_all(Selector::Attrs(&["name"]))
        .into_iter()
        .filter_map(|field| {
            let name = view.attr(field, "name")?;
            let value = view.attr(field, "value").unwrap_or_default();
            Some((name.to_string(), value.to_string()))
        })
        .collect()
}

/// Put every named field back to its declared default.
pub fn reset_fields(view: &mut impl View) {
    for field in view.query_all(Selector::Attrs(&["name"])) {
        let default = view.attr(field, "data-default").unwrap_or_default().to_string();
        view.set_attr(field, "value", &default);
    }
}
