use std::rc::Rc;

use ragdesk_types::{AdminForm, Notice, Outcome, PortalError};

use crate::transport::Transport;
use crate::view::ResultView;

/// Submit handler for one of the admin forms (upload or query).
pub struct AdminFormController<T, V> {
    form: AdminForm,
    transport: Rc<T>,
    view: V,
}

impl<T: Transport, V: ResultView> AdminFormController<T, V> {
    pub fn new(form: AdminForm, transport: Rc<T>, view: V) -> Self {
        Self {
            form,
            transport,
            view,
        }
    }

    /// Post the collected form and render whatever comes back.
    pub async fn submit(&self, payload: T::Form) -> Notice {
        let endpoint = self.form.endpoint();
        let result = self.transport.post(endpoint, payload).await;
        let outcome = Outcome::from_result(endpoint, result);
        tracing::info!(form = ?self.form, success = outcome.is_success(), "admin form settled");
        self.render(outcome)
    }

    /// Render a failure that happened before any request was sent.
    pub fn reject(&self, err: PortalError) -> Notice {
        tracing::warn!(form = ?self.form, error = %err, "could not collect form");
        self.render(Outcome::Malformed(err))
    }

    fn render(&self, outcome: Outcome) -> Notice {
        let notice = outcome.into_notice(self.form);
        self.view.show(&notice);
        notice
    }
}
