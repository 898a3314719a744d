use std::rc::Rc;

use ragdesk_types::page::{INDEX_NAME_FIELD, QUESTION_FIELD};
use ragdesk_types::{ChatMessage, Endpoint, Outcome};

use crate::transport::Transport;
use crate::view::ChatView;

/// Submit handler for the chat form.
pub struct ChatController<T, V> {
    transport: Rc<T>,
    view: V,
}

impl<T: Transport, V: ChatView> ChatController<T, V> {
    pub fn new(transport: Rc<T>, view: V) -> Self {
        Self { transport, view }
    }

    /// Echo the question, ask the server, append its reply.
    ///
    /// Blank questions are ignored. Returns the bot reply that was appended.
    pub async fn submit(&self) -> Option<ChatMessage> {
        let question = self.view.question().trim().to_string();
        if question.is_empty() {
            return None;
        }

        self.view.append(&ChatMessage::user(question.as_str()));
        self.view.clear_question();

        let index_name = self.view.selected_index();
        let mut fields = vec![(QUESTION_FIELD, question.as_str())];
        if let Some(index_name) = index_name.as_deref() {
            fields.push((INDEX_NAME_FIELD, index_name));
        }
        tracing::debug!(index = ?index_name, "asking question");

        let result = match self.transport.form_from_fields(&fields) {
            Ok(form) => self.transport.post(Endpoint::Query, form).await,
            Err(err) => Err(err),
        };

        let reply = Outcome::from_result(Endpoint::Query, result).into_chat_reply();
        self.view.append(&reply);
        Some(reply)
    }
}
