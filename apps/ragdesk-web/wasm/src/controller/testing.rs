//! In-memory transport and views for exercising controllers natively.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use ragdesk_types::{ChatMessage, Endpoint, Notice, PortalError};
use serde_json::Value;

use crate::transport::Transport;
use crate::view::{ChatView, ResultView};

pub(crate) type Fields = Vec<(String, String)>;

/// Replays scripted replies in order and records every request.
pub(crate) struct MockTransport {
    replies: RefCell<VecDeque<Result<Value, PortalError>>>,
    requests: RefCell<Vec<(Endpoint, Fields)>>,
    on_post: Option<Box<dyn Fn()>>,
    yielding: bool,
}

impl MockTransport {
    pub(crate) fn replying(replies: Vec<Result<Value, PortalError>>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            requests: RefCell::new(Vec::new()),
            on_post: None,
            yielding: false,
        }
    }

    /// Run `hook` when a request is posted, before its reply resolves.
    pub(crate) fn on_post(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_post = Some(Box::new(hook));
        self
    }

    /// Suspend once per request so concurrent submits interleave.
    pub(crate) fn yielding(mut self) -> Self {
        self.yielding = true;
        self
    }

    pub(crate) fn requests(&self) -> Vec<(Endpoint, Fields)> {
        self.requests.borrow().clone()
    }
}

impl Transport for MockTransport {
    type Form = Fields;

    fn form_from_fields(&self, fields: &[(&str, &str)]) -> Result<Fields, PortalError> {
        Ok(fields
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect())
    }

    async fn post(&self, endpoint: Endpoint, form: Fields) -> Result<Value, PortalError> {
        self.requests.borrow_mut().push((endpoint, form));
        if let Some(hook) = &self.on_post {
            hook();
        }
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(PortalError::network("no scripted reply")));
        if self.yielding {
            tokio::task::yield_now().await;
        }
        reply
    }
}

/// Keeps every notice shown, newest last.
#[derive(Default)]
pub(crate) struct RecordingResultView {
    shown: RefCell<Vec<Notice>>,
}

impl RecordingResultView {
    pub(crate) fn shown(&self) -> Vec<Notice> {
        self.shown.borrow().clone()
    }

    /// What the area displays now.
    pub(crate) fn current(&self) -> Option<Notice> {
        self.shown.borrow().last().cloned()
    }
}

impl ResultView for RecordingResultView {
    fn show(&self, notice: &Notice) {
        self.shown.borrow_mut().push(notice.clone());
    }
}

#[derive(Default)]
pub(crate) struct ChatState {
    /// Text typed into the input; the front entry is what the input shows.
    pub(crate) pending: VecDeque<String>,
    pub(crate) index: Option<String>,
    pub(crate) log: Vec<ChatMessage>,
}

pub(crate) struct MockChatView {
    state: Rc<RefCell<ChatState>>,
}

impl MockChatView {
    pub(crate) fn with_question(question: &str) -> Self {
        Self::with_questions(&[question])
    }

    pub(crate) fn with_questions(questions: &[&str]) -> Self {
        let state = ChatState {
            pending: questions.iter().map(|q| q.to_string()).collect(),
            ..ChatState::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub(crate) fn select_index(self, index: &str) -> Self {
        self.state.borrow_mut().index = Some(index.to_string());
        self
    }

    pub(crate) fn type_question(&self, question: &str) {
        self.state.borrow_mut().pending.push_back(question.to_string());
    }

    pub(crate) fn handle(&self) -> Rc<RefCell<ChatState>> {
        Rc::clone(&self.state)
    }

    pub(crate) fn log(&self) -> Vec<ChatMessage> {
        self.state.borrow().log.clone()
    }
}

impl ChatView for MockChatView {
    fn question(&self) -> String {
        self.state
            .borrow()
            .pending
            .front()
            .cloned()
            .unwrap_or_default()
    }

    fn clear_question(&self) {
        self.state.borrow_mut().pending.pop_front();
    }

    fn selected_index(&self) -> Option<String> {
        self.state.borrow().index.clone()
    }

    fn append(&self, message: &ChatMessage) {
        self.state.borrow_mut().log.push(message.clone());
    }
}
