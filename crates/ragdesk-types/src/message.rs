//! What the pages render: result-area notices and chat log entries.

/// Visual tone of a result-area notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Answer,
    Error,
}

/// A single outcome message in an admin result area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub tone: NoticeTone,
    pub text: String,
    /// Secondary line, e.g. the index an upload created.
    pub detail: Option<String>,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeTone::Success, text)
    }

    pub fn answer(text: impl Into<String>) -> Self {
        Self::new(NoticeTone::Answer, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeTone::Error, text)
    }

    fn new(tone: NoticeTone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// CSS class for the notice paragraph. Answers are unstyled.
    pub fn css_class(&self) -> Option<&'static str> {
        match self.tone {
            NoticeTone::Success => Some("success"),
            NoticeTone::Error => Some("error"),
            NoticeTone::Answer => None,
        }
    }

    /// Bold label rendered ahead of the text.
    pub fn label(&self) -> Option<&'static str> {
        match self.tone {
            NoticeTone::Answer => Some("Answer:"),
            _ => None,
        }
    }

    pub fn detail_label(&self) -> &'static str {
        match self.tone {
            NoticeTone::Answer => "Index used:",
            _ => "Index:",
        }
    }

    pub fn is_error(&self) -> bool {
        self.tone == NoticeTone::Error
    }
}

/// Author of a chat log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Bot,
}

impl ChatRole {
    pub fn css_class(self) -> &'static str {
        match self {
            ChatRole::User => "user-msg",
            ChatRole::Bot => "bot-msg",
        }
    }
}

/// Class every chat log entry carries next to its role class.
pub const MESSAGE_CLASS: &str = "message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Bot,
            text: text.into(),
        }
    }
}
