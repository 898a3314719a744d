//! Page modes, endpoints, and the DOM contract the pages are built against.

/// Body class that turns on the upload/query wiring.
pub const ADMIN_PAGE_CLASS: &str = "admin-page";
/// Body class that turns on the chat wiring.
pub const CHAT_PAGE_CLASS: &str = "chat-page";

pub const UPLOAD_FORM_ID: &str = "uploadForm";
pub const UPLOAD_RESULT_ID: &str = "uploadResult";
pub const QUERY_FORM_ID: &str = "queryForm";
pub const QUERY_RESULT_ID: &str = "queryResult";

pub const CHAT_FORM_SELECTOR: &str = ".chat-form";
pub const CHAT_BOX_SELECTOR: &str = ".chat-box";
pub const QUESTION_INPUT_SELECTOR: &str = "input[name='question']";
pub const INDEX_SELECT_SELECTOR: &str = "select[name='index_name']";

pub const QUESTION_FIELD: &str = "question";
pub const INDEX_NAME_FIELD: &str = "index_name";

/// Which set of listeners a page wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMode {
    Admin,
    Chat,
}

impl PageMode {
    pub fn marker_class(self) -> &'static str {
        match self {
            PageMode::Admin => ADMIN_PAGE_CLASS,
            PageMode::Chat => CHAT_PAGE_CLASS,
        }
    }

    /// Modes whose marker class appears in a whitespace-separated class
    /// list. Each marker is checked on its own, so a page carrying both gets
    /// both sets of listeners and a page carrying neither gets none.
    pub fn detect(class_list: &str) -> Vec<PageMode> {
        [PageMode::Admin, PageMode::Chat]
            .into_iter()
            .filter(|mode| {
                class_list
                    .split_ascii_whitespace()
                    .any(|class| class == mode.marker_class())
            })
            .collect()
    }
}

/// Server endpoints the pages talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Upload,
    Query,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Upload => "/upload",
            Endpoint::Query => "/query",
        }
    }

    /// Reply field whose truthy presence marks success.
    pub fn success_field(self) -> &'static str {
        match self {
            Endpoint::Upload => "message",
            Endpoint::Query => "answer",
        }
    }

    /// Optional reply field shown as a detail line under a success notice.
    pub fn detail_field(self) -> &'static str {
        match self {
            Endpoint::Upload => "index_path",
            Endpoint::Query => "index_used",
        }
    }
}

/// The two forms on the admin page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminForm {
    Upload,
    Query,
}

impl AdminForm {
    pub const ALL: [AdminForm; 2] = [AdminForm::Upload, AdminForm::Query];

    pub fn endpoint(self) -> Endpoint {
        match self {
            AdminForm::Upload => Endpoint::Upload,
            AdminForm::Query => Endpoint::Query,
        }
    }

    pub fn form_id(self) -> &'static str {
        match self {
            AdminForm::Upload => UPLOAD_FORM_ID,
            AdminForm::Query => QUERY_FORM_ID,
        }
    }

    pub fn result_id(self) -> &'static str {
        match self {
            AdminForm::Upload => UPLOAD_RESULT_ID,
            AdminForm::Query => QUERY_RESULT_ID,
        }
    }

    /// Prefix for notices about requests that never produced a reply.
    pub fn failure_prefix(self) -> &'static str {
        match self {
            AdminForm::Upload => "Upload failed",
            AdminForm::Query => "Query failed",
        }
    }
}
