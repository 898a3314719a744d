//! DOM views the controllers render into.

use ragdesk_types::message::MESSAGE_CLASS;
use ragdesk_types::{ChatMessage, Notice};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

/// A result area under an admin form. Each notice replaces the previous one.
pub trait ResultView {
    fn show(&self, notice: &Notice);
}

/// Question input, optional index selector and message log of the chat page.
pub trait ChatView {
    fn question(&self) -> String;
    fn clear_question(&self);
    /// Currently selected index, if the page has a selector.
    fn selected_index(&self) -> Option<String>;
    /// Append to the log and scroll it to the newest entry.
    fn append(&self, message: &ChatMessage);
}

pub struct DomResultArea {
    document: Document,
    area: Element,
}

impl DomResultArea {
    pub fn new(document: Document, area: Element) -> Self {
        Self { document, area }
    }

    fn render(&self, notice: &Notice) -> Result<(), JsValue> {
        // Server text goes through text nodes, never through innerHTML
        self.area.set_inner_html("");

        let paragraph = self.document.create_element("p")?;
        if let Some(class) = notice.css_class() {
            paragraph.set_class_name(class);
        }
        if let Some(label) = notice.label() {
            let strong = self.document.create_element("strong")?;
            strong.set_text_content(Some(label));
            paragraph.append_child(&strong)?;
            paragraph.append_with_str_1(" ")?;
        }
        paragraph.append_with_str_1(&notice.text)?;
        self.area.append_child(&paragraph)?;

        if let Some(detail) = &notice.detail {
            let line = self.document.create_element("p")?;
            line.set_class_name("notice-detail");
            let code = self.document.create_element("code")?;
            code.set_text_content(Some(detail));
            line.append_with_str_1(notice.detail_label())?;
            line.append_with_str_1(" ")?;
            line.append_child(&code)?;
            self.area.append_child(&line)?;
        }
        Ok(())
    }
}

impl ResultView for DomResultArea {
    fn show(&self, notice: &Notice) {
        if let Err(err) = self.render(notice) {
            tracing::error!(error = ?err, "failed to render notice");
        }
    }
}

pub struct DomChat {
    document: Document,
    input: HtmlInputElement,
    index_select: Option<HtmlSelectElement>,
    log: Element,
}

impl DomChat {
    pub fn new(
        document: Document,
        input: HtmlInputElement,
        index_select: Option<HtmlSelectElement>,
        log: Element,
    ) -> Self {
        Self {
            document,
            input,
            index_select,
            log,
        }
    }

    fn render(&self, message: &ChatMessage) -> Result<(), JsValue> {
        let entry = self.document.create_element("div")?;
        entry
            .class_list()
            .add_2(MESSAGE_CLASS, message.role.css_class())?;
        entry.set_text_content(Some(&message.text));
        self.log.append_child(&entry)?;
        self.log.set_scroll_top(self.log.scroll_height());
        Ok(())
    }
}

impl ChatView for DomChat {
    fn question(&self) -> String {
        self.input.value()
    }

    fn clear_question(&self) {
        self.input.set_value("");
    }

    fn selected_index(&self) -> Option<String> {
        self.index_select.as_ref().map(|select| select.value())
    }

    fn append(&self, message: &ChatMessage) {
        if let Err(err) = self.render(message) {
            tracing::error!(error = ?err, "failed to append chat message");
        }
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_success_notice_markup() {
        let doc = document();
        let area = doc.create_element("div").unwrap();
        let view = DomResultArea::new(doc, area.clone());

        view.show(&Notice::success("ok"));
        assert_eq!(area.inner_html(), r#"<p class="success">ok</p>"#);
    }

    #[wasm_bindgen_test]
    fn test_answer_notice_is_labeled_and_replaces_previous() {
        let doc = document();
        let area = doc.create_element("div").unwrap();
        let view = DomResultArea::new(doc, area.clone());

        view.show(&Notice::error("first"));
        view.show(&Notice::answer("42"));
        assert_eq!(area.inner_html(), "<p><strong>Answer:</strong> 42</p>");
    }

    #[wasm_bindgen_test]
    fn test_notice_text_is_not_parsed_as_html() {
        let doc = document();
        let area = doc.create_element("div").unwrap();
        let view = DomResultArea::new(doc, area.clone());

        view.show(&Notice::error("<img src=x>"));
        assert_eq!(area.child_element_count(), 1);
        assert_eq!(area.text_content().as_deref(), Some("<img src=x>"));
    }

    #[wasm_bindgen_test]
    fn test_chat_append_scrolls_to_bottom() {
        let doc = document();
        let body = doc.body().unwrap();
        let log = doc.create_element("div").unwrap();
        log.set_attribute("style", "height: 40px; overflow-y: auto").unwrap();
        body.append_child(&log).unwrap();
        let input: HtmlInputElement = doc.create_element("input").unwrap().dyn_into().unwrap();
        let chat = DomChat::new(doc, input, None, log.clone());

        for i in 0..20 {
            chat.append(&ChatMessage::bot(format!("line {}", i)));
            assert!(log.scroll_top() >= log.scroll_height() - log.client_height() - 1);
        }
        assert_eq!(log.child_element_count(), 20);
        let last = log.last_element_child().unwrap();
        assert_eq!(last.class_name(), "message bot-msg");
        body.remove_child(&log).unwrap();
    }
}
