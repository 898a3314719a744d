//! Page bootstrapper: find the forms and attach submit listeners.
//!
//! ## DOM contract
//!
//! - `<body class="admin-page">`: `#uploadForm` renders into
//!   `#uploadResult`, `#queryForm` renders into `#queryResult`. Either form
//!   may be missing.
//! - `<body class="chat-page">`: `form.chat-form` holding
//!   `input[name='question']` and optionally `select[name='index_name']`;
//!   messages go to `.chat-box`.
//!
//! Listeners are attached once and live as long as the page.

use std::rc::Rc;

use ragdesk_types::config::{API_BASE_ATTRIBUTE, LOG_LEVEL_ATTRIBUTE};
use ragdesk_types::page::{
    CHAT_BOX_SELECTOR, CHAT_FORM_SELECTOR, INDEX_SELECT_SELECTOR, QUESTION_INPUT_SELECTOR,
};
use ragdesk_types::{AdminForm, PageMode, PortalConfig, PortalError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Event, FormData, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement,
};

use crate::controller::{AdminFormController, ChatController};
use crate::logging;
use crate::transport::{describe_js_error, FetchTransport};
use crate::view::{DomChat, DomResultArea};

/// Wire the page now if its structure is parsed, otherwise on
/// `DOMContentLoaded`.
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    if document.ready_state() != "loading" {
        return wire_page(&document);
    }

    let ready_document = document.clone();
    let on_ready = Closure::once(Box::new(move |_event: Event| {
        if let Err(err) = wire_page(&ready_document) {
            web_sys::console::error_1(&err);
        }
    }) as Box<dyn FnOnce(_)>);
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

fn wire_page(document: &Document) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };

    let config = read_config(&body);
    logging::init(&config.log_level);

    let modes = PageMode::detect(&body.class_name());
    if modes.is_empty() {
        tracing::debug!("no page marker, nothing to wire");
        return Ok(());
    }

    let transport = Rc::new(FetchTransport::new(config));
    for mode in modes {
        match mode {
            PageMode::Admin => wire_admin(document, &transport)?,
            PageMode::Chat => wire_chat(document, &transport)?,
        }
        tracing::info!(?mode, "page wired");
    }
    Ok(())
}

fn read_config(body: &HtmlElement) -> PortalConfig {
    PortalConfig::from_attributes(
        body.get_attribute(API_BASE_ATTRIBUTE),
        body.get_attribute(LOG_LEVEL_ATTRIBUTE),
    )
}

fn wire_admin(document: &Document, transport: &Rc<FetchTransport>) -> Result<(), JsValue> {
    for form in AdminForm::ALL {
        let Some(form_element) = document
            .get_element_by_id(form.form_id())
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        else {
            tracing::debug!(?form, "form not on page");
            continue;
        };
        // Attached whenever the form exists; a missing result area is
        // reported at submit time.
        let controller = document.get_element_by_id(form.result_id()).map(|area| {
            Rc::new(AdminFormController::new(
                form,
                Rc::clone(transport),
                DomResultArea::new(document.clone(), area),
            ))
        });
        let source = form_element.clone();
        listen_for_submit(&form_element, move || {
            let Some(controller) = controller.as_ref().map(Rc::clone) else {
                tracing::warn!(
                    "{}",
                    PortalError::MissingElement(format!("#{}", form.result_id()))
                );
                return;
            };
            let payload = FormData::new_with_form(&source);
            spawn_local(async move {
                match payload {
                    Ok(payload) => {
                        controller.submit(payload).await;
                    }
                    Err(err) => {
                        controller.reject(PortalError::Form(describe_js_error(&err)));
                    }
                }
            });
        })?;
    }
    Ok(())
}

fn wire_chat(document: &Document, transport: &Rc<FetchTransport>) -> Result<(), JsValue> {
    let Some(form_element) = document
        .query_selector(CHAT_FORM_SELECTOR)?
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        tracing::debug!("chat form not on page");
        return Ok(());
    };

    let input = form_element
        .query_selector(QUESTION_INPUT_SELECTOR)?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let log = document.query_selector(CHAT_BOX_SELECTOR)?;
    let index_select = form_element
        .query_selector(INDEX_SELECT_SELECTOR)?
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok());

    let controller = match (input, log) {
        (Some(input), Some(log)) => Some(Rc::new(ChatController::new(
            Rc::clone(transport),
            DomChat::new(document.clone(), input, index_select, log),
        ))),
        _ => None,
    };
    listen_for_submit(&form_element, move || {
        let Some(controller) = controller.as_ref().map(Rc::clone) else {
            tracing::warn!(
                "{}",
                PortalError::MissingElement(format!(
                    "{} or {}",
                    QUESTION_INPUT_SELECTOR, CHAT_BOX_SELECTOR
                ))
            );
            return;
        };
        spawn_local(async move {
            controller.submit().await;
        });
    })
}

/// Attach `handler` to the form's submit event with navigation suppressed.
fn listen_for_submit<F>(form: &HtmlFormElement, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        handler();
    });
    form.add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref())?;
    listener.forget();
    Ok(())
}
