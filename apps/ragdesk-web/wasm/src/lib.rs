//! WASM front end for the RagDesk admin and chat pages
//!
//! Loading the module is all a page needs to do: the start function looks
//! at the `<body>` marker class and wires the matching forms.
//!
//! ## Architecture
//!
//! - `bootstrap`: page-mode detection and listener wiring
//! - `controller`: one submit handler per form, generic over transport and view
//! - `transport`: multipart `fetch` to `/upload` and `/query`
//! - `view`: DOM rendering of notices and chat messages
//! - `logging`: `tracing` output routed to the browser console
//!
//! ## Usage (HTML)
//!
//! ```html
//! <body class="chat-page" data-api-base="http://localhost:8000">
//!   <div class="chat-box"></div>
//!   <form class="chat-form">
//!     <input name="question">
//!     <select name="index_name"><option>faiss_index_lease</option></select>
//!   </form>
//!   <script type="module">
//!     import init from './pkg/ragdesk_wasm.js';
//!     await init();
//!   </script>
//! </body>
//! ```

pub mod bootstrap;
pub mod controller;
pub mod logging;
pub mod transport;
pub mod view;

use wasm_bindgen::prelude::*;

pub use controller::{AdminFormController, ChatController};
pub use transport::{FetchTransport, Transport};
pub use view::{ChatView, DomChat, DomResultArea, ResultView};

/// Initialize the WASM module and wire the page
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if let Err(err) = bootstrap::start() {
        web_sys::console::error_1(&err);
    }
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
