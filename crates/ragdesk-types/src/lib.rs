//! Shared vocabulary for the RagDesk pages.
//!
//! Everything here is DOM-free so the decision logic behind the admin and
//! chat pages can be tested natively. The WASM crate only moves values
//! between these types and the browser.

pub mod config;
pub mod error;
pub mod message;
pub mod page;
pub mod reply;

pub use config::PortalConfig;
pub use error::PortalError;
pub use message::{ChatMessage, ChatRole, Notice, NoticeTone};
pub use page::{AdminForm, Endpoint, PageMode};
pub use reply::Outcome;
