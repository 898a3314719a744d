//! One controller per form.
//!
//! Controllers own the submit behavior and nothing else: they read from a
//! view, talk to a [`Transport`](crate::transport::Transport), classify the
//! reply and render it. Every failure ends up rendered; nothing is returned
//! as an error.

pub mod admin;
pub mod chat;

pub use admin::AdminFormController;
pub use chat::ChatController;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) mod testing;
