//! Hover and completion providers.

pub mod completion;
pub mod hover;

pub use completion::CompletionProvider;
pub use hover::{HoverProvider, NO_DOCUMENTATION};
