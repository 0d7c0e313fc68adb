//! Political chatbot — candidate and manifesto questions answered over the
//! loaded corpus.

pub mod handlers;
pub mod service;
