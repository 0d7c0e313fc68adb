//! Election forecast — the percentage-breakdown flow and the prediction
//! page's free-form question flow.

pub mod handlers;
pub mod service;
