//! OpenAI-compatible adapter for the text-generation port
//!
//! `POST {base_url}/v1/chat/completions` with bearer auth; the reply text is
//! read from `choices[0].message.content`.

pub mod gateway;
mod protocol;

pub use gateway::OpenAiGateway;
