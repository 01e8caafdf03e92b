//! Role-tagged chat messages exchanged with a text-generation service.

pub mod message;
