pub mod config;
pub mod logging;

pub mod fetch;
pub mod http;
pub mod layout;
pub mod manifest;
pub mod plan;
pub mod selection;
pub mod variants;
pub mod workflow;
