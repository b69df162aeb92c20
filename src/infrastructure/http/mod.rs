//! Upstream HTTP client implementations.

mod reqwest_client;

pub use reqwest_client::ReqwestClient;
