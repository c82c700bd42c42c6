//! empath — find the core emotion behind an email.
//!
//! The crate collects an email plus relationship context from the terminal,
//! renders one analysis prompt combining Nonviolent Communication with the
//! Map of Consciousness, sends it to the Anthropic Messages API, and prints
//! the reply wrapped for a fixed-width terminal.
//!
//! # Quick start
//!
//! ```no_run
//! use empath::api::ApiClient;
//! use empath::prompt::build_prompt;
//! use empath::config::load_config;
//! use empath::request::{AnalysisRequest, Relationship};
//! use std::time::Duration;
//!
//! # async fn example() {
//! let config = load_config().unwrap();
//! let client = ApiClient::new(&config.api, Duration::from_secs(60));
//! let request = AnalysisRequest {
//!     email_content: "Why wasn't I included?".into(),
//!     sender_title: "CEO".into(),
//!     relationship: Relationship::Selected(0),
//! };
//! let analysis = client.analyze(&build_prompt(&request)).await.unwrap();
//! println!("{analysis}");
//! # }
//! ```

pub mod api;
pub mod app;
pub mod collect;
pub mod config;
pub mod error;
pub mod present;
pub mod prompt;
pub mod reference;
pub mod render;
pub mod request;
pub mod textutil;
pub mod types;
