//! Client bindings for the Glossa multilingual NLP REST API.
//!
//! The client is a thin request/response marshaller: each method serializes
//! its arguments into a JSON body, issues one HTTP POST against a fixed API
//! path, and decodes the JSON response into a typed result. All NLP
//! computation (tokenization, parsing, summarization, coreference
//! resolution, ...) happens on the server.
//!
//! ```no_run
//! use glossa_client::{ClientConfig, GlossaClient};
//!
//! # async fn run() -> Result<(), glossa_client::GlossaError> {
//! let client = GlossaClient::new(
//!     ClientConfig::new("https://glossa.example.com/api").with_language("mul"),
//! )?;
//!
//! let sentences = client.tokenize("The quick brown fox. It jumps.", false).await?;
//! for tokens in &sentences {
//!     println!("{}", tokens.join(" | "));
//! }
//!
//! let doc = client.parse_with("商品和服务", &["pos", "dep"], &[]).await?;
//! for (task, annotations) in doc.iter() {
//!     println!("{task}: {} sentences", annotations.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Calls are independent and carry no state between them; a
//! [`GlossaClient`] can be cloned and shared across tasks. Failures surface
//! as [`GlossaError`] without retries or partial results.

mod client;
mod error;
mod input;
mod models;

pub use client::{ClientConfig, GlossaClient};
pub use error::GlossaError;
pub use input::{ParseRequest, TextField, TextInput};
pub use models::{
    Anchor, CoreferenceClusters, CoreferenceOutput, Document, MeaningEdge, MeaningGraph,
    MeaningNode, Span,
};

pub use indexmap::IndexMap;
