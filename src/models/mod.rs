//! Typed response models for the Glossa API.

mod amr;
mod coref;
mod document;

pub use amr::{Anchor, MeaningEdge, MeaningGraph, MeaningNode};
pub use coref::{CoreferenceClusters, CoreferenceOutput, Span};
pub use document::Document;
