//! Host-side document model.
//!
//! The selection core itself is host-agnostic: it consumes text, a
//! selection, and a [`LineOffsets`](crate::select::LineOffsets) service.
//! [`Document`] is the batteries-included host surface: a rope buffer that
//! owns the current selection, answers line⇄offset queries, and wires
//! parse-then-expand into one call.

pub mod document;

pub use document::Document;
