//! `pdfsuit-http` is an async HTTP client for the PdfSuit template-to-PDF
//! rendering API.
//!
//! The crate wraps the `/api/v1/generate/template-pdf` endpoint with
//! ergonomic methods:
//! - [`PdfSuitClient::send`] — render a [`Document`] and get the PDF bytes
//! - [`PdfSuitClient::send_to_file`] — render and write the artifact to disk
//! - [`Document::from_json_file`] / [`Document::from_json_slice`] — load
//!   documents from JSON sources
//!
//! Documents are assembled with the fluent value builders
//! ([`DocumentBuilder`], [`TableBuilder`], [`CellBuilder`]) or the canned
//! layouts in [`DocumentFactory`]. Transient failures (transport errors and
//! 5xx responses) are retried with exponential backoff; see [`ClientOptions`]
//! and [`RetryPolicy`].

mod builder;
mod client;
mod document;
mod error;
mod executor;
mod factory;
mod options;
mod reader;
mod retry;

pub use builder::{
    cell, checkbox_cell, radio_cell, text_field_cell, CellBuilder, ConfigBuilder, DocumentBuilder,
    PropsBuilder, TableBuilder,
};
pub use client::PdfSuitClient;
pub use document::{
    Alignment, Cell, Config, Document, Footer, FormField, FormFieldKind, Image, PageSize, Row,
    Table, Title,
};
pub use error::PdfSuitError;
pub use factory::{CheckboxOption, DocumentFactory, DocumentType, FormBuilder, RadioOption};
pub use options::{ClientOptions, DEFAULT_ENDPOINT};
pub use retry::{exponential_backoff, RetryPolicy};

pub type Result<T> = std::result::Result<T, PdfSuitError>;
