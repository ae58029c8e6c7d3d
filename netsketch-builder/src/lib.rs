//! Manual graph construction for netsketch.
//!
//! Users who would rather pick devices than describe them build a
//! [`ConnectionList`] by hand or start from a template. The list converts into
//! the same [`netsketch_core::Graph`] the prompt extractor produces, so both
//! paths share the renderers.

pub mod catalog;
pub mod connection;
pub mod error;
pub mod template;

pub use catalog::{PROTOCOLS, all_devices, filter_devices};
pub use connection::{Connection, ConnectionDirection, ConnectionList};
pub use error::BuilderError;
pub use template::{require_template, template, template_names};
