//! # zome-scaffold
//!
//! Core library for the zome configuration scaffold tool.
//!
//! A scaffold document describes an application as a set of *zomes*,
//! each grouping data *entries* (with CRUD capability flags) and
//! callable *functions*. The browser front end edits a [`Draft`] and
//! projects it into a [`Document`], which serializes to JSON for
//! persistence and to annotated YAML for display and download.
//!
//! ## Example
//!
//! ```
//! use zome_scaffold::Draft;
//!
//! let mut draft = Draft::new("en");
//! draft.app_name = "chat".to_string();
//!
//! let zome_id = draft.add_zome();
//! let entry_id = draft.add_entry(&zome_id);
//! {
//!     let entry = draft.entry_mut(&entry_id);
//!     entry.name = "message".to_string();
//!     entry.crud.create = true;
//!     entry.crud.read = true;
//! }
//!
//! let doc = draft.to_document();
//! // Flagged entries derive their CRUD functions automatically.
//! assert_eq!(doc.zomes[0].functions[0].name, "messageCreate");
//! assert_eq!(doc.zomes[0].functions[1].name, "messageRead");
//! ```

pub mod document;
pub mod draft;
pub mod error;
pub mod yaml;

pub use document::{Document, Entry, Function, Properties, Zome};
pub use draft::{CrudFlags, Draft, EntryDraft, FunctionDraft, ZomeDraft};
pub use error::ScaffoldError;
pub use yaml::{parse_document, read_document_file, to_yaml};
