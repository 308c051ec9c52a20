//! The serialized configuration document.
//!
//! Wire field names are fixed (they are what older saves and uploaded
//! files contain), so every field carries an explicit serde rename.
//! Parsing is lenient: any field except the zome/entry/function name
//! may be absent and falls back to its documented default.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scaffold format marker written into every new document.
pub const SCAFFOLD_VERSION: &str = "zome-scaffold-0.1.0";

/// Document format version.
pub const DOC_VERSION: u32 = 1;

/// Hash algorithm recorded in the DHT config block.
pub const HASH_TYPE: &str = "sha2-256";

/// Schema file name recorded for the properties block.
pub const PROPERTIES_SCHEMA_FILE: &str = "properties_schema.json";

fn default_scaffold_version() -> String {
    SCAFFOLD_VERSION.to_string()
}

fn default_doc_version() -> u32 {
    DOC_VERSION
}

fn default_uuid() -> String {
    Uuid::new_v4().to_string()
}

fn default_properties_schema_file() -> String {
    PROPERTIES_SCHEMA_FILE.to_string()
}

fn default_data_format() -> String {
    "json".to_string()
}

fn default_sharing() -> String {
    "public".to_string()
}

fn default_nucleus_type() -> String {
    "js".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

/// Complete scaffold document, the unit of persistence and exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "scaffoldVersion", default = "default_scaffold_version")]
    pub scaffold_version: String,

    #[serde(rename = "Version", default = "default_doc_version")]
    pub version: u32,

    #[serde(rename = "UUID", default = "default_uuid")]
    pub uuid: String,

    #[serde(rename = "Name", default)]
    pub name: String,

    #[serde(rename = "Properties", default)]
    pub properties: Properties,

    #[serde(
        rename = "PropertiesSchemaFile",
        default = "default_properties_schema_file"
    )]
    pub properties_schema_file: String,

    #[serde(rename = "DHTConfig", default)]
    pub dht_config: DhtConfig,

    #[serde(rename = "Zomes", default)]
    pub zomes: Vec<Zome>,
}

impl Document {
    /// An empty document with a fresh UUID, bound to the given locale.
    pub fn new(language: &str) -> Self {
        Self {
            scaffold_version: default_scaffold_version(),
            version: DOC_VERSION,
            uuid: default_uuid(),
            name: String::new(),
            properties: Properties {
                description: String::new(),
                language: language.to_string(),
            },
            properties_schema_file: default_properties_schema_file(),
            dht_config: DhtConfig::default(),
            zomes: Vec::new(),
        }
    }
}

/// Free-form application properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub description: String,

    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            description: String::new(),
            language: default_language(),
        }
    }
}

/// DHT parameters. Only the hash type is configurable today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DhtConfig {
    #[serde(rename = "HashType")]
    pub hash_type: String,
}

impl Default for DhtConfig {
    fn default() -> Self {
        Self {
            hash_type: HASH_TYPE.to_string(),
        }
    }
}

/// A named module grouping entry types and functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zome {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Description", default)]
    pub description: String,

    #[serde(rename = "NucleusType", default = "default_nucleus_type")]
    pub nucleus_type: String,

    #[serde(rename = "CodeFile", default)]
    pub code_file: String,

    #[serde(rename = "Entries", default)]
    pub entries: Vec<Entry>,

    #[serde(rename = "Functions", default)]
    pub functions: Vec<Function>,
}

/// A data record type with a sharing policy and CRUD capability hint.
///
/// The `_` hint holds the set CRUD flag letters in fixed `crud` order,
/// or `-` when no flag is set. It exists to round-trip UI-only state
/// through the serialized document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "DataFormat", default = "default_data_format")]
    pub data_format: String,

    #[serde(rename = "Sharing", default = "default_sharing")]
    pub sharing: String,

    #[serde(rename = "SchemaFile", default)]
    pub schema_file: String,

    #[serde(rename = "_", default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// A callable operation, manually authored or derived from entry flags.
///
/// Derived functions carry a `<op-letter>:<entry-name>` hint so a later
/// load can skip them and regenerate from the entry flags instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "CallingType", default = "default_data_format")]
    pub calling_type: String,

    #[serde(rename = "Exposure", default = "default_sharing")]
    pub exposure: String,

    #[serde(rename = "_", default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Function {
    /// Entry name this function was derived from, if its hint marks it
    /// as CRUD-derived (`c:`, `r:`, `u:` or `d:` prefix).
    pub fn derived_from(&self) -> Option<&str> {
        let hint = self.hint.as_deref()?;
        let (op, entry) = hint.split_at_checked(2)?;
        match op {
            "c:" | "r:" | "u:" | "d:" => Some(entry),
            _ => None,
        }
    }
}
