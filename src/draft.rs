//! The edit model behind the form UI.
//!
//! A [`Draft`] is the canonical in-memory state while the user edits:
//! the browser view is a projection of it, and every change event lands
//! here. Unlike the serialized [`Document`], a draft keeps rows with
//! empty names (the user may still be typing) and never stores derived
//! CRUD functions (they regenerate from entry flags on projection).
//!
//! Each zome/entry/function row carries a stable instance id minted by
//! a monotonic counter with a namespace prefix (`zome-3`, `entry-7`).
//! Ids identify rows across add/remove operations within one session;
//! they are never persisted.

use crate::document::{Document, Entry, Function, Zome};

/// Mints session-unique instance ids.
#[derive(Debug, Clone, PartialEq, Default)]
struct IdGen {
    next: u64,
}

impl IdGen {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next += 1;
        format!("{prefix}-{}", self.next)
    }
}

/// The four independent CRUD capability flags of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CrudFlags {
    pub create: bool,
    pub read: bool,
    pub update: bool,
    pub delete: bool,
}

/// Flag letters in the fixed hint order, paired with their name suffix.
const CRUD_OPS: [(char, &str); 4] = [
    ('c', "Create"),
    ('r', "Read"),
    ('u', "Update"),
    ('d', "Delete"),
];

impl CrudFlags {
    /// Compact hint string: set flag letters in fixed `crud` order,
    /// `-` when no flag is set.
    pub fn hint(&self) -> String {
        let mut out = String::new();
        for (letter, _) in CRUD_OPS {
            if self.is_set(letter) {
                out.push(letter);
            }
        }
        if out.is_empty() {
            out.push('-');
        }
        out
    }

    /// Restore flags from a hint string by letter presence.
    pub fn from_hint(hint: &str) -> Self {
        Self {
            create: hint.contains('c'),
            read: hint.contains('r'),
            update: hint.contains('u'),
            delete: hint.contains('d'),
        }
    }

    fn is_set(&self, letter: char) -> bool {
        match letter {
            'c' => self.create,
            'r' => self.read,
            'u' => self.update,
            'd' => self.delete,
            _ => false,
        }
    }
}

/// One entry row under edit.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub id: String,
    pub name: String,
    pub data_format: String,
    pub sharing: String,
    pub crud: CrudFlags,
}

/// One function row under edit (manually authored only).
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDraft {
    pub id: String,
    pub name: String,
    pub calling_type: String,
    pub exposure: String,
}

/// One zome card under edit.
#[derive(Debug, Clone, PartialEq)]
pub struct ZomeDraft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub nucleus_type: String,
    pub entries: Vec<EntryDraft>,
    pub functions: Vec<FunctionDraft>,
}

/// Canonical edit-time state of the whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub app_name: String,
    pub app_desc: String,
    pub locale: String,
    pub zomes: Vec<ZomeDraft>,
    uuid: String,
    scaffold_version: String,
    version: u32,
    properties_schema_file: String,
    hash_type: String,
    ids: IdGen,
}

impl Draft {
    /// An empty draft for a fresh document in the given locale.
    pub fn new(locale: &str) -> Self {
        Self::load(&Document::new(locale))
    }

    /// Rebuild edit state from a loaded document. Startup only.
    ///
    /// Entry CRUD flags are restored from hint letters. Functions whose
    /// hint marks them CRUD-derived are skipped: they regenerate from
    /// the entry flags on the next projection instead of duplicating.
    pub fn load(doc: &Document) -> Self {
        let mut draft = Self {
            app_name: doc.name.clone(),
            app_desc: doc.properties.description.clone(),
            locale: doc.properties.language.clone(),
            zomes: Vec::new(),
            uuid: doc.uuid.clone(),
            scaffold_version: doc.scaffold_version.clone(),
            version: doc.version,
            properties_schema_file: doc.properties_schema_file.clone(),
            hash_type: doc.dht_config.hash_type.clone(),
            ids: IdGen::default(),
        };

        for zome in &doc.zomes {
            let zome_id = draft.add_zome();
            let zd = draft.zome_mut(&zome_id);
            zd.name = zome.name.clone();
            zd.description = zome.description.clone();
            zd.nucleus_type = zome.nucleus_type.clone();

            for entry in &zome.entries {
                let entry_id = draft.add_entry(&zome_id);
                let ed = draft.entry_mut(&entry_id);
                ed.name = entry.name.clone();
                ed.data_format = entry.data_format.clone();
                ed.sharing = entry.sharing.clone();
                if let Some(hint) = &entry.hint {
                    ed.crud = CrudFlags::from_hint(hint);
                }
            }

            for func in &zome.functions {
                if func.derived_from().is_some() {
                    continue;
                }
                let func_id = draft.add_function(&zome_id);
                let fd = draft.function_mut(&func_id);
                fd.name = func.name.clone();
                fd.calling_type = func.calling_type.clone();
                fd.exposure = func.exposure.clone();
            }
        }

        draft
    }

    /// Project the draft into a serializable document.
    ///
    /// Rows with empty or whitespace-only names are dropped. For each
    /// kept entry, one function per set CRUD flag is emitted ahead of
    /// the manually authored functions, in fixed create, read, update,
    /// delete order, marked with a `<letter>:<entry-name>` hint.
    pub fn to_document(&self) -> Document {
        let zomes = self.zomes.iter().map(project_zome).collect();

        Document {
            scaffold_version: self.scaffold_version.clone(),
            version: self.version,
            uuid: self.uuid.clone(),
            name: self.app_name.clone(),
            properties: crate::document::Properties {
                description: self.app_desc.clone(),
                language: self.locale.clone(),
            },
            properties_schema_file: self.properties_schema_file.clone(),
            dht_config: crate::document::DhtConfig {
                hash_type: self.hash_type.clone(),
            },
            zomes,
        }
    }

    // -- structural edits -- //

    /// Append an empty zome card. Returns its instance id.
    pub fn add_zome(&mut self) -> String {
        let id = self.ids.next_id("zome");
        self.zomes.push(ZomeDraft {
            id: id.clone(),
            name: String::new(),
            description: String::new(),
            nucleus_type: "js".to_string(),
            entries: Vec::new(),
            functions: Vec::new(),
        });
        id
    }

    /// Append an empty entry row to a zome. Returns its instance id.
    pub fn add_entry(&mut self, zome_id: &str) -> String {
        let id = self.ids.next_id("entry");
        self.zome_mut(zome_id).entries.push(EntryDraft {
            id: id.clone(),
            name: String::new(),
            data_format: "json".to_string(),
            sharing: "public".to_string(),
            crud: CrudFlags::default(),
        });
        id
    }

    /// Append an empty function row to a zome. Returns its instance id.
    pub fn add_function(&mut self, zome_id: &str) -> String {
        let id = self.ids.next_id("fn");
        self.zome_mut(zome_id).functions.push(FunctionDraft {
            id: id.clone(),
            name: String::new(),
            calling_type: "json".to_string(),
            exposure: "public".to_string(),
        });
        id
    }

    /// Remove a zome card. Panics on an unknown id: callers must only
    /// remove ids they hold.
    pub fn remove_zome(&mut self, id: &str) {
        let pos = self
            .zomes
            .iter()
            .position(|z| z.id == id)
            .unwrap_or_else(|| panic!("unknown zome instance: {id}"));
        self.zomes.remove(pos);
    }

    /// Remove an entry row. Panics on an unknown id.
    pub fn remove_entry(&mut self, id: &str) {
        for zome in &mut self.zomes {
            if let Some(pos) = zome.entries.iter().position(|e| e.id == id) {
                zome.entries.remove(pos);
                return;
            }
        }
        panic!("unknown entry instance: {id}");
    }

    /// Remove a function row. Panics on an unknown id.
    pub fn remove_function(&mut self, id: &str) {
        for zome in &mut self.zomes {
            if let Some(pos) = zome.functions.iter().position(|f| f.id == id) {
                zome.functions.remove(pos);
                return;
            }
        }
        panic!("unknown function instance: {id}");
    }

    // -- row access for field edits -- //

    pub fn zome_mut(&mut self, id: &str) -> &mut ZomeDraft {
        self.zomes
            .iter_mut()
            .find(|z| z.id == id)
            .unwrap_or_else(|| panic!("unknown zome instance: {id}"))
    }

    pub fn entry_mut(&mut self, id: &str) -> &mut EntryDraft {
        self.zomes
            .iter_mut()
            .flat_map(|z| z.entries.iter_mut())
            .find(|e| e.id == id)
            .unwrap_or_else(|| panic!("unknown entry instance: {id}"))
    }

    pub fn function_mut(&mut self, id: &str) -> &mut FunctionDraft {
        self.zomes
            .iter_mut()
            .flat_map(|z| z.functions.iter_mut())
            .find(|f| f.id == id)
            .unwrap_or_else(|| panic!("unknown function instance: {id}"))
    }
}

fn project_zome(zome: &ZomeDraft) -> Zome {
    let entries: Vec<Entry> = zome
        .entries
        .iter()
        .filter(|e| !e.name.trim().is_empty())
        .map(|e| Entry {
            name: e.name.clone(),
            data_format: e.data_format.clone(),
            sharing: e.sharing.clone(),
            schema_file: format!("{}.json", e.name),
            hint: Some(e.crud.hint()),
        })
        .collect();

    let mut functions = Vec::new();

    // Derived CRUD functions come first, in flag order per entry.
    for entry in zome.entries.iter().filter(|e| !e.name.trim().is_empty()) {
        for (letter, suffix) in CRUD_OPS {
            if entry.crud.is_set(letter) {
                functions.push(Function {
                    name: format!("{}{suffix}", entry.name),
                    calling_type: entry.data_format.clone(),
                    exposure: entry.sharing.clone(),
                    hint: Some(format!("{letter}:{}", entry.name)),
                });
            }
        }
    }

    for func in &zome.functions {
        if func.name.trim().is_empty() {
            continue;
        }
        functions.push(Function {
            name: func.name.clone(),
            calling_type: func.calling_type.clone(),
            exposure: func.exposure.clone(),
            hint: None,
        });
    }

    Zome {
        name: zome.name.clone(),
        description: zome.description.clone(),
        nucleus_type: zome.nucleus_type.clone(),
        code_file: format!("{}.js", zome.name),
        entries,
        functions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    /// Helper: a draft with one zome holding one named entry.
    fn draft_with_entry(name: &str, crud: CrudFlags) -> (Draft, String, String) {
        let mut draft = Draft::new("en");
        let zome_id = draft.add_zome();
        draft.zome_mut(&zome_id).name = "chat".to_string();
        let entry_id = draft.add_entry(&zome_id);
        {
            let entry = draft.entry_mut(&entry_id);
            entry.name = name.to_string();
            entry.crud = crud;
        }
        (draft, zome_id, entry_id)
    }

    /// Fixture mirroring a fully populated saved document.
    fn fixture() -> Document {
        serde_json::from_value(serde_json::json!({
            "scaffoldVersion": "zome-scaffold-0.1.0",
            "Version": 1,
            "UUID": "test-uuid",
            "Name": "test-name",
            "Properties": {
                "description": "test-description",
                "language": "en"
            },
            "PropertiesSchemaFile": "properties_schema.json",
            "DHTConfig": { "HashType": "sha2-256" },
            "Zomes": [
                {
                    "Name": "test-zome-name",
                    "Description": "test-zome-description",
                    "NucleusType": "js",
                    "CodeFile": "test-zome-name.js",
                    "Entries": [
                        {
                            "Name": "test-entry",
                            "DataFormat": "json",
                            "Sharing": "public",
                            "SchemaFile": "test-entry.json",
                            "_": "crud"
                        }
                    ],
                    "Functions": [
                        {
                            "Name": "test-entryCreate",
                            "CallingType": "json",
                            "Exposure": "public",
                            "_": "c:test-entry"
                        },
                        {
                            "Name": "test-entryRead",
                            "CallingType": "json",
                            "Exposure": "public",
                            "_": "r:test-entry"
                        },
                        {
                            "Name": "test-entryUpdate",
                            "CallingType": "json",
                            "Exposure": "public",
                            "_": "u:test-entry"
                        },
                        {
                            "Name": "test-entryDelete",
                            "CallingType": "json",
                            "Exposure": "public",
                            "_": "d:test-entry"
                        },
                        {
                            "Name": "test-function",
                            "CallingType": "json",
                            "Exposure": "public"
                        }
                    ]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_hint_order_and_empty() {
        let all = CrudFlags {
            create: true,
            read: true,
            update: true,
            delete: true,
        };
        assert_eq!(all.hint(), "crud");
        assert_eq!(CrudFlags::default().hint(), "-");

        let cd = CrudFlags {
            create: true,
            delete: true,
            ..CrudFlags::default()
        };
        assert_eq!(cd.hint(), "cd");

        let ru = CrudFlags {
            read: true,
            update: true,
            ..CrudFlags::default()
        };
        assert_eq!(ru.hint(), "ru");
    }

    #[test]
    fn test_hint_round_trip() {
        for hint in ["-", "c", "r", "u", "d", "cr", "ud", "crud"] {
            assert_eq!(CrudFlags::from_hint(hint).hint(), hint);
        }
    }

    #[test]
    fn test_ids_are_unique_and_prefixed() {
        let mut draft = Draft::new("en");
        let z1 = draft.add_zome();
        let z2 = draft.add_zome();
        let e1 = draft.add_entry(&z1);
        let f1 = draft.add_function(&z2);
        assert!(z1.starts_with("zome-"));
        assert!(e1.starts_with("entry-"));
        assert!(f1.starts_with("fn-"));
        assert_ne!(z1, z2);
    }

    #[test]
    fn test_derived_functions_precede_manual() {
        let (mut draft, zome_id, _) = draft_with_entry(
            "post",
            CrudFlags {
                create: true,
                read: true,
                ..CrudFlags::default()
            },
        );
        let func_id = draft.add_function(&zome_id);
        draft.function_mut(&func_id).name = "archive".to_string();

        let doc = draft.to_document();
        let funcs = &doc.zomes[0].functions;
        assert_eq!(funcs.len(), 3);
        assert_eq!(funcs[0].name, "postCreate");
        assert_eq!(funcs[0].hint.as_deref(), Some("c:post"));
        assert_eq!(funcs[1].name, "postRead");
        assert_eq!(funcs[1].hint.as_deref(), Some("r:post"));
        assert_eq!(funcs[2].name, "archive");
        assert_eq!(funcs[2].hint, None);
    }

    #[test]
    fn test_derived_functions_inherit_format_and_sharing() {
        let (mut draft, _, entry_id) = draft_with_entry(
            "note",
            CrudFlags {
                delete: true,
                ..CrudFlags::default()
            },
        );
        {
            let entry = draft.entry_mut(&entry_id);
            entry.data_format = "string".to_string();
            entry.sharing = "private".to_string();
        }
        let doc = draft.to_document();
        let func = &doc.zomes[0].functions[0];
        assert_eq!(func.name, "noteDelete");
        assert_eq!(func.calling_type, "string");
        assert_eq!(func.exposure, "private");
    }

    #[test]
    fn test_blank_names_are_excluded() {
        let mut draft = Draft::new("en");
        let zome_id = draft.add_zome();
        draft.zome_mut(&zome_id).name = "z".to_string();

        // Entry left unnamed, function named with whitespace only.
        let entry_id = draft.add_entry(&zome_id);
        draft.entry_mut(&entry_id).crud.create = true;
        let func_id = draft.add_function(&zome_id);
        draft.function_mut(&func_id).name = "   ".to_string();

        let doc = draft.to_document();
        assert!(doc.zomes[0].entries.is_empty());
        // No derived function either: the flagged entry has no name.
        assert!(doc.zomes[0].functions.is_empty());
    }

    #[test]
    fn test_remove_only_entry_then_add_function() {
        let (mut draft, zome_id, entry_id) = draft_with_entry(
            "post",
            CrudFlags {
                create: true,
                ..CrudFlags::default()
            },
        );
        draft.remove_entry(&entry_id);
        let func_id = draft.add_function(&zome_id);
        draft.function_mut(&func_id).name = "foo".to_string();

        let doc = draft.to_document();
        assert!(doc.zomes[0].entries.is_empty());
        assert_eq!(doc.zomes[0].functions.len(), 1);
        assert_eq!(doc.zomes[0].functions[0].name, "foo");
    }

    #[test]
    fn test_load_skips_derived_functions() {
        let draft = Draft::load(&fixture());
        let zome = &draft.zomes[0];
        // Four derived functions dropped, one manual kept.
        assert_eq!(zome.functions.len(), 1);
        assert_eq!(zome.functions[0].name, "test-function");
        // Flags restored from the entry hint.
        assert_eq!(zome.entries[0].crud.hint(), "crud");
    }

    #[test]
    fn test_round_trip_full_fixture() {
        let doc = fixture();
        let rebuilt = Draft::load(&doc).to_document();
        assert_eq!(rebuilt, doc);
    }

    #[test]
    fn test_round_trip_twice_is_stable() {
        let doc = Draft::load(&fixture()).to_document();
        let again = Draft::load(&doc).to_document();
        assert_eq!(doc, again);
    }

    #[test]
    #[should_panic(expected = "unknown zome instance")]
    fn test_remove_unknown_zome_panics() {
        Draft::new("en").remove_zome("zome-99");
    }

    #[test]
    #[should_panic(expected = "unknown entry instance")]
    fn test_remove_unknown_entry_panics() {
        Draft::new("en").remove_entry("entry-99");
    }
}
