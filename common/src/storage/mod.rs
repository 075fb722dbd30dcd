//! Record persistence.
//!
//! Records are stored as three independent collections, each a JSON array
//! under its own key (`templates`, `projects`, `submissions`). The
//! [`Repository`] trait is the surface the workspace operations use;
//! [`JsonRepository`] implements it once over any [`KeyValueBackend`], so the
//! browser's local storage and the in-memory store used by tests share the
//! same encoding.
//!
//! Reads never fail: a missing key reads as an empty collection, a value that
//! is not a JSON array reads as empty, and a single record that no longer
//! decodes is skipped (both logged at `warn`).
//!
//! Writes that add or replace one record work on the stored JSON entries and
//! never decode the others, so a record this version cannot read is written
//! back byte for byte. A stored value that is not an array is never
//! overwritten by them; they fail with [`StorageError::NotAList`].

mod memory;

pub use memory::MemoryBackend;

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::StorageError;
use crate::model::{FormSubmission, Project, Template};

/// The three stored collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Templates,
    Projects,
    Submissions,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Templates,
        Collection::Projects,
        Collection::Submissions,
    ];

    /// Key the collection is stored under.
    pub fn key(self) -> &'static str {
        match self {
            Collection::Templates => "templates",
            Collection::Projects => "projects",
            Collection::Submissions => "submissions",
        }
    }
}

/// A record type that lives in one collection and is addressed by id.
pub trait Record: Serialize + DeserializeOwned + Clone {
    const COLLECTION: Collection;

    fn id(&self) -> &str;
}

impl Record for Template {
    const COLLECTION: Collection = Collection::Templates;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Project {
    const COLLECTION: Collection = Collection::Projects;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for FormSubmission {
    const COLLECTION: Collection = Collection::Submissions;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Raw string key-value store underneath the repository.
pub trait KeyValueBackend {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<B: KeyValueBackend + ?Sized> KeyValueBackend for &B {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Collection-level operations used by the workspace.
pub trait Repository {
    /// Writes an empty collection under every key that is absent.
    fn initialize(&self) -> Result<(), StorageError>;

    fn read_all<R: Record>(&self) -> Vec<R>;

    fn append<R: Record>(&self, record: R) -> Result<(), StorageError>;

    fn replace_all<R: Record>(&self, records: &[R]) -> Result<(), StorageError>;

    /// Swaps the stored record with the same id for `record`, leaving every
    /// other entry untouched. Returns whether a record was replaced.
    fn replace<R: Record>(&self, record: &R) -> Result<bool, StorageError>;

    fn find_by_id<R: Record>(&self, id: &str) -> Option<R> {
        self.read_all::<R>().into_iter().find(|record| record.id() == id)
    }
}

/// [`Repository`] storing each collection as a JSON array.
#[derive(Debug, Clone, Default)]
pub struct JsonRepository<B> {
    backend: B,
}

impl<B: KeyValueBackend> JsonRepository<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn write<R: Record>(&self, records: &[R]) -> Result<(), StorageError> {
        let key = R::COLLECTION.key();
        let json = serde_json::to_string(records).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        debug!("writing {} records to {}", records.len(), key);
        self.backend.set(key, &json)
    }

    /// Stored entries of a collection, undecoded. A missing key is empty.
    fn entries(&self, key: &str) -> Result<Vec<Value>, StorageError> {
        let Some(raw) = self.backend.get(key) else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(entries)) => Ok(entries),
            _ => Err(StorageError::NotAList {
                key: key.to_string(),
            }),
        }
    }

    fn write_entries(&self, key: &str, entries: &[Value]) -> Result<(), StorageError> {
        let json = serde_json::to_string(entries).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        debug!("writing {} entries to {}", entries.len(), key);
        self.backend.set(key, &json)
    }
}

fn encode<R: Record>(record: &R) -> Result<Value, StorageError> {
    serde_json::to_value(record).map_err(|source| StorageError::Encode {
        key: R::COLLECTION.key().to_string(),
        source,
    })
}

impl<B: KeyValueBackend> Repository for JsonRepository<B> {
    fn initialize(&self) -> Result<(), StorageError> {
        for collection in Collection::ALL {
            if self.backend.get(collection.key()).is_none() {
                debug!("initializing empty {}", collection.key());
                self.backend.set(collection.key(), "[]")?;
            }
        }
        Ok(())
    }

    fn read_all<R: Record>(&self) -> Vec<R> {
        let key = R::COLLECTION.key();
        let entries = match self.entries(key) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("reading {} as empty: {}", key, e);
                return Vec::new();
            }
        };
        entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("skipping unreadable record in {}: {}", key, e);
                    None
                }
            })
            .collect()
    }

    fn append<R: Record>(&self, record: R) -> Result<(), StorageError> {
        let key = R::COLLECTION.key();
        let mut entries = self.entries(key)?;
        entries.push(encode(&record)?);
        self.write_entries(key, &entries)
    }

    fn replace_all<R: Record>(&self, records: &[R]) -> Result<(), StorageError> {
        self.write(records)
    }

    fn replace<R: Record>(&self, record: &R) -> Result<bool, StorageError> {
        let key = R::COLLECTION.key();
        let mut entries = self.entries(key)?;
        let Some(slot) = entries
            .iter_mut()
            .find(|entry| entry.get("id").and_then(Value::as_str) == Some(record.id()))
        else {
            return Ok(false);
        };
        *slot = encode(record)?;
        self.write_entries(key, &entries)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormValues;
    use crate::model::{Field, FieldKind, FieldValue};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn repo() -> JsonRepository<MemoryBackend> {
        JsonRepository::new(MemoryBackend::new())
    }

    fn project(id: &str, name: &str) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            template_id: "t-1".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn initialize_only_fills_missing_keys() {
        let repo = repo();
        repo.backend().set("projects", r#"[{"bogus":true}]"#).unwrap();
        repo.initialize().unwrap();

        assert_eq!(repo.backend().get("templates").as_deref(), Some("[]"));
        assert_eq!(repo.backend().get("submissions").as_deref(), Some("[]"));
        assert_eq!(
            repo.backend().get("projects").as_deref(),
            Some(r#"[{"bogus":true}]"#)
        );
    }

    #[test]
    fn missing_collection_reads_empty() {
        assert!(repo().read_all::<Template>().is_empty());
    }

    #[test]
    fn corrupt_collection_reads_empty() {
        let repo = repo();
        repo.backend().set("projects", "{not json").unwrap();
        assert!(repo.read_all::<Project>().is_empty());
    }

    #[test]
    fn undecodable_record_is_skipped_on_read() {
        let repo = repo();
        repo.append(project("1", "first")).unwrap();
        let raw = repo.backend().get("projects").unwrap();
        let mixed = raw.replacen('[', r#"[{"id":"legacy","name":"no date"},"#, 1);
        repo.backend().set("projects", &mixed).unwrap();

        let ids: Vec<String> = repo.read_all::<Project>().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["1"]);
    }

    #[test]
    fn append_keeps_records_it_cannot_read() {
        let repo = repo();
        repo.append(project("1", "first")).unwrap();
        repo.append(project("2", "second")).unwrap();
        let raw = repo.backend().get("projects").unwrap();
        let legacy = r#"{"id":"3","name":"legacy","templateId":"t-1"}"#;
        let with_legacy = format!("{},{}]", raw.trim_end_matches(']'), legacy);
        repo.backend().set("projects", &with_legacy).unwrap();

        repo.append(project("4", "fourth")).unwrap();

        let stored: Vec<Value> =
            serde_json::from_str(&repo.backend().get("projects").unwrap()).unwrap();
        let ids: Vec<&str> = stored.iter().filter_map(|e| e["id"].as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
        assert_eq!(stored[2], serde_json::from_str::<Value>(legacy).unwrap());
    }

    #[test]
    fn writes_refuse_to_overwrite_a_non_list() {
        let repo = repo();
        repo.backend().set("projects", "{not json").unwrap();

        let err = repo.append(project("1", "first")).unwrap_err();
        assert!(matches!(err, StorageError::NotAList { .. }));
        assert!(matches!(
            repo.replace(&project("1", "first")),
            Err(StorageError::NotAList { .. })
        ));
        assert_eq!(repo.backend().get("projects").as_deref(), Some("{not json"));
    }

    #[test]
    fn replace_swaps_only_the_matching_entry() {
        let repo = repo();
        repo.append(project("1", "first")).unwrap();
        let raw = repo.backend().get("projects").unwrap();
        let legacy = r#"{"id":"0","name":"legacy"}"#;
        repo.backend()
            .set("projects", &raw.replacen('[', &format!("[{},", legacy), 1))
            .unwrap();

        assert!(repo.replace(&project("1", "renamed")).unwrap());
        assert!(!repo.replace(&project("9", "missing")).unwrap());

        let stored: Vec<Value> =
            serde_json::from_str(&repo.backend().get("projects").unwrap()).unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0], serde_json::from_str::<Value>(legacy).unwrap());
        assert_eq!(repo.find_by_id::<Project>("1").map(|p| p.name), Some("renamed".into()));
    }

    #[test]
    fn unknown_field_types_survive_another_template_being_added() {
        let repo = repo();
        let older = r#"[{"id":"t1","name":"Old","description":"",
            "fields":[{"id":"f1","label":"Rating","type":"slider","required":false}],
            "createdAt":"2024-01-01T00:00:00Z"}]"#;
        repo.backend().set("templates", older).unwrap();

        repo.append(Template {
            id: "t2".to_string(),
            name: "New".to_string(),
            description: String::new(),
            fields: Vec::new(),
            created_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        })
        .unwrap();

        let stored: Vec<Value> =
            serde_json::from_str(&repo.backend().get("templates").unwrap()).unwrap();
        assert_eq!(stored[0]["fields"][0]["type"], "slider");
        let templates = repo.read_all::<Template>();
        assert_eq!(templates.len(), 2);
        assert!(templates[0].fields.is_empty());
    }

    #[test]
    fn append_keeps_insertion_order() {
        let repo = repo();
        repo.append(project("1", "first")).unwrap();
        repo.append(project("2", "second")).unwrap();

        let names: Vec<String> = repo
            .read_all::<Project>()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn find_by_id_and_replace_all() {
        let repo = repo();
        repo.append(project("1", "first")).unwrap();
        repo.append(project("2", "second")).unwrap();

        let mut all = repo.read_all::<Project>();
        all[1].name = "renamed".to_string();
        repo.replace_all(&all).unwrap();

        assert_eq!(
            repo.find_by_id::<Project>("2").map(|p| p.name),
            Some("renamed".to_string())
        );
        assert!(repo.find_by_id::<Project>("3").is_none());
    }

    #[test]
    fn collections_are_independent() {
        let repo = repo();
        repo.append(project("1", "first")).unwrap();
        assert!(repo.read_all::<Template>().is_empty());
        assert!(repo.read_all::<FormSubmission>().is_empty());
    }

    #[test]
    fn stored_json_uses_camel_case_keys() {
        let repo = repo();
        repo.append(project("1", "first")).unwrap();
        let raw = repo.backend().get("projects").unwrap();
        assert!(raw.contains("\"templateId\":\"t-1\""));
        assert!(raw.contains("\"createdAt\":\"2024-03-01T09:30:00Z\""));
    }

    #[test]
    fn reads_records_written_by_older_versions() {
        let repo = repo();
        repo.backend()
            .set(
                "templates",
                r#"[{"id":"1700000000000","name":"Survey","description":"",
                    "fields":[{"id":"1700000000001","label":"Notes","type":"text area","required":false,"options":[]}],
                    "createdAt":"2023-11-14T22:13:20.000Z"}]"#,
            )
            .unwrap();
        let templates = repo.read_all::<Template>();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].fields[0].kind, FieldKind::Textarea);
    }

    fn arb_value() -> impl Strategy<Value = FieldValue> {
        prop_oneof![
            ".{0,12}".prop_map(FieldValue::Text),
            proptest::collection::vec("[a-z]{1,6}", 0..4).prop_map(FieldValue::Choices),
        ]
    }

    fn arb_submission() -> impl Strategy<Value = FormSubmission> {
        (
            "[a-f0-9]{8}",
            proptest::collection::btree_map("[a-z]{1,4}", arb_value(), 0..5),
            0i64..2_000_000_000,
        )
            .prop_map(|(id, values, secs)| {
                let mut form = FormValues::new();
                for (field_id, value) in values {
                    form.insert(field_id, value);
                }
                FormSubmission {
                    id,
                    project_id: "p".to_string(),
                    template_id: "t".to_string(),
                    values: form,
                    submitted_at: Utc.timestamp_opt(secs, 0).unwrap(),
                }
            })
    }

    fn arb_template() -> impl Strategy<Value = Template> {
        let field = (
            "[a-z0-9]{1,8}",
            ".{0,10}",
            proptest::sample::select(FieldKind::ALL.to_vec()),
            any::<bool>(),
        )
            .prop_map(|(id, label, kind, required)| Field {
                id,
                label,
                kind,
                required,
                options: kind.uses_options().then(|| vec!["x".to_string()]),
            });
        (
            "[a-z0-9]{1,8}",
            ".{0,10}",
            proptest::collection::vec(field, 0..6),
        )
            .prop_map(|(id, name, fields)| Template {
                id,
                name,
                description: "d".to_string(),
                fields,
                created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            })
    }

    proptest! {
        #[test]
        fn submissions_survive_a_write(subs in proptest::collection::vec(arb_submission(), 0..4)) {
            let repo = repo();
            repo.replace_all(&subs).unwrap();
            prop_assert_eq!(repo.read_all::<FormSubmission>(), subs);
        }

        #[test]
        fn templates_survive_a_write(templates in proptest::collection::vec(arb_template(), 0..4)) {
            let repo = repo();
            repo.replace_all(&templates).unwrap();
            prop_assert_eq!(repo.read_all::<Template>(), templates);
        }
    }
}
