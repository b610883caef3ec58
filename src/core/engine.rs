use crate::core::codec::{format_record, parse_items};
use crate::core::summary::summarize;
use crate::core::{Record, RecordStore, Schema, Summary};
use crate::utils::error::Result;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::io::Write;

/// Runs the record commands against a store. Command output goes to the supplied writer.
pub struct RecordEngine<S: RecordStore> {
    store: S,
    schema: Schema,
}

impl<S: RecordStore> RecordEngine<S> {
    pub fn new(store: S, schema: Schema) -> Self {
        Self { store, schema }
    }

    pub fn init(&self) -> Result<()> {
        self.store.init()?;
        tracing::info!("Store initialized");
        Ok(())
    }

    pub fn add<T: AsRef<str>>(&self, items: &[T]) -> Result<Record> {
        let record = parse_items(&self.schema, items)?;
        self.store.append(&record)?;
        tracing::info!("Added record: {}", format_record(&self.schema, &record));
        Ok(record)
    }

    /// Writes every record, one per line, or a single JSON array. Returns the record count.
    pub fn list<W: Write>(&self, out: &mut W, json: bool) -> Result<usize> {
        let records = self.store.load()?;

        if json {
            let rows: Vec<_> = records
                .iter()
                .map(|record| OrderedRecord {
                    schema: &self.schema,
                    record,
                })
                .collect();
            serde_json::to_writer(&mut *out, &rows)?;
            writeln!(out)?;
        } else {
            for record in &records {
                writeln!(out, "{}", format_record(&self.schema, record))?;
            }
        }

        Ok(records.len())
    }

    pub fn summary<W: Write>(&self, out: &mut W, json: bool) -> Result<Summary> {
        let records = self.store.load()?;
        let summary = summarize(&self.schema, &records);

        if json {
            serde_json::to_writer(&mut *out, &summary)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", summary)?;
        }

        Ok(summary)
    }
}

/// JSON object view of a record with keys in schema order.
struct OrderedRecord<'a> {
    schema: &'a Schema,
    record: &'a Record,
}

impl Serialize for OrderedRecord<'_> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> std::result::Result<Z::Ok, Z::Error> {
        let mut map = serializer.serialize_map(Some(self.schema.fields.len()))?;
        for field in &self.schema.fields {
            map.serialize_entry(field, self.record.get(field))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RecordError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        records: RefCell<Vec<Record>>,
    }

    impl RecordStore for MemoryStore {
        fn init(&self) -> Result<()> {
            self.records.borrow_mut().clear();
            Ok(())
        }

        fn load(&self) -> Result<Vec<Record>> {
            Ok(self.records.borrow().clone())
        }

        fn append(&self, record: &Record) -> Result<()> {
            self.records.borrow_mut().push(record.clone());
            Ok(())
        }
    }

    fn engine() -> RecordEngine<MemoryStore> {
        RecordEngine::new(MemoryStore::default(), Schema::default())
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_add_then_list() {
        let engine = engine();
        engine.add(&["hex=1", "name=a"]).unwrap();

        let mut out = Vec::new();
        assert_eq!(engine.list(&mut out, false).unwrap(), 1);
        assert_eq!(output(out), "name=a|hex=1\n");
    }

    #[test]
    fn test_list_json_keeps_schema_order() {
        let engine = engine();
        engine.add(&["hex=ff", "name=red"]).unwrap();
        engine.add(&["name=blue"]).unwrap();

        let mut out = Vec::new();
        engine.list(&mut out, true).unwrap();
        assert_eq!(
            output(out),
            "[{\"name\":\"red\",\"hex\":\"ff\"},{\"name\":\"blue\",\"hex\":\"\"}]\n"
        );
    }

    #[test]
    fn test_summary_counts_records() {
        let engine = engine();
        let mut out = Vec::new();
        engine.summary(&mut out, false).unwrap();
        assert_eq!(output(out), "count=0\n");

        engine.add(&["name=a", "hex=1"]).unwrap();
        engine.add(&["name=b", "hex=2"]).unwrap();
        let mut out = Vec::new();
        let summary = engine.summary(&mut out, false).unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(output(out), "count=2\n");
    }

    #[test]
    fn test_summary_json_with_numeric_field() {
        let schema = Schema::new(vec!["name".into(), "hex".into()], Some("hex".into()));
        let engine = RecordEngine::new(MemoryStore::default(), schema);
        engine.add(&["name=a", "hex=1"]).unwrap();
        engine.add(&["name=b", "hex=2"]).unwrap();

        let mut out = Vec::new();
        engine.summary(&mut out, true).unwrap();
        assert_eq!(
            output(out),
            "{\"count\":2,\"numeric_field\":\"hex\",\"total\":3}\n"
        );
    }

    #[test]
    fn test_rejected_add_leaves_store_untouched() {
        let engine = engine();
        let err = engine.add(&["name=a|b"]).unwrap_err();
        assert!(matches!(err, RecordError::DelimiterInValue { .. }));
        assert!(engine.store.load().unwrap().is_empty());
    }

    #[test]
    fn test_init_clears_records() {
        let engine = engine();
        engine.add(&["name=a"]).unwrap();
        engine.init().unwrap();
        assert!(engine.store.load().unwrap().is_empty());
    }
}
