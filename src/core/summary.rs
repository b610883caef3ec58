use crate::core::{Record, Schema, Summary};

/// Counts records and, when the schema names a numeric field, totals it.
/// Values that do not parse as an integer add nothing.
pub fn summarize(schema: &Schema, records: &[Record]) -> Summary {
    let total = schema.numeric_field.as_deref().map(|field| {
        records
            .iter()
            .filter_map(|r| r.values.get(field))
            .filter_map(|v| v.trim().parse::<i64>().ok())
            .fold(0i64, i64::wrapping_add)
    });

    Summary {
        count: records.len(),
        numeric_field: schema.numeric_field.clone(),
        total,
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "count={}", self.count)?;
        if let (Some(field), Some(total)) = (&self.numeric_field, self.total) {
            write!(f, ", {}_total={}", field, total)?;
        }
        Ok(())
    }
}
