use marquee_core::{ListColumn, MovieRecord, Table};
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// One element of a list column paired with the record it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplodedRow<'a> {
    /// Column the entity was taken from.
    pub column: ListColumn,
    /// The single list element.
    pub entity: &'a str,
    /// Source record; every other field is read from here.
    pub record: &'a MovieRecord,
}

impl<'a> ExplodedRow<'a> {
    /// Detaches the row from the table it borrows.
    pub fn to_entity_row(&self) -> EntityRow {
        EntityRow {
            column: self.column,
            entity: self.entity.to_string(),
            record: self.record.clone(),
        }
    }
}

/// Owned counterpart of [`ExplodedRow`], stored in reports.
///
/// Serializes as the record with the list column replaced by its singular
/// entity field (`castList` becomes `actor`, `directorList` becomes
/// `director`).
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRow {
    /// Column the entity was taken from.
    pub column: ListColumn,
    /// The single list element.
    pub entity: String,
    /// Copy of the source record.
    pub record: MovieRecord,
}

impl Serialize for EntityRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut value = serde_json::to_value(&self.record).map_err(S::Error::custom)?;
        if let Value::Object(map) = &mut value {
            map.remove(self.column.column_name());
            map.insert(
                self.column.entity_field().to_string(),
                Value::String(self.entity.clone()),
            );
        }
        value.serialize(serializer)
    }
}

/// Emits one row per element of `column`, in table then list order.
///
/// Records whose list is empty contribute no rows.
pub fn explode(table: &Table, column: ListColumn) -> Vec<ExplodedRow<'_>> {
    table
        .iter()
        .flat_map(|record| {
            column
                .values(record)
                .iter()
                .map(move |entity| ExplodedRow {
                    column,
                    entity,
                    record,
                })
        })
        .collect()
}
