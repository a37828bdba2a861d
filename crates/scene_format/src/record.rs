//! Untyped entity record
//!
//! The scene file format is schema-free: every block is just an ordered list
//! of string fields. `EntityRecord` preserves insertion order because the
//! emitted file is meant to be human-diffable; the downstream loader does not
//! care about ordering.

/// One entity block as an ordered list of string field pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityRecord {
    fields: Vec<(String, String)>,
}

impl EntityRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, preserving insertion order
    ///
    /// Values must not contain `"`; the serializer performs no escaping.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.push((key.into(), value.into()));
    }

    /// Builder-style variant of [`push`](Self::push)
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Iterate fields in insertion order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Value of the `classname` field, if present
    pub fn classname(&self) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == "classname")
            .map(|(_, v)| v.as_str())
    }

    /// Value of an arbitrary field, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of fields in the record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_keep_insertion_order() {
        let record = EntityRecord::new()
            .with("classname", "skybox")
            .with("front", "pz.png")
            .with("back", "nz.png");

        let keys: Vec<&str> = record.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["classname", "front", "back"]);
    }

    #[test]
    fn classname_lookup() {
        let record = EntityRecord::new().with("classname", "point_light");
        assert_eq!(record.classname(), Some("point_light"));
        assert_eq!(EntityRecord::new().classname(), None);
    }

    #[test]
    fn get_returns_first_match() {
        let record = EntityRecord::new()
            .with("origin", "0 0 0")
            .with("scale", "3 3 3");
        assert_eq!(record.get("scale"), Some("3 3 3"));
        assert_eq!(record.get("path"), None);
    }
}
