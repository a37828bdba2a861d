//! Scene file serialization
//!
//! Writes entity blocks in the `{` / `"key" "value"` / `}` layout the
//! downstream loader parses line by line. No escaping is performed; callers
//! must not supply values containing `"`.

use std::io::Write;

use crate::entity::Entity;
use crate::error::SceneError;
use crate::record::EntityRecord;

/// Serialize one record as a `{`/`}`-delimited block
pub fn write_record<W: Write>(writer: &mut W, record: &EntityRecord) -> Result<(), SceneError> {
    writeln!(writer, "{{")?;
    for (key, value) in record.fields() {
        writeln!(writer, "\"{key}\" \"{value}\"")?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}

/// Serialize a sequence of entities in order
pub fn write_scene<W: Write>(writer: &mut W, entities: &[Entity]) -> Result<(), SceneError> {
    for entity in entities {
        write_record(writer, &entity.to_record())?;
    }
    Ok(())
}
