//! The fixed record repeated to build every fixture file.

use crate::errors::FixtureError;

/// One fixture record: tab-indented opening brace, eight-space field
/// indent, four-space closing indent, no trailing newline. The repetition
/// count for a target size is derived from this string's byte length, so
/// any edit here changes every generated file.
pub const RECORD: &str = r#"	{
        "key1": "value",
        "array": [],
        "obj": {},
        "atomArray": [11201,1e112,true,false,null,"str"]
    }"#;

/// The record parsed to its canonical JSON value.
///
/// # Errors
/// Returns a JSON error if the constant is ever edited into invalid JSON.
pub fn record_value() -> Result<serde_json::Value, FixtureError> {
    Ok(serde_json::from_str(RECORD)?)
}
