//! # qmltr - JSON strings to translatable QML properties
//!
//! Build helper that walks a JSON document and exposes every string found
//! under a marker key (`"name"` by default) as a `qsTr` property of a QML
//! `Item`, so Qt's translation tooling can pick the strings up.
//!
//! ## Quick Start
//!
//! ```rust
//! use qmltr::{write_qml, ExtractConfig, PropertyExtractor};
//! use serde_json::json;
//!
//! # fn main() -> std::io::Result<()> {
//! let data = json!({
//!     "floppy": {"name": "5.25\" floppy"},
//!     "hdd": {"name": "Hard disk", "size": 20}
//! });
//!
//! let extractor = PropertyExtractor::new(ExtractConfig::default());
//! let mut buffer = Vec::new();
//! let properties = write_qml(&data, &mut buffer, &extractor)?;
//!
//! assert_eq!(properties.len(), 2);
//! // buffer holds:
//! // import QtQuick 2.0
//! // Item {
//! //     property string floppy_name: qsTr("5.25\" floppy")
//! //     property string hdd_name: qsTr("Hard disk")
//! // }
//! # Ok(())
//! # }
//! ```

use log::info;
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub mod error;
pub mod extractor;
pub mod types;
pub mod writer;

pub use error::ExtractError;
pub use extractor::{NameChecker, NameIssue, PropertyExtractor};
pub use types::{ExtractConfig, PrefixMode, Property};
pub use writer::{escape_qml_string, QmlWriter};

/// Read and parse a whole JSON document.
///
/// There is no nesting limit: serde_json's recursion limit is off and
/// serde_stacker grows the stack on demand. Hand very deep results to
/// [`release_document`] instead of dropping them.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value, ExtractError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| ExtractError::io(path, e))?;
    parse_document(&text).map_err(|e| ExtractError::parse(path, e))
}

fn parse_document(text: &str) -> serde_json::Result<Value> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    if let Err(e) = deserializer.end() {
        release_document(value);
        return Err(e);
    }
    Ok(value)
}

/// Drop a document without recursing; `Value`'s own drop recurses once per level
pub fn release_document(document: Value) {
    let mut stack = vec![document];
    while let Some(value) = stack.pop() {
        match value {
            Value::Array(items) => stack.extend(items),
            Value::Object(entries) => stack.extend(entries.into_iter().map(|(_, v)| v)),
            _ => {}
        }
    }
}

/// Write the QML document for `document` into `writer`, returning what was written
pub fn write_qml<W: Write>(
    document: &Value,
    writer: W,
    extractor: &PropertyExtractor,
) -> std::io::Result<Vec<Property>> {
    let mut qml = QmlWriter::new(writer)?;
    let mut properties = Vec::new();

    extractor.walk(document, |property| {
        qml.write_property(&property)?;
        properties.push(property);
        Ok::<(), std::io::Error>(())
    })?;

    qml.finish()?;
    Ok(properties)
}

/// Main entry point: convert the JSON file at `input` into a QML file at `output`.
///
/// The input is parsed completely before `output` is created, so a missing
/// or malformed input leaves the output path untouched. A write failure
/// part-way through leaves a truncated file behind.
pub fn extract_file<P, Q>(
    input: P,
    output: Q,
    config: ExtractConfig,
) -> Result<Vec<Property>, ExtractError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let output = output.as_ref();
    let document = load_document(input)?;
    let result = write_file(&document, output, config);
    release_document(document);

    let properties = result?;
    info!("wrote {} properties to {}", properties.len(), output.display());
    Ok(properties)
}

fn write_file(
    document: &Value,
    output: &Path,
    config: ExtractConfig,
) -> Result<Vec<Property>, ExtractError> {
    let file = File::create(output).map_err(|e| ExtractError::io(output, e))?;
    let extractor = PropertyExtractor::new(config);
    write_qml(document, BufWriter::new(file), &extractor)
        .map_err(|e| ExtractError::io(output, e))
}
