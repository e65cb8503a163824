use crate::types::Property;
use std::io::{self, Write};

pub const HEADER: &str = "import QtQuick 2.0\nItem {\n";
pub const FOOTER: &str = "}\n";

/// Escape a value for a QML double-quoted string literal.
///
/// Backslashes go first, otherwise the backslashes added for quotes
/// would be doubled again.
pub fn escape_qml_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Writes properties as a QML `Item` of `qsTr` string properties
pub struct QmlWriter<W: Write> {
    writer: W,
}

impl<W: Write> QmlWriter<W> {
    /// Start a document; the header is written immediately
    pub fn new(mut writer: W) -> io::Result<Self> {
        writer.write_all(HEADER.as_bytes())?;
        Ok(QmlWriter { writer })
    }

    pub fn write_property(&mut self, property: &Property) -> io::Result<()> {
        writeln!(
            self.writer,
            "    property string {}: qsTr(\"{}\")",
            property.name,
            escape_qml_string(&property.value)
        )
    }

    /// Write the footer and flush, handing back the inner writer
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.write_all(FOOTER.as_bytes())?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}
