//! Writing a declarative config back out
//!
//! Records are written in the order packages, channels, bundles, others.
//! JSON output is a stream of objects indented with
//! [`INDENT`](crate::diagnostic::INDENT), one after another; YAML output is
//! one document per record.

use std::io::Write;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::DeclarativeConfig;
use crate::diagnostic::INDENT;
use crate::error::{Result, entity::encode_failed};

impl DeclarativeConfig {
    /// Write every record as indented JSON, each followed by a newline
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        for package in &self.packages {
            write_json_record(&mut writer, package)?;
        }
        for channel in &self.channels {
            write_json_record(&mut writer, channel)?;
        }
        for bundle in &self.bundles {
            write_json_record(&mut writer, bundle)?;
        }
        for meta in &self.others {
            write_json_record(&mut writer, &meta.value()?)?;
        }
        Ok(())
    }

    /// Serialize every record into a JSON object stream
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_json(&mut buf)?;
        String::from_utf8(buf).map_err(|e| encode_failed("declarative config", e.to_string()))
    }

    /// Serialize every record as a YAML document, separated by `---`
    pub fn to_yaml(&self) -> Result<String> {
        let mut documents = Vec::with_capacity(self.len());
        for package in &self.packages {
            documents.push(serde_yaml::to_string(package)?);
        }
        for channel in &self.channels {
            documents.push(serde_yaml::to_string(channel)?);
        }
        for bundle in &self.bundles {
            documents.push(serde_yaml::to_string(bundle)?);
        }
        for meta in &self.others {
            documents.push(serde_yaml::to_string(&meta.value()?)?);
        }
        Ok(documents.join("---\n"))
    }
}

fn write_json_record<W: Write, T: Serialize>(writer: &mut W, record: &T) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(INDENT.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut *writer, formatter);
    record
        .serialize(&mut serializer)
        .map_err(|e| encode_failed("record", e.to_string()))?;
    writer.write_all(b"\n")?;
    Ok(())
}
