//! Structured serialisation of failures.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::types::Failure;

impl Serialize for Failure {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let causes: Vec<String> = self.chain().skip(1).map(Self::message).collect();
        let mut report = serializer.serialize_struct("Failure", 4)?;
        report.serialize_field("kind", &self.kind())?;
        report.serialize_field("message", &self.message())?;
        report.serialize_field("type_name", &self.type_name())?;
        report.serialize_field("causes", &causes)?;
        report.end()
    }
}
