//! Movie records are caller-defined, so they travel as raw BSON documents.
//! The helpers here convert them to and from the JSON seen by clients.

use crate::utils::{AppError, AppResult};
use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde_json::{Map, Value};

pub type Movie = Document;

/// Parses a path identifier into an ObjectId; anything that is not a
/// 24-character hex string yields `None`.
pub fn parse_movie_id(raw: &str) -> Option<ObjectId> {
    ObjectId::parse_str(raw).ok()
}

/// Converts a client JSON object into a document ready for insertion.
pub fn movie_from_json(body: Value) -> AppResult<Movie> {
    match body {
        Value::Object(fields) => Ok(object_to_document(fields)),
        _ => Err(AppError::Validation("Movie must be a JSON object".to_string())),
    }
}

fn object_to_document(fields: Map<String, Value>) -> Document {
    fields
        .into_iter()
        .map(|(key, value)| (key, json_to_bson(value)))
        .collect()
}

/// Integers that fit in 64 bits stay integers; any other number is stored
/// as a double, so no JSON number is ever rejected.
pub fn json_to_bson(value: Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Bson::Int64(i),
            None => Bson::Double(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => Bson::String(s),
        Value::Array(items) => Bson::Array(items.into_iter().map(json_to_bson).collect()),
        Value::Object(fields) => Bson::Document(object_to_document(fields)),
    }
}

/// Renders a stored document as client JSON.
pub fn document_to_json(doc: Document) -> Value {
    Value::Object(
        doc.into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect(),
    )
}

/// ObjectIds become hex strings and dates RFC 3339 strings; everything else
/// uses relaxed extended JSON.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Value::from(dt.timestamp_millis()),
        },
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}
