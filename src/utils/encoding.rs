//! Query string and multipart body encoders

use crate::constants::LOADFK_KEY;
use crate::error::AppError;
use crate::model::requests::{FormData, FormValue, Params};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::borrow::Cow;

/// Text form of a scalar query value; strings are sent without JSON quotes
fn query_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

/// Serializes parameters into a query string
///
/// Keys and values are percent-encoded and joined as `key=value` pairs with
/// `&`, in insertion order. Values are not recursed into: arrays and objects
/// are sent as their JSON text.
pub fn encode_query(params: &Params) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&query_value(value))
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Builds a multipart form with one field per key, in insertion order
///
/// Returns `None` when there is no body.
pub fn encode_body(body: Option<FormData>) -> Result<Option<Form>, AppError> {
    let Some(body) = body else {
        return Ok(None);
    };

    let mut form = Form::new();
    for (key, value) in body {
        form = match value {
            FormValue::Text(text) => form.text(key, text),
            FormValue::File {
                bytes,
                file_name,
                mime,
            } => {
                let mut part = Part::bytes(bytes);
                if let Some(file_name) = file_name {
                    part = part.file_name(file_name);
                }
                if let Some(mime) = mime {
                    part = part.mime_str(&mime)?;
                }
                form.part(key, part)
            }
        };
    }
    Ok(Some(form))
}

/// Replaces a present `loadfk` parameter with its JSON text
///
/// The server expects a string. Falsy values (`null`, `false`, `0`, `""`) are
/// left alone; everything else is serialized, strings included.
pub fn serialize_loadfk(params: &mut Params) -> Result<(), AppError> {
    if let Some(loadfk) = params.get_mut(LOADFK_KEY) {
        if is_truthy(loadfk) {
            *loadfk = Value::String(serde_json::to_string(loadfk)?);
        }
    }
    Ok(())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
