//! Converts OData JSON bodies into statement values.

use crosstitch_core::{
    stmt::{Value, ValueRecord},
    Error, Result,
};

/// Extracts the result rows from a response body: v4 wraps them in a
/// top-level `value` array, v2 in `d.results`.
pub(crate) fn rows_from_body(body: serde_json::Value) -> Result<Vec<ValueRecord>> {
    let rows = body
        .get("value")
        .or_else(|| body.pointer("/d/results"))
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| Error::transport_message("unrecognized response body shape"))?;

    rows.iter().map(record_from_json).collect()
}

fn record_from_json(row: &serde_json::Value) -> Result<ValueRecord> {
    let serde_json::Value::Object(fields) = row else {
        return Err(Error::transport_message(format!(
            "expected a JSON object row; got {row}"
        )));
    };

    let mut record = ValueRecord::new();
    for (name, value) in fields {
        // v2 payloads carry __metadata alongside the data fields
        if name.starts_with("__") {
            continue;
        }
        record.insert(&name[..], value_from_json(value)?);
    }
    Ok(record)
}

fn value_from_json(value: &serde_json::Value) -> Result<Value> {
    Ok(match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(v) => Value::Bool(*v),
        serde_json::Value::Number(v) => {
            let Some(v) = v.as_i64() else {
                return Err(Error::transport_message(format!(
                    "unsupported numeric value; value={v}"
                )));
            };
            Value::I64(v)
        }
        serde_json::Value::String(v) => Value::String(v.clone()),
        serde_json::Value::Array(items) => Value::List(
            items
                .iter()
                .map(value_from_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        serde_json::Value::Object(_) => Value::Record(record_from_json(value)?),
    })
}
