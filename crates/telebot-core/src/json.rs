//! Lenient, typed field access over a parsed JSON document.
//!
//! Bot API replies are read field by field: a missing key, a JSON `null` and a
//! value of the wrong shape all read as `None`. Decoders use `?` on required
//! fields so a value is either fully built or not built at all.

use serde_json::Value;

use crate::error::Result;

/// Parse a reply body into the tree every decoder works on.
pub fn parse(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

pub fn parse_slice(bytes: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Builds a value from a JSON node, or `None` if the node does not fit.
pub trait Decode: Sized {
    fn decode(data: JsonData<'_>) -> Option<Self>;
}

#[derive(Debug, Clone, Copy)]
pub struct JsonData<'a> {
    value: &'a Value,
}

impl<'a> JsonData<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Whether `key` is present at all, whatever its value.
    pub fn has(&self, key: &str) -> bool {
        self.value
            .as_object()
            .is_some_and(|object| object.contains_key(key))
    }

    pub fn child(&self, key: &str) -> Option<JsonData<'a>> {
        match self.value.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(JsonData::new(value)),
        }
    }

    pub fn get<T: Decode>(&self, key: &str) -> Option<T> {
        self.child(key).and_then(T::decode)
    }

    /// Like `get`, but falls back to the type's default when absent.
    pub fn get_or_default<T: Decode + Default>(&self, key: &str) -> T {
        self.get(key).unwrap_or_default()
    }

    pub fn items(&self) -> Option<impl Iterator<Item = JsonData<'a>>> {
        self.value
            .as_array()
            .map(|items| items.iter().map(JsonData::new))
    }
}

impl Decode for bool {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        data.value().as_bool()
    }
}

impl Decode for i64 {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        match data.value() {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl Decode for u64 {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        match data.value() {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl Decode for i32 {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        i64::decode(data).and_then(|n| i32::try_from(n).ok())
    }
}

impl Decode for u32 {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        u64::decode(data).and_then(|n| u32::try_from(n).ok())
    }
}

impl Decode for f64 {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        data.value().as_f64()
    }
}

impl Decode for String {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        data.value().as_str().map(str::to_string)
    }
}

/// Elements that do not decode are skipped; a non-array is `None`.
impl<T: Decode> Decode for Vec<T> {
    fn decode(data: JsonData<'_>) -> Option<Self> {
        Some(data.items()?.filter_map(T::decode).collect())
    }
}
