//! Wire types for the `/servicos` collection.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// A catalog service as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Service {
    /// Server-assigned identifier (string or number on the wire)
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nome: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub descricao: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub preco: Option<f64>,
    /// Duration in minutes, absent on some legacy records
    #[serde(default, deserialize_with = "lenient_i64")]
    pub duracao: Option<i64>,
    /// Entries without a string `url` are dropped
    #[serde(default, deserialize_with = "lenient_images")]
    pub imagens: Vec<ImageRef>,
}

impl Service {
    /// Duration shown in the edit field; missing durations render as zero.
    pub fn duration_or_zero(&self) -> i64 {
        self.duracao.unwrap_or(0)
    }
}

/// Decode a list response record by record.
///
/// A record that does not decode (e.g. a `null` id) is logged and skipped so
/// the rest of the catalog still renders.
pub fn decode_services(items: Vec<Value>) -> Vec<Service> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<Service>(item) {
            Ok(service) => Some(service),
            Err(e) => {
                warn!("Skipping service record {}: {}", index, e);
                None
            }
        })
        .collect()
}

/// A stored image reference.
///
/// The API returns `{ "url": ... }` objects; bare strings are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Object { url: String },
    Url(String),
}

impl ImageRef {
    pub fn url(&self) -> &str {
        match self {
            ImageRef::Object { url } | ImageRef::Url(url) => url,
        }
    }
}

/// Request body for create (POST) and full-replace update (PATCH).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePayload {
    pub nome: String,
    pub descricao: String,
    pub preco: f64,
    pub duracao: i64,
    /// Stored URLs first, then newly encoded `data:` URIs
    pub imagens: Vec<String>,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_images<'de, D>(deserializer: D) -> Result<Vec<ImageRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<ImageRef>(entry) {
            Ok(image) => Some(image),
            Err(_) => {
                warn!("Ignoring image entry without a url");
                None
            }
        })
        .collect())
}

fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("unsupported id value: {}", other))),
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(s) => Ok(crate::utils::number::parse_leading_float(&s)),
        other => Err(de::Error::custom(format!("unsupported number value: {}", other))),
    }
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64))),
        Value::String(s) => Ok(crate::utils::number::parse_leading_int(&s)),
        other => Err(de::Error::custom(format!("unsupported number value: {}", other))),
    }
}
