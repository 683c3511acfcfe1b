use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

/// Core inventory record, serialized with the camelCase field names clients use.
///
/// Quantities and prices are `f64`; whole values go out as JSON integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub product_name: String,
    /// Unique across the store, compared case-insensitively.
    pub sku: String,
    pub description: String,
    pub category: String,
    #[serde(serialize_with = "whole_or_fraction")]
    pub available_qty: f64,
    pub unit: String,
    #[serde(serialize_with = "whole_or_fraction")]
    pub cost: f64,
    #[serde(serialize_with = "whole_or_fraction")]
    pub mrp: f64,
    pub notes: String,
    pub supplier: String,
    pub location: String,
    #[serde(serialize_with = "whole_or_fraction")]
    pub min_stock: f64,
    #[serde(serialize_with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// At or below the configured minimum.
    pub fn is_low_stock(&self) -> bool {
        self.available_qty <= self.min_stock
    }

    pub fn is_in_stock(&self) -> bool {
        self.available_qty > 0.0
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.available_qty == 0.0
    }
}

fn iso_millis<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn whole_or_fraction<S>(n: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // Exact in f64 up to 2^53.
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*n as i64)
    } else {
        serializer.serialize_f64(*n)
    }
}

/// Aggregate counts over the whole store. Buckets overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub total_products: usize,
    pub in_stock_count: usize,
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// A numeric field as clients actually send it: a JSON number, a numeric
/// string, or something else entirely.
///
/// Decoded from the raw JSON text so that numbers outside the `f64` range
/// (`1e400`) become infinite instead of failing the whole body.
#[derive(Debug, Clone, PartialEq)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl<'de> Deserialize<'de> for LooseNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Ok(LooseNumber::from_json_text(raw.get()))
    }
}

impl LooseNumber {
    fn from_json_text(raw: &str) -> Self {
        match raw.as_bytes().first() {
            Some(b'-' | b'0'..=b'9') => LooseNumber::Number(raw.parse().unwrap_or(f64::NAN)),
            Some(b'"') => match serde_json::from_str(raw) {
                Ok(text) => LooseNumber::Text(text),
                Err(_) => LooseNumber::Other(serde_json::Value::Null),
            },
            _ => LooseNumber::Other(serde_json::from_str(raw).unwrap_or_default()),
        }
    }

    /// The finite value this field holds, if any.
    pub fn finite(&self) -> Option<f64> {
        let value = match self {
            LooseNumber::Number(n) => *n,
            LooseNumber::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return None;
                }
                s.parse::<f64>().ok()?
            }
            LooseNumber::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

/// Absent, blank or non-finite input falls back to `default`.
pub fn number_or(field: &Option<LooseNumber>, default: f64) -> f64 {
    field.as_ref().and_then(LooseNumber::finite).unwrap_or(default)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub product_name: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub available_qty: Option<LooseNumber>,
    pub unit: Option<String>,
    pub cost: Option<LooseNumber>,
    pub mrp: Option<LooseNumber>,
    pub notes: Option<String>,
    pub supplier: Option<String>,
    pub location: Option<String>,
    pub min_stock: Option<LooseNumber>,
}

impl CreateProduct {
    /// Names of required fields that are absent or blank, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [("productName", &self.product_name), ("sku", &self.sku)]
            .into_iter()
            .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
            .map(|(name, _)| name)
            .collect()
    }
}
