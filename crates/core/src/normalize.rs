use std::collections::BTreeMap;

use alloy::{
    dyn_abi::DynSolValue,
    primitives::{Address, U256},
};
use tracing::trace;

use crate::layout::FieldIndex;

/// Output of one accessor call: always positional, optionally named.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawResult {
    positional: Vec<DynSolValue>,
    named: BTreeMap<String, DynSolValue>,
}

impl RawResult {
    pub fn new(positional: Vec<DynSolValue>, named: BTreeMap<String, DynSolValue>) -> Self {
        Self { positional, named }
    }

    pub fn positional(values: Vec<DynSolValue>) -> Self {
        Self {
            positional: values,
            named: BTreeMap::new(),
        }
    }

    /// Pair decoded values with ABI output names; empty names stay positional only.
    pub fn from_outputs<'a>(
        values: Vec<DynSolValue>,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let named = names
            .into_iter()
            .zip(values.iter())
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, value)| (name.to_owned(), value.clone()))
            .collect();
        Self {
            positional: values,
            named,
        }
    }

    pub fn with_name(mut self, name: &str, value: DynSolValue) -> Self {
        self.named.insert(name.to_owned(), value);
        self
    }

    pub fn by_name(&self, name: &str) -> Option<&DynSolValue> {
        self.named.get(name)
    }

    pub fn at(&self, position: usize) -> Option<&DynSolValue> {
        self.positional.get(position)
    }
}

/// Accessor output keyed by field name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedRecord {
    fields: BTreeMap<&'static str, DynSolValue>,
}

/// Resolve every field of `table` against `raw`.
///
/// A named value wins only when it is populated; otherwise the positional
/// slot is used. Fields missing at both stay unset.
pub fn normalize(raw: &RawResult, table: &[FieldIndex]) -> NormalizedRecord {
    trace!(?raw, "normalizing accessor output");

    let fields = table
        .iter()
        .filter_map(|field| {
            raw.by_name(field.name)
                .filter(|value| is_populated(value))
                .or_else(|| raw.at(field.position))
                .map(|value| (field.name, value.clone()))
        })
        .collect();

    NormalizedRecord { fields }
}

fn is_populated(value: &DynSolValue) -> bool {
    match value {
        DynSolValue::String(text) => !text.is_empty(),
        DynSolValue::Bytes(bytes) => !bytes.is_empty(),
        _ => true,
    }
}

impl NormalizedRecord {
    /// Combine records from separate accessors; `other` wins on overlap.
    pub fn merge(mut self, other: Self) -> Self {
        self.fields.extend(other.fields);
        self
    }

    pub fn get(&self, name: &str) -> Option<&DynSolValue> {
        self.fields.get(name)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn uint(&self, name: &str) -> Option<U256> {
        self.get(name)?.as_uint().map(|(value, _)| value)
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.get(name)?.as_bool()
    }

    pub fn address(&self, name: &str) -> Option<Address> {
        self.get(name)?.as_address()
    }

    /// Strings as-is; `bytes32` labels with trailing zero padding removed.
    pub fn text(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            DynSolValue::String(text) => Some(text.clone()),
            DynSolValue::FixedBytes(word, size) => {
                let bytes = &word[..(*size).min(32)];
                let end = bytes.iter().rposition(|byte| *byte != 0).map_or(0, |i| i + 1);
                Some(String::from_utf8_lossy(&bytes[..end]).into_owned())
            }
            _ => None,
        }
    }

    pub fn addresses(&self, name: &str) -> Option<Vec<Address>> {
        match self.get(name)? {
            DynSolValue::Array(items) | DynSolValue::FixedArray(items) => {
                Some(items.iter().filter_map(DynSolValue::as_address).collect())
            }
            _ => None,
        }
    }

    pub fn list_len(&self, name: &str) -> Option<usize> {
        match self.get(name)? {
            DynSolValue::Array(items) | DynSolValue::FixedArray(items) => Some(items.len()),
            _ => None,
        }
    }
}
