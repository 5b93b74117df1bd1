mod property_tests;

use lp_core::AuthHeaders;

use serde_json::Value;

pub(crate) fn headers(pairs: &[(&str, Value)]) -> AuthHeaders {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}
