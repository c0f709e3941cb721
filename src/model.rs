//! Payload types returned by the analytics backend.
//!
//! Values are decoded one by one: a value of the wrong type is coerced or
//! left unset, and never fails the rest of the payload.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One row of `/oldata/balancebytype`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AccountTypeBalance {
    #[serde(deserialize_with = "lenient_string")]
    pub account_type: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub balance: f64,
    #[serde(deserialize_with = "lenient_count")]
    pub count: u64,
}

/// One row of `/oldata/supplyliquidity`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct LiquidityBucket {
    #[serde(deserialize_with = "lenient_string")]
    pub wallet_type_name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub balance: f64,
}

/// The `/oldata/tokenomics` record.
///
/// Every scalar is optional: a key missing from the response, or holding
/// something that is not a number, is kept unset.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TokenomicsSummary {
    #[serde(deserialize_with = "lenient_scalar")]
    pub total_balance: Option<f64>,
    #[serde(deserialize_with = "lenient_scalar")]
    pub total_addr_cnt: Option<f64>,
    #[serde(deserialize_with = "lenient_scalar")]
    pub top10_balance: Option<f64>,
    #[serde(deserialize_with = "lenient_scalar")]
    pub top100_balance: Option<f64>,
    #[serde(deserialize_with = "lenient_scalar")]
    pub top10_balance_nv: Option<f64>,
    #[serde(deserialize_with = "lenient_scalar")]
    pub top10_perc: Option<f64>,
    #[serde(deserialize_with = "lenient_scalar")]
    pub top100_perc: Option<f64>,
    #[serde(deserialize_with = "lenient_scalar")]
    pub top10_nv_perc: Option<f64>,
    #[serde(deserialize_with = "lenient_scalar")]
    pub sum_bal_ex_com: Option<f64>,
    #[serde(deserialize_with = "lenient_scalar")]
    pub sum_bal_ex_com_val: Option<f64>,
    #[serde(deserialize_with = "lenient_scalar")]
    pub addr_cnt_bal_gt1: Option<f64>,
    #[serde(deserialize_with = "lenient_scalar")]
    pub bal_community: Option<f64>,
    #[serde(deserialize_with = "lenient_scalar")]
    pub bal_slow: Option<f64>,
    #[serde(deserialize_with = "lenient_scalar")]
    pub bal_liquid: Option<f64>,
    #[serde(deserialize_with = "lenient_scalar")]
    pub cnt_community: Option<f64>,
    #[serde(deserialize_with = "lenient_scalar")]
    pub cnt_slow: Option<f64>,
    #[serde(deserialize_with = "lenient_scalar")]
    pub cnt_liquid: Option<f64>,
    #[serde(deserialize_with = "lenient_scalar")]
    pub active_set_cnt: Option<f64>,
    #[serde(deserialize_with = "lenient_scalar")]
    pub validator_cnt: Option<f64>,
}

/// A number, or a string holding one. Anything else is `None`.
fn scalar(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

fn lenient_scalar<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar(&value))
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar(&value).unwrap_or_default())
}

/// Counts sent as floats are truncated; negative or non-numeric counts are 0.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if let Some(n) = value.as_u64() {
        return Ok(n);
    }
    Ok(scalar(&value)
        .filter(|v| *v >= 0.0)
        .map(|v| v.trunc() as u64)
        .unwrap_or_default())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    /// Keys read from the `/oldata/tokenomics` response, in display order.
    const TOKENOMICS_FIELDS: [&str; 19] = [
        "total_balance",
        "total_addr_cnt",
        "top10_balance",
        "top100_balance",
        "top10_balance_nv",
        "top10_perc",
        "top100_perc",
        "top10_nv_perc",
        "sum_bal_ex_com",
        "sum_bal_ex_com_val",
        "addr_cnt_bal_gt1",
        "bal_community",
        "bal_slow",
        "bal_liquid",
        "cnt_community",
        "cnt_slow",
        "cnt_liquid",
        "active_set_cnt",
        "validator_cnt",
    ];

    #[test]
    // Rows with missing keys fall back to defaults instead of failing the fetch.
    fn test_rows_tolerate_missing_keys() {
        let rows: Vec<AccountTypeBalance> =
            serde_json::from_str(r#"[{"account_type": "community"}, {"balance": 12.5}]"#)
                .unwrap();
        assert_eq!(rows[0].account_type, "community");
        assert_eq!(rows[0].balance, 0.0);
        assert_eq!(rows[1].account_type, "");
        assert_eq!(rows[1].balance, 12.5);
    }

    #[test]
    // Every field of the tokenomics response is read under its wire name.
    fn test_summary_reads_every_listed_key() {
        let payload: serde_json::Map<String, serde_json::Value> = TOKENOMICS_FIELDS
            .iter()
            .enumerate()
            .map(|(i, key)| (key.to_string(), serde_json::json!(i + 1)))
            .collect();
        let summary: TokenomicsSummary =
            serde_json::from_value(serde_json::Value::Object(payload)).unwrap();

        let written = serde_json::to_value(&summary).unwrap();
        let written = written.as_object().unwrap();
        let written_keys: BTreeSet<&str> = written.keys().map(String::as_str).collect();
        let listed_keys: BTreeSet<&str> = TOKENOMICS_FIELDS.iter().copied().collect();
        assert_eq!(written_keys, listed_keys);

        for (i, key) in TOKENOMICS_FIELDS.iter().enumerate() {
            assert_eq!(written[*key], serde_json::json!((i + 1) as f64), "{key}");
        }
    }

    #[test]
    // Absent keys stay unset.
    fn test_summary_missing_keys_are_unset() {
        let summary: TokenomicsSummary =
            serde_json::from_str(r#"{"total_balance": 1000}"#).unwrap();
        assert_eq!(summary.total_balance, Some(1000.0));
        assert_eq!(summary.bal_liquid, None);
    }

    #[test]
    // One bad value in a row leaves the rest of the payload intact.
    fn test_rows_tolerate_bad_values() {
        let rows: Vec<AccountTypeBalance> = serde_json::from_str(
            r#"[
                {"account_type": "A", "balance": 100, "count": 5},
                {"account_type": "B", "balance": null, "count": 3},
                {"account_type": "C", "balance": "250.5", "count": 5.0},
                {"account_type": null, "balance": true, "count": -2}
            ]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].balance, 100.0);
        assert_eq!(rows[1].balance, 0.0);
        assert_eq!(rows[1].count, 3);
        assert_eq!(rows[2].balance, 250.5);
        assert_eq!(rows[2].count, 5);
        assert_eq!(rows[3].account_type, "");
        assert_eq!(rows[3].balance, 0.0);
        assert_eq!(rows[3].count, 0);

        let buckets: Vec<LiquidityBucket> = serde_json::from_str(
            r#"[{"wallet_type_name": 7, "balance": "x"}, {"wallet_type_name": "liquid", "balance": 9}]"#,
        )
        .unwrap();
        assert_eq!(buckets[0].wallet_type_name, "7");
        assert_eq!(buckets[0].balance, 0.0);
        assert_eq!(buckets[1].balance, 9.0);
    }

    #[test]
    // A malformed scalar is unset; the other scalars of the record survive.
    fn test_summary_tolerates_bad_scalars() {
        let summary: TokenomicsSummary = serde_json::from_str(
            r#"{"total_balance": 1000, "bal_liquid": "250", "bal_slow": null,
                "cnt_community": "n/a", "active_set_cnt": {"x": 1}, "validator_cnt": 120.0}"#,
        )
        .unwrap();
        assert_eq!(summary.total_balance, Some(1000.0));
        assert_eq!(summary.bal_liquid, Some(250.0));
        assert_eq!(summary.bal_slow, None);
        assert_eq!(summary.cnt_community, None);
        assert_eq!(summary.active_set_cnt, None);
        assert_eq!(summary.validator_cnt, Some(120.0));
    }
}
