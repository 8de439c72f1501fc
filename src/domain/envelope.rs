//! Generic OKX response envelope.
//!
//! Every OKX v5 REST response has the shape
//! `{"code": "0", "msg": "", "data": [...]}`. The records inside `data`
//! differ per endpoint and are kept as untyped JSON; callers pull out the
//! fields they need through checked accessors that fall back to defaults.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Balance reported when the exchange returns nothing for a currency.
pub const ZERO_BALANCE: &str = "0";

/// Decoded top-level response common to all OKX REST calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Exchange result code, `"0"` on success.
    #[serde(default, deserialize_with = "string_or_number")]
    pub code: String,
    /// Endpoint-specific result records.
    #[serde(default)]
    pub data: Vec<Value>,
    /// Human-readable message (empty on success).
    #[serde(default)]
    pub msg: String,
}

impl ResponseEnvelope {
    /// Available cash (`cashBal`) of `ccy` from a balance response.
    ///
    /// Looks at `data[0].details[*]` for the entry whose `ccy` matches.
    /// `cashBal` may be a string or a JSON number. Missing data, missing
    /// entry, or a missing/empty `cashBal` all yield `"0"`.
    pub fn cash_balance(&self, ccy: &str) -> String {
        self.data
            .first()
            .and_then(|account| account.get("details"))
            .and_then(Value::as_array)
            .and_then(|details| {
                details
                    .iter()
                    .find(|d| d.get("ccy").and_then(Value::as_str) == Some(ccy))
            })
            .and_then(|detail| detail.get("cashBal"))
            .and_then(|bal| match bal {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .filter(|bal| !bal.trim().is_empty())
            .unwrap_or_else(|| ZERO_BALANCE.to_string())
    }
}

impl std::fmt::Display for ResponseEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "code={} msg={}", self.code, self.msg),
        }
    }
}

/// OKX documents `code` as a string, but some error paths return a number.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn balance_envelope(details: Value) -> ResponseEnvelope {
        serde_json::from_value(json!({
            "code": "0",
            "msg": "",
            "data": [{ "details": details }],
        }))
        .unwrap()
    }

    #[test]
    fn test_cash_balance_present() {
        let env = balance_envelope(json!([{ "ccy": "BTC", "cashBal": "0.5" }]));
        assert_eq!(env.cash_balance("BTC"), "0.5");
    }

    #[test]
    fn test_cash_balance_numeric_field() {
        let env = balance_envelope(json!([{ "ccy": "BTC", "cashBal": 0.5 }]));
        assert_eq!(env.cash_balance("BTC"), "0.5");

        let env = balance_envelope(json!([{ "ccy": "BTC", "cashBal": 2 }]));
        assert_eq!(env.cash_balance("BTC"), "2");
    }

    #[test]
    fn test_cash_balance_absent_currency() {
        let env = balance_envelope(json!([{ "ccy": "BTC", "cashBal": "0.5" }]));
        assert_eq!(env.cash_balance("ETH"), "0");
    }

    #[test]
    fn test_cash_balance_empty_data() {
        let env: ResponseEnvelope =
            serde_json::from_str(r#"{"code":"0","msg":"","data":[]}"#).unwrap();
        assert_eq!(env.cash_balance("BTC"), "0");
        assert_eq!(env.cash_balance("USDT"), "0");
    }

    #[test]
    fn test_cash_balance_missing_field() {
        let env = balance_envelope(json!([{ "ccy": "BTC", "availBal": "1" }]));
        assert_eq!(env.cash_balance("BTC"), "0");

        let env = balance_envelope(json!([{ "ccy": "BTC", "cashBal": "" }]));
        assert_eq!(env.cash_balance("BTC"), "0");
    }

    #[test]
    fn test_cash_balance_picks_matching_entry() {
        let env = balance_envelope(json!([
            { "ccy": "USDT", "cashBal": "12.3" },
            { "ccy": "BTC", "cashBal": "0.00000001" },
        ]));
        assert_eq!(env.cash_balance("BTC"), "0.00000001");
    }

    #[test]
    fn test_error_envelope_decodes() {
        let env: ResponseEnvelope =
            serde_json::from_str(r#"{"code":50113,"msg":"Invalid Sign"}"#).unwrap();
        assert_eq!(env.code, "50113");
        assert!(env.data.is_empty());
        assert_eq!(env.cash_balance("BTC"), "0");
    }

    #[test]
    fn test_display_is_compact_json() {
        let env = ResponseEnvelope {
            code: "0".to_string(),
            data: vec![],
            msg: String::new(),
        };
        assert_eq!(env.to_string(), r#"{"code":"0","data":[],"msg":""}"#);
    }
}
