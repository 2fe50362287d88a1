//! Wire-format DTOs for the auth endpoints.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform `{code, msg, data}` wrapper: `code` 0 means success, 1 means
/// failure, independent of the HTTP status.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Envelope {
    pub code: i32,
    pub msg: String,
    pub data: Value,
}

impl Envelope {
    pub fn success(data: impl Into<Value>) -> Self {
        Envelope {
            code: 0,
            msg: "success".to_string(),
            data: data.into(),
        }
    }

    pub fn failure(msg: impl Into<String>) -> Self {
        Envelope {
            code: 1,
            msg: msg.into(),
            data: Value::String(String::new()),
        }
    }
}

/// Body of `POST /auth/check`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CheckTokenRequest {
    #[serde(rename = "deviceCode", default)]
    pub device_code: Option<String>,
}

/// Body of `POST /auth/checkGhu`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CheckGhuRequest {
    #[serde(default)]
    pub ghu: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_wire_shape() {
        let envelope = Envelope::success("ghu_abc".to_string());
        assert_eq!(
            serde_json::to_value(&envelope).expect("serialize"),
            json!({"code": 0, "msg": "success", "data": "ghu_abc"})
        );
    }

    #[test]
    fn failure_envelope_has_empty_string_data() {
        let envelope = Envelope::failure("token null");
        assert_eq!(
            serde_json::to_value(&envelope).expect("serialize"),
            json!({"code": 1, "msg": "token null", "data": ""})
        );
    }

    #[test]
    fn check_token_request_accepts_camel_case_field() {
        let parsed: CheckTokenRequest =
            serde_json::from_str(r#"{"deviceCode":"dc-1"}"#).expect("parse");
        assert_eq!(parsed.device_code.as_deref(), Some("dc-1"));
    }

    #[test]
    fn check_token_request_tolerates_empty_object() {
        let parsed: CheckTokenRequest = serde_json::from_str("{}").expect("parse");
        assert!(parsed.device_code.is_none());
    }
}
