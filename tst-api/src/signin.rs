//! Interpretation of check-in responses.

use crate::error::ApiError;
use crate::types::SignResult;
use serde_json::Value;

/// Top-level `code` of a successful check-in.
pub const SUCCESS_CODE: f64 = 200.0;

/// Turn a check-in response body into the granted reward description.
///
/// The reward is the first entry's `rewardName`, or `"<point>积分"` when the
/// name is blank.
///
/// # Errors
///
/// - [`ApiError::Business`] when the body is well-formed but `code` is not 200.
/// - [`ApiError::Parse`] when the body is not JSON, is not an object, or a
///   200-coded body lacks a usable reward.
pub fn interpret_sign_response(body: &str) -> Result<String, ApiError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ApiError::Parse(format!("check-in response: {e}")))?;
    let Some(object) = value.as_object() else {
        return Err(ApiError::Parse(
            "check-in response is not a JSON object".into(),
        ));
    };

    let code = object.get("code");
    if code.and_then(Value::as_f64) != Some(SUCCESS_CODE) {
        return Err(ApiError::Business {
            code: code.map_or_else(|| "none".to_owned(), code_text),
            message: object.get("msg").and_then(Value::as_str).map(str::to_owned),
        });
    }

    let result = object
        .get("result")
        .cloned()
        .ok_or_else(|| ApiError::Parse("missing field `result`".into()))?;
    let result: SignResult =
        serde_json::from_value(result).map_err(|e| ApiError::Parse(format!("result: {e}")))?;
    let reward = result
        .reward_info_list
        .first()
        .ok_or_else(|| ApiError::Parse("rewardInfoList is empty".into()))?;

    if let Some(name) = reward.reward_name.as_deref().filter(|n| !n.is_empty()) {
        return Ok(name.to_owned());
    }

    match &reward.point {
        Some(Value::Number(n)) => Ok(format!("{n}积分")),
        Some(Value::String(s)) => Ok(format!("{s}积分")),
        _ => Err(ApiError::Parse(
            "reward has neither rewardName nor point".into(),
        )),
    }
}

fn code_text(code: &Value) -> String {
    match code {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn success(rewards: Value) -> String {
        json!({"code": 200, "msg": "成功", "result": {"rewardInfoList": rewards}}).to_string()
    }

    #[test]
    fn named_reward() {
        let body = success(json!([{"rewardName": "优惠券", "point": 0}]));
        assert_eq!(interpret_sign_response(&body).expect("reward"), "优惠券");
    }

    #[test]
    fn blank_name_falls_back_to_points() {
        let body = success(json!([{"rewardName": "", "point": 10}]));
        assert_eq!(interpret_sign_response(&body).expect("reward"), "10积分");
    }

    #[test]
    fn missing_name_with_string_points() {
        let body = success(json!([{"point": "5"}]));
        assert_eq!(interpret_sign_response(&body).expect("reward"), "5积分");
    }

    #[test]
    fn only_first_reward_counts() {
        let body = success(json!([{"rewardName": "", "point": 3}, {"rewardName": "奶茶"}]));
        assert_eq!(interpret_sign_response(&body).expect("reward"), "3积分");
    }

    #[test]
    fn non_200_code_is_business_error() {
        let body = json!({"code": 403, "msg": "签到已结束"}).to_string();
        match interpret_sign_response(&body) {
            Err(ApiError::Business { code, message }) => {
                assert_eq!(code, "403");
                assert_eq!(message.as_deref(), Some("签到已结束"));
            }
            other => panic!("expected business error, got {other:?}"),
        }
    }

    #[test]
    fn missing_code_is_business_error_without_message() {
        let body = json!({"result": null}).to_string();
        match interpret_sign_response(&body) {
            Err(ApiError::Business { code, message }) => {
                assert_eq!(code, "none");
                assert!(message.is_none());
            }
            other => panic!("expected business error, got {other:?}"),
        }
    }

    #[test]
    fn string_code_is_not_success() {
        let body = json!({"code": "200", "msg": "?"}).to_string();
        assert!(matches!(
            interpret_sign_response(&body),
            Err(ApiError::Business { .. })
        ));
    }

    #[test]
    fn empty_reward_list_is_parse_error() {
        let body = success(json!([]));
        let err = interpret_sign_response(&body).unwrap_err();
        assert!(err.to_string().contains("rewardInfoList"));
    }

    #[test]
    fn reward_without_name_or_points_is_parse_error() {
        let body = success(json!([{"rewardName": ""}]));
        assert!(matches!(
            interpret_sign_response(&body),
            Err(ApiError::Parse(_))
        ));
    }

    #[test]
    fn non_json_body_is_parse_error() {
        assert!(matches!(
            interpret_sign_response("Bad Gateway"),
            Err(ApiError::Parse(_))
        ));
    }

    #[test]
    fn non_object_body_is_parse_error() {
        assert!(matches!(
            interpret_sign_response("[1, 2]"),
            Err(ApiError::Parse(_))
        ));
    }
}
