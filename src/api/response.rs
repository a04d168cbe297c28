use serde::Deserialize;
use serde_json::Value;

use crate::{
    api::models::{AccessToken, BatteryData},
    error::UPSTREAM_NETWORK_ERROR,
    prelude::*,
};

/// Generic API response.
///
/// The body is first read into [`Value`] in order to log it, and only then parsed.
/// Login responses are not logged since they carry the access token.
#[derive(Deserialize)]
pub struct Response {
    /// Application-level status, not always present.
    code: Option<Value>,

    data: Option<Value>,
}

impl From<Response> for Result<AccessToken> {
    fn from(response: Response) -> Self {
        response
            .data
            .as_ref()
            .and_then(|data| data.get("AccessToken"))
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .map(AccessToken::from)
            .ok_or(Error::UnexpectedFormat("no `data.AccessToken` in the login response"))
    }
}

impl From<Response> for Result<BatteryData> {
    fn from(response: Response) -> Self {
        if response.code.as_ref().is_some_and(is_upstream_network_error) {
            return Err(Error::Upstream { code: UPSTREAM_NETWORK_ERROR });
        }
        match response.data {
            Some(Value::Array(systems)) if !systems.is_empty() => Ok(BatteryData(systems)),
            _ => Err(Error::UnexpectedFormat("expected a non-empty list in `data`")),
        }
    }
}

/// Numeric code equal to 9007, either as an integer or a float.
#[allow(clippy::float_cmp, clippy::cast_precision_loss)]
fn is_upstream_network_error(code: &Value) -> bool {
    code.as_f64().is_some_and(|code| code == UPSTREAM_NETWORK_ERROR as f64)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(body: &Value) -> Result<Response> {
        Ok(Response::deserialize(body)?)
    }

    #[test]
    fn test_access_token_ok() -> Result {
        let body = json!({
            "code": 200,
            "info": "Success",
            "data": {"AccessToken": "t0k3n", "ExpiresIn": 3600},
        });
        let token = Result::<AccessToken>::from(parse(&body)?)?;
        assert_eq!(token.as_str(), "t0k3n");
        Ok(())
    }

    #[test]
    fn test_access_token_missing() -> Result {
        for body in [
            json!({}),
            json!({"data": null}),
            json!({"data": {}}),
            json!({"data": {"AccessToken": ""}}),
        ] {
            let result = Result::<AccessToken>::from(parse(&body)?);
            assert!(matches!(result, Err(Error::UnexpectedFormat(_))), "{body}");
        }
        Ok(())
    }

    #[test]
    fn test_battery_data_ok() -> Result {
        let body = json!({
            "code": 200,
            "data": [{"sys_sn": "AL0001", "soc": 42.5}, {"sys_sn": "AL0002"}],
        });
        let battery_data = Result::<BatteryData>::from(parse(&body)?)?;
        assert_eq!(battery_data.len(), 2);
        assert_eq!(battery_data[0], json!({"sys_sn": "AL0001", "soc": 42.5}));
        Ok(())
    }

    #[test]
    fn test_upstream_error_wins_over_data() -> Result {
        let body = json!({"code": 9007, "data": [{"soc": 42}]});
        let result = Result::<BatteryData>::from(parse(&body)?);
        assert!(matches!(result, Err(Error::Upstream { code: 9007 })));
        Ok(())
    }

    #[test]
    fn test_upstream_error_as_float() -> Result {
        let body = json!({"code": 9007.0});
        let result = Result::<BatteryData>::from(parse(&body)?);
        assert!(matches!(result, Err(Error::Upstream { code: 9007 })));
        Ok(())
    }

    #[test]
    fn test_other_codes_are_ignored() -> Result {
        let body = json!({"code": "9007", "data": [{"soc": 42}]});
        let battery_data = Result::<BatteryData>::from(parse(&body)?)?;
        assert_eq!(battery_data.0, vec![json!({"soc": 42})]);
        Ok(())
    }

    #[test]
    fn test_battery_data_unexpected_format() -> Result {
        for body in
            [json!({}), json!({"data": []}), json!({"data": {"soc": 42}}), json!({"data": "none"})]
        {
            let result = Result::<BatteryData>::from(parse(&body)?);
            assert!(matches!(result, Err(Error::UnexpectedFormat(_))), "{body}");
        }
        Ok(())
    }

    #[test]
    fn test_not_an_object() {
        assert!(parse(&json!([1, 2, 3])).is_err());
    }
}
