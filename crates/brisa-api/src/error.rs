use thiserror::Error;

/// The three ways a fetch can fail (upstream error, transport failure,
/// undecodable payload). No variant is ever retried.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Structured error returned by WeatherAPI with a non-success status.
    #[error("WeatherAPI: {message} ({code})")]
    Api { message: String, code: i64 },

    /// Connection, TLS, or timeout failure below the HTTP layer.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// A response body that does not match the documented schema.
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl WeatherError {
    /// Localization identifier for API error codes we know how to phrase.
    /// Unknown codes (and the other variants) get no key; the caller shows
    /// the raw message instead.
    pub fn locale_key(&self) -> Option<&'static str> {
        let Self::Api { code, .. } = self else {
            return None;
        };

        match code {
            1002 => Some("errors.api.key_not_provided"),
            1003 => Some("errors.api.query_missing"),
            1005 => Some("errors.api.invalid_url"),
            1006 => Some("errors.api.location_not_found"),
            2006 => Some("errors.api.invalid_key"),
            2007 => Some("errors.api.quota_exceeded"),
            2008 => Some("errors.api.key_disabled"),
            2009 => Some("errors.api.no_access"),
            9999 => Some("errors.api.internal"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn known_codes_have_locale_keys() {
        let err = WeatherError::Api {
            message: "API key provided is invalid".into(),
            code: 2006,
        };
        assert_eq!(err.locale_key(), Some("errors.api.invalid_key"));
    }

    #[test]
    fn unknown_codes_have_no_locale_key() {
        let err = WeatherError::Api {
            message: "mystery".into(),
            code: 4242,
        };
        assert_eq!(err.locale_key(), None);
    }

    #[test]
    fn api_display_includes_message_and_code() {
        let err = WeatherError::Api {
            message: "API key has been disabled".into(),
            code: 2008,
        };
        assert_eq!(err.to_string(), "WeatherAPI: API key has been disabled (2008)");
    }
}
