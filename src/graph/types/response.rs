/// A user access token
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct AccessToken {
    /// The access token
    pub access_token: String,

    /// The token type, usually `bearer`
    pub token_type: Option<String>,

    /// Seconds until the token expires
    pub expires_in: Option<u64>,
}

/// A reference to another object by id
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ObjectRef {
    /// The object id
    pub id: String,
}

/// The response to a create request, holding the new object's id
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct IdResponse {
    /// The id of the created object
    pub id: String,
}

/// The response to an update or delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct SuccessResponse {
    /// Whether the request succeeded
    pub success: bool,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_responses() {
        let token: AccessToken =
            serde_json::from_str(r#"{"access_token":"EAAB","token_type":"bearer"}"#)
                .expect("failed to parse");
        assert!(token.access_token == "EAAB");
        assert!(token.expires_in.is_none());

        let created: IdResponse =
            serde_json::from_str(r#"{"id":"17858893269000001"}"#).expect("failed to parse");
        assert!(created.id == "17858893269000001");

        let success: SuccessResponse =
            serde_json::from_str(r#"{"success":true}"#).expect("failed to parse");
        assert!(success.success);
    }
}
