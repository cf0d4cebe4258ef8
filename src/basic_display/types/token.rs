/// A short-lived token, valid for an hour
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct ShortLivedToken {
    /// The access token
    pub access_token: String,

    /// The user the token belongs to
    #[serde(with = "crate::util::string_or_u64")]
    pub user_id: u64,
}

/// A long-lived token, valid for 60 days
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct LongLivedToken {
    /// The access token
    pub access_token: String,

    /// The token type, usually `bearer`
    pub token_type: Option<String>,

    /// Seconds until the token expires
    pub expires_in: Option<u64>,
}
