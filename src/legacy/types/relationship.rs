/// The relationship between the authenticated user and another user
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Relationship {
    /// How the authenticated user relates to the target
    pub outgoing_status: Option<OutgoingStatus>,

    /// How the target relates to the authenticated user.
    ///
    /// Not sent after modifying a relationship.
    pub incoming_status: Option<IncomingStatus>,

    /// Whether the target's account is private
    pub target_user_is_private: Option<bool>,
}

/// An outgoing relationship status
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutgoingStatus {
    /// The authenticated user follows the target
    Follows,

    /// The authenticated user asked to follow the target
    Requested,

    /// No relationship
    None,

    /// A status this library does not know about
    #[serde(other)]
    Unspecified,
}

/// An incoming relationship status
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomingStatus {
    /// The target follows the authenticated user
    FollowedBy,

    /// The target asked to follow the authenticated user
    RequestedBy,

    /// The authenticated user blocked the target
    BlockedByYou,

    /// No relationship
    None,

    /// A status this library does not know about
    #[serde(other)]
    Unspecified,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_relationship() {
        let relationship: Relationship = serde_json::from_str(
            r#"{"outgoing_status":"none","incoming_status":"requested_by","target_user_is_private":true}"#,
        )
        .expect("failed to parse");

        assert!(relationship.outgoing_status == Some(OutgoingStatus::None));
        assert!(relationship.incoming_status == Some(IncomingStatus::RequestedBy));
        assert!(relationship.target_user_is_private == Some(true));
    }

    #[test]
    fn unknown_status() {
        let relationship: Relationship =
            serde_json::from_str(r#"{"outgoing_status":"muted"}"#).expect("failed to parse");

        assert!(relationship.outgoing_status == Some(OutgoingStatus::Unspecified));
        assert!(relationship.incoming_status.is_none());
    }
}
