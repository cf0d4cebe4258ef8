use crate::{
    ApiRequest,
    Error,
};

/// A relationship list of the authenticated user
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum RelationshipList {
    /// Users the authenticated user follows
    #[default]
    Follows,

    /// Users following the authenticated user
    FollowedBy,

    /// Users who asked to follow the authenticated user
    RequestedBy,
}

impl RelationshipList {
    /// The endpoint path
    pub fn path(self) -> &'static str {
        match self {
            Self::Follows => "/users/self/follows",
            Self::FollowedBy => "/users/self/followed-by",
            Self::RequestedBy => "/users/self/requested-by",
        }
    }
}

/// A change to a relationship
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RelationshipAction {
    /// Follow the user
    Follow,

    /// Unfollow the user
    Unfollow,

    /// Approve a follow request
    Approve,

    /// Ignore a follow request
    Ignore,
}

impl RelationshipAction {
    /// The api name of this action
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Follow => "follow",
            Self::Unfollow => "unfollow",
            Self::Approve => "approve",
            Self::Ignore => "ignore",
        }
    }
}

impl std::str::FromStr for RelationshipAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "follow" => Ok(Self::Follow),
            "unfollow" => Ok(Self::Unfollow),
            "approve" => Ok(Self::Approve),
            "ignore" => Ok(Self::Ignore),
            _ => Err(format!("`{s}` is not a relationship action")),
        }
    }
}

/// Options for listing relationships
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipListOptions {
    /// The list
    pub list: RelationshipList,

    /// The cursor from the previous page
    pub cursor: Option<String>,
}

impl RelationshipListOptions {
    /// Make new options for a list.
    pub fn new(list: RelationshipList) -> Self {
        Self { list, cursor: None }
    }

    /// Set the cursor.
    pub fn cursor(&mut self, cursor: impl Into<String>) -> &mut Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Build the request.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let mut request = ApiRequest::get(self.list.path());
        request.append_query_opt("cursor", self.cursor.as_deref());
        Ok(request)
    }
}

/// Options for getting the relationship with a user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipOptions {
    /// The target user id
    pub user_id: Option<u64>,
}

impl RelationshipOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user id.
    pub fn user_id(&mut self, user_id: u64) -> &mut Self {
        self.user_id = Some(user_id);
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the user id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let user_id = self.user_id.ok_or(Error::MissingProperty("user_id"))?;
        Ok(ApiRequest::get(format!("/users/{user_id}/relationship")))
    }
}

/// Options for changing the relationship with a user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyRelationshipOptions {
    /// The target user id
    pub user_id: Option<u64>,

    /// The change to make
    pub action: Option<RelationshipAction>,
}

impl ModifyRelationshipOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user id.
    pub fn user_id(&mut self, user_id: u64) -> &mut Self {
        self.user_id = Some(user_id);
        self
    }

    /// Set the action.
    pub fn action(&mut self, action: RelationshipAction) -> &mut Self {
        self.action = Some(action);
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the user id or action is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let user_id = self.user_id.ok_or(Error::MissingProperty("user_id"))?;
        let action = self.action.ok_or(Error::MissingProperty("action"))?;

        let mut request = ApiRequest::post(format!("/users/{user_id}/relationship"));
        request.append_form("action", action.as_str());
        Ok(request)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn list_paths() {
        let request = RelationshipListOptions::new(RelationshipList::FollowedBy)
            .cursor("abc")
            .get_request()
            .expect("failed to build");

        assert!(request.url == "/users/self/followed-by");
        assert!(request.query_value("cursor") == Some("abc"));
    }

    #[test]
    fn modify_requires_everything() {
        let error = ModifyRelationshipOptions::new()
            .action(RelationshipAction::Follow)
            .get_request()
            .expect_err("built without a user id");
        assert!(matches!(error, Error::MissingProperty("user_id")));

        let error = ModifyRelationshipOptions::new()
            .user_id(1)
            .get_request()
            .expect_err("built without an action");
        assert!(matches!(error, Error::MissingProperty("action")));

        let request = ModifyRelationshipOptions::new()
            .user_id(1574083)
            .action(RelationshipAction::Unfollow)
            .get_request()
            .expect("failed to build");
        assert!(request.method == reqwest::Method::POST);
        assert!(request.url == "/users/1574083/relationship");
        assert!(request.form_value("action") == Some("unfollow"));
    }

    #[test]
    fn parse_action() {
        assert!("approve".parse::<RelationshipAction>() == Ok(RelationshipAction::Approve));
        assert!("block".parse::<RelationshipAction>().is_err());
    }
}
