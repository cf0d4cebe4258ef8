use super::LegacyResponse;
use crate::{
    legacy::{
        options::{
            ModifyRelationshipOptions,
            RelationshipAction,
            RelationshipList,
            RelationshipListOptions,
            RelationshipOptions,
        },
        Legacy,
        LegacyClient,
        Relationship,
        User,
    },
    Error,
    RawResponse,
    Response,
};

/// Raw relationship endpoints
#[derive(Debug, Copy, Clone)]
pub struct RelationshipsRawEndpoint<'a> {
    client: &'a LegacyClient,
}

impl<'a> RelationshipsRawEndpoint<'a> {
    /// Make a new [`RelationshipsRawEndpoint`].
    pub fn new(client: &'a LegacyClient) -> Self {
        Self { client }
    }

    /// Get the users the authenticated user follows.
    pub async fn follows(&self, cursor: Option<&str>) -> Result<RawResponse, Error> {
        self.list(RelationshipList::Follows, cursor).await
    }

    /// Get the users following the authenticated user.
    pub async fn followed_by(&self, cursor: Option<&str>) -> Result<RawResponse, Error> {
        self.list(RelationshipList::FollowedBy, cursor).await
    }

    /// Get the users who asked to follow the authenticated user.
    pub async fn requested_by(&self, cursor: Option<&str>) -> Result<RawResponse, Error> {
        self.list(RelationshipList::RequestedBy, cursor).await
    }

    async fn list(
        &self,
        list: RelationshipList,
        cursor: Option<&str>,
    ) -> Result<RawResponse, Error> {
        let options = RelationshipListOptions {
            list,
            cursor: cursor.map(String::from),
        };
        self.list_with_options(&options).await
    }

    /// Get a relationship list.
    pub async fn list_with_options(
        &self,
        options: &RelationshipListOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Get the relationship with a user.
    pub async fn get(&self, user_id: u64) -> Result<RawResponse, Error> {
        let mut options = RelationshipOptions::new();
        options.user_id(user_id);
        self.get_with_options(&options).await
    }

    /// Get the relationship with a user.
    pub async fn get_with_options(
        &self,
        options: &RelationshipOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Change the relationship with a user.
    pub async fn modify(
        &self,
        user_id: u64,
        action: RelationshipAction,
    ) -> Result<RawResponse, Error> {
        let mut options = ModifyRelationshipOptions::new();
        options.user_id(user_id).action(action);
        self.modify_with_options(&options).await
    }

    /// Change the relationship with a user.
    pub async fn modify_with_options(
        &self,
        options: &ModifyRelationshipOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }
}

/// Relationship endpoints
#[derive(Debug, Copy, Clone)]
pub struct RelationshipsEndpoint<'a> {
    raw: RelationshipsRawEndpoint<'a>,
}

impl<'a> RelationshipsEndpoint<'a> {
    /// Make a new [`RelationshipsEndpoint`].
    pub fn new(raw: RelationshipsRawEndpoint<'a>) -> Self {
        Self { raw }
    }

    /// The raw endpoints
    pub fn raw(&self) -> &RelationshipsRawEndpoint<'a> {
        &self.raw
    }

    /// Get the users the authenticated user follows.
    pub async fn follows(&self, cursor: Option<&str>) -> Result<LegacyResponse<Vec<User>>, Error> {
        Response::parse::<Legacy>(self.raw.follows(cursor).await?)
    }

    /// Get the users following the authenticated user.
    pub async fn followed_by(
        &self,
        cursor: Option<&str>,
    ) -> Result<LegacyResponse<Vec<User>>, Error> {
        Response::parse::<Legacy>(self.raw.followed_by(cursor).await?)
    }

    /// Get the users who asked to follow the authenticated user.
    pub async fn requested_by(
        &self,
        cursor: Option<&str>,
    ) -> Result<LegacyResponse<Vec<User>>, Error> {
        Response::parse::<Legacy>(self.raw.requested_by(cursor).await?)
    }

    /// Get a relationship list.
    pub async fn list_with_options(
        &self,
        options: &RelationshipListOptions,
    ) -> Result<LegacyResponse<Vec<User>>, Error> {
        Response::parse::<Legacy>(self.raw.list_with_options(options).await?)
    }

    /// Get the relationship with a user.
    pub async fn get(&self, user_id: u64) -> Result<LegacyResponse<Relationship>, Error> {
        Response::parse::<Legacy>(self.raw.get(user_id).await?)
    }

    /// Get the relationship with a user.
    pub async fn get_with_options(
        &self,
        options: &RelationshipOptions,
    ) -> Result<LegacyResponse<Relationship>, Error> {
        Response::parse::<Legacy>(self.raw.get_with_options(options).await?)
    }

    /// Change the relationship with a user.
    pub async fn modify(
        &self,
        user_id: u64,
        action: RelationshipAction,
    ) -> Result<LegacyResponse<Relationship>, Error> {
        Response::parse::<Legacy>(self.raw.modify(user_id, action).await?)
    }

    /// Change the relationship with a user.
    pub async fn modify_with_options(
        &self,
        options: &ModifyRelationshipOptions,
    ) -> Result<LegacyResponse<Relationship>, Error> {
        Response::parse::<Legacy>(self.raw.modify_with_options(options).await?)
    }
}
