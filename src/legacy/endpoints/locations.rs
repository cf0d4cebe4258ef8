use super::LegacyResponse;
use crate::{
    legacy::{
        options::{
            LocationOptions,
            LocationRecentMediaOptions,
            LocationSearchOptions,
        },
        Legacy,
        LegacyClient,
        Location,
        Media,
    },
    Error,
    RawResponse,
    Response,
};

/// Raw location endpoints
#[derive(Debug, Copy, Clone)]
pub struct LocationsRawEndpoint<'a> {
    client: &'a LegacyClient,
}

impl<'a> LocationsRawEndpoint<'a> {
    /// Make a new [`LocationsRawEndpoint`].
    pub fn new(client: &'a LegacyClient) -> Self {
        Self { client }
    }

    /// Get a location by id.
    pub async fn get(&self, location_id: u64) -> Result<RawResponse, Error> {
        let mut options = LocationOptions::new();
        options.location_id(location_id);
        self.get_with_options(&options).await
    }

    /// Get a location.
    pub async fn get_with_options(&self, options: &LocationOptions) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Get recent media at a location.
    pub async fn recent_media(&self, location_id: u64) -> Result<RawResponse, Error> {
        let mut options = LocationRecentMediaOptions::new();
        options.location_id(location_id);
        self.recent_media_with_options(&options).await
    }

    /// Get recent media at a location.
    pub async fn recent_media_with_options(
        &self,
        options: &LocationRecentMediaOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }

    /// Search for locations near a point.
    pub async fn search(
        &self,
        lat: f64,
        lng: f64,
        distance: Option<u32>,
    ) -> Result<RawResponse, Error> {
        let options = LocationSearchOptions {
            lat: Some(lat),
            lng: Some(lng),
            distance,
            facebook_places_id: None,
        };
        self.search_with_options(&options).await
    }

    /// Search for locations.
    pub async fn search_with_options(
        &self,
        options: &LocationSearchOptions,
    ) -> Result<RawResponse, Error> {
        self.client.send(options.get_request()?).await
    }
}

/// Location endpoints
#[derive(Debug, Copy, Clone)]
pub struct LocationsEndpoint<'a> {
    raw: LocationsRawEndpoint<'a>,
}

impl<'a> LocationsEndpoint<'a> {
    /// Make a new [`LocationsEndpoint`].
    pub fn new(raw: LocationsRawEndpoint<'a>) -> Self {
        Self { raw }
    }

    /// The raw endpoints
    pub fn raw(&self) -> &LocationsRawEndpoint<'a> {
        &self.raw
    }

    /// Get a location by id.
    pub async fn get(&self, location_id: u64) -> Result<LegacyResponse<Location>, Error> {
        Response::parse::<Legacy>(self.raw.get(location_id).await?)
    }

    /// Get a location.
    pub async fn get_with_options(
        &self,
        options: &LocationOptions,
    ) -> Result<LegacyResponse<Location>, Error> {
        Response::parse::<Legacy>(self.raw.get_with_options(options).await?)
    }

    /// Get recent media at a location.
    pub async fn recent_media(
        &self,
        location_id: u64,
    ) -> Result<LegacyResponse<Vec<Media>>, Error> {
        Response::parse::<Legacy>(self.raw.recent_media(location_id).await?)
    }

    /// Get recent media at a location.
    pub async fn recent_media_with_options(
        &self,
        options: &LocationRecentMediaOptions,
    ) -> Result<LegacyResponse<Vec<Media>>, Error> {
        Response::parse::<Legacy>(self.raw.recent_media_with_options(options).await?)
    }

    /// Search for locations near a point.
    pub async fn search(
        &self,
        lat: f64,
        lng: f64,
        distance: Option<u32>,
    ) -> Result<LegacyResponse<Vec<Location>>, Error> {
        Response::parse::<Legacy>(self.raw.search(lat, lng, distance).await?)
    }

    /// Search for locations.
    pub async fn search_with_options(
        &self,
        options: &LocationSearchOptions,
    ) -> Result<LegacyResponse<Vec<Location>>, Error> {
        Response::parse::<Legacy>(self.raw.search_with_options(options).await?)
    }
}
