use crate::{
    ApiRequest,
    Error,
};

/// Options for getting a location
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationOptions {
    /// The location id
    pub location_id: Option<u64>,
}

impl LocationOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the location id.
    pub fn location_id(&mut self, location_id: u64) -> &mut Self {
        self.location_id = Some(location_id);
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the location id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let location_id = self
            .location_id
            .ok_or(Error::MissingProperty("location_id"))?;
        Ok(ApiRequest::get(format!("/locations/{location_id}")))
    }
}

/// Options for getting recent media at a location
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationRecentMediaOptions {
    /// The location id
    pub location_id: Option<u64>,

    /// Return media later than this id
    pub min_id: Option<String>,

    /// Return media earlier than this id
    pub max_id: Option<String>,
}

impl LocationRecentMediaOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the location id.
    pub fn location_id(&mut self, location_id: u64) -> &mut Self {
        self.location_id = Some(location_id);
        self
    }

    /// Set the min id.
    pub fn min_id(&mut self, min_id: impl Into<String>) -> &mut Self {
        self.min_id = Some(min_id.into());
        self
    }

    /// Set the max id.
    pub fn max_id(&mut self, max_id: impl Into<String>) -> &mut Self {
        self.max_id = Some(max_id.into());
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if the location id is not set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let location_id = self
            .location_id
            .ok_or(Error::MissingProperty("location_id"))?;

        let mut request = ApiRequest::get(format!("/locations/{location_id}/media/recent"));
        request
            .append_query_opt("min_id", self.min_id.as_deref())
            .append_query_opt("max_id", self.max_id.as_deref());
        Ok(request)
    }
}

/// Options for searching locations.
///
/// Either a point or a facebook places id is required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationSearchOptions {
    /// The latitude
    pub lat: Option<f64>,

    /// The longitude
    pub lng: Option<f64>,

    /// The search radius in meters
    pub distance: Option<u32>,

    /// A facebook places id
    pub facebook_places_id: Option<u64>,
}

impl LocationSearchOptions {
    /// Make new options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the point to search around.
    pub fn point(&mut self, lat: f64, lng: f64) -> &mut Self {
        self.lat = Some(lat);
        self.lng = Some(lng);
        self
    }

    /// Set the distance.
    pub fn distance(&mut self, distance: u32) -> &mut Self {
        self.distance = Some(distance);
        self
    }

    /// Set the facebook places id.
    pub fn facebook_places_id(&mut self, facebook_places_id: u64) -> &mut Self {
        self.facebook_places_id = Some(facebook_places_id);
        self
    }

    /// Build the request.
    ///
    /// # Errors
    /// Fails if neither a full point nor a facebook places id is set.
    pub fn get_request(&self) -> Result<ApiRequest, Error> {
        let mut request = ApiRequest::get("/locations/search");
        match (self.lat, self.lng, self.facebook_places_id) {
            (Some(lat), Some(lng), _) => {
                request
                    .append_query("lat", lat.to_string())
                    .append_query("lng", lng.to_string())
                    .append_query_int("distance", self.distance);
            }
            (None, None, None) => return Err(Error::MissingProperty("lat")),
            (Some(_), None, None) => return Err(Error::MissingProperty("lng")),
            (None, Some(_), None) => return Err(Error::MissingProperty("lat")),
            (_, _, facebook_places_id) => {
                request.append_query_int("facebook_places_id", facebook_places_id);
            }
        }
        Ok(request)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn location() {
        let error = LocationOptions::new()
            .get_request()
            .expect_err("built without an id");
        assert!(matches!(error, Error::MissingProperty("location_id")));

        let request = LocationRecentMediaOptions::new()
            .location_id(514276)
            .min_id("1")
            .get_request()
            .expect("failed to build");
        assert!(request.url == "/locations/514276/media/recent");
        assert!(request.query_value("min_id") == Some("1"));
    }

    #[test]
    fn search() {
        let error = LocationSearchOptions::new()
            .get_request()
            .expect_err("built without a point");
        assert!(matches!(error, Error::MissingProperty("lat")));

        let mut options = LocationSearchOptions::new();
        options.lat = Some(1.0);
        let error = options.get_request().expect_err("built without lng");
        assert!(matches!(error, Error::MissingProperty("lng")));

        let request = LocationSearchOptions::new()
            .facebook_places_id(273471170716)
            .get_request()
            .expect("failed to build");
        assert!(request.query_value("facebook_places_id") == Some("273471170716"));
        assert!(request.query_value("lat").is_none());

        let request = LocationSearchOptions::new()
            .point(37.5, -122.25)
            .get_request()
            .expect("failed to build");
        assert!(request.query_value("lat") == Some("37.5"));
        assert!(request.query_value("lng") == Some("-122.25"));
        assert!(request.query_value("distance").is_none());
    }
}
