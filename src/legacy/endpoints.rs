/// Location endpoints
mod locations;
/// Media endpoints
mod media;
/// Relationship endpoints
mod relationships;
/// Tag endpoints
mod tags;
/// User endpoints
mod users;

pub use self::{
    locations::{
        LocationsEndpoint,
        LocationsRawEndpoint,
    },
    media::{
        MediaEndpoint,
        MediaRawEndpoint,
    },
    relationships::{
        RelationshipsEndpoint,
        RelationshipsRawEndpoint,
    },
    tags::{
        TagsEndpoint,
        TagsRawEndpoint,
    },
    users::{
        UsersEndpoint,
        UsersRawEndpoint,
    },
};
use super::Envelope;
use crate::Response;

/// A parsed legacy response
pub type LegacyResponse<T> = Response<Envelope<T>>;
