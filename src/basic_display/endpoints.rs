/// Media endpoints
mod media;
/// User endpoints
mod users;

pub use self::{
    media::{
        MediaEndpoint,
        MediaRawEndpoint,
    },
    users::{
        UsersEndpoint,
        UsersRawEndpoint,
    },
};
