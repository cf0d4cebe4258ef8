/// The response envelope
pub mod envelope;
/// The [`Media`] type
pub mod media;
/// The [`Relationship`] type
pub mod relationship;
/// The [`Tag`], [`Location`] and [`Comment`] types
pub mod simple;
/// The [`User`] type
pub mod user;

pub use self::{
    envelope::{
        EmptyEnvelope,
        Envelope,
        Meta,
        Pagination,
    },
    media::{
        CarouselMedia,
        Count,
        Images,
        Media,
        MediaVersion,
        Position,
        UserInPhoto,
        Videos,
    },
    relationship::{
        IncomingStatus,
        OutgoingStatus,
        Relationship,
    },
    simple::{
        Comment,
        Location,
        Tag,
    },
    user::{
        AccessTokenResponse,
        User,
        UserCounts,
    },
};
