/// The [`Media`] type
pub mod media;
/// Token types
pub mod token;
/// The [`User`] type
pub mod user;

pub use self::{
    media::Media,
    token::{
        LongLivedToken,
        ShortLivedToken,
    },
    user::{
        AccountType,
        User,
    },
};
