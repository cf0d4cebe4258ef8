/// Media options
mod media;
/// User options
mod users;

pub use self::{
    media::{
        MediaChildrenOptions,
        MediaOptions,
    },
    users::{
        UserMediaOptions,
        UserOptions,
    },
};
