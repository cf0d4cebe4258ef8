use crate::Scope;

/// Read a user's profile
pub const USER_PROFILE: Scope = Scope::new(
    "user_profile",
    "User Profile",
    "Read a user's profile info",
);

/// Read a user's media
pub const USER_MEDIA: Scope = Scope::new(
    "user_media",
    "User Media",
    "Read a user's images, videos and albums",
);

/// Every basic display scope
pub const ALL: &[Scope] = &[USER_PROFILE, USER_MEDIA];
