use crate::Scope;

/// Read a user's profile info and media
pub const BASIC: Scope = Scope::new(
    "basic",
    "Basic",
    "Read a user's profile info and media",
);

/// Read any public profile info and media on a user's behalf
pub const PUBLIC_CONTENT: Scope = Scope::new(
    "public_content",
    "Public Content",
    "Read any public profile info and media on a user's behalf",
);

/// Read the list of followers and followed-by users
pub const FOLLOWER_LIST: Scope = Scope::new(
    "follower_list",
    "Follower List",
    "Read the list of followers and followed-by users",
);

/// Post and delete comments on a user's behalf
pub const COMMENTS: Scope = Scope::new(
    "comments",
    "Comments",
    "Post and delete comments on a user's behalf",
);

/// Follow and unfollow accounts on a user's behalf
pub const RELATIONSHIPS: Scope = Scope::new(
    "relationships",
    "Relationships",
    "Follow and unfollow accounts on a user's behalf",
);

/// Like and unlike media on a user's behalf
pub const LIKES: Scope = Scope::new(
    "likes",
    "Likes",
    "Like and unlike media on a user's behalf",
);

/// Every legacy scope
pub const ALL: &[Scope] = &[
    BASIC,
    PUBLIC_CONTENT,
    FOLLOWER_LIST,
    COMMENTS,
    RELATIONSHIPS,
    LIKES,
];
