use crate::Scope;

/// Read an instagram professional account's profile and media
pub const INSTAGRAM_BASIC: Scope = Scope::new(
    "instagram_basic",
    "Instagram Basic",
    "Read an instagram account's profile info and media",
);

/// Publish media
pub const INSTAGRAM_CONTENT_PUBLISH: Scope = Scope::new(
    "instagram_content_publish",
    "Instagram Content Publish",
    "Create organic feed posts on an instagram account",
);

/// Read and manage comments
pub const INSTAGRAM_MANAGE_COMMENTS: Scope = Scope::new(
    "instagram_manage_comments",
    "Instagram Manage Comments",
    "Create, delete and hide comments on an instagram account",
);

/// Read insights
pub const INSTAGRAM_MANAGE_INSIGHTS: Scope = Scope::new(
    "instagram_manage_insights",
    "Instagram Manage Insights",
    "Read insights of an instagram account",
);

/// List the pages a person manages
pub const PAGES_SHOW_LIST: Scope = Scope::new(
    "pages_show_list",
    "Pages Show List",
    "List the pages a person manages",
);

/// Read page content and metadata
pub const PAGES_READ_ENGAGEMENT: Scope = Scope::new(
    "pages_read_engagement",
    "Pages Read Engagement",
    "Read content posted on a page and its metadata",
);

/// Manage business assets
pub const BUSINESS_MANAGEMENT: Scope = Scope::new(
    "business_management",
    "Business Management",
    "Read and write with the business management api",
);

/// Every graph scope
pub const ALL: &[Scope] = &[
    INSTAGRAM_BASIC,
    INSTAGRAM_CONTENT_PUBLISH,
    INSTAGRAM_MANAGE_COMMENTS,
    INSTAGRAM_MANAGE_INSIGHTS,
    PAGES_SHOW_LIST,
    PAGES_READ_ENGAGEMENT,
    BUSINESS_MANAGEMENT,
];
