/// A hashtag
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Hashtag {
    /// The hashtag id
    pub id: String,

    /// The hashtag name, without the `#`
    pub name: Option<String>,
}
