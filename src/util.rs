use crate::Error;
use hmac::{
    Hmac,
    Mac,
};
use serde::{
    de::DeserializeOwned,
    Deserialize,
    Deserializer,
    Serializer,
};
use sha2::Sha256;
use time::OffsetDateTime;

type HmacSha256 = Hmac<Sha256>;

/// Timestamps like `2017-08-31T18:10:00+0000`, used by the graph and basic display apis.
pub(crate) mod graph_timestamp {
    time::serde::format_description!(
        graph_timestamp_impl,
        OffsetDateTime,
        "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory][offset_minute]"
    );

    pub use self::graph_timestamp_impl::*;
    use time::OffsetDateTime;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrInt {
    Int(i64),
    String(String),
}

impl StringOrInt {
    fn into_i64<E>(self) -> Result<i64, E>
    where
        E: serde::de::Error,
    {
        match self {
            Self::Int(n) => Ok(n),
            Self::String(s) => s.trim().parse().map_err(E::custom),
        }
    }
}

/// Unix timestamps sent as strings (or numbers), used by the legacy api.
pub(crate) mod unix_timestamp {
    use super::*;

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let timestamp = StringOrInt::deserialize(deserializer)?.into_i64::<D::Error>()?;
        OffsetDateTime::from_unix_timestamp(timestamp).map_err(serde::de::Error::custom)
    }

    pub(crate) fn serialize<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut buffer = itoa::Buffer::new();
        serializer.serialize_str(buffer.format(value.unix_timestamp()))
    }
}

/// Ids the legacy api sometimes sends as strings and sometimes as numbers.
pub(crate) mod string_or_u64 {
    use super::*;

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = StringOrInt::deserialize(deserializer)?.into_i64::<D::Error>()?;
        u64::try_from(n).map_err(serde::de::Error::custom)
    }

    pub(crate) fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(*value)
    }

    pub(crate) mod option {
        use super::super::StringOrInt;
        use serde::{
            Deserialize,
            Deserializer,
            Serializer,
        };

        pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<StringOrInt>::deserialize(deserializer)?
                .map(|value| {
                    let n = value.into_i64::<D::Error>()?;
                    u64::try_from(n).map_err(serde::de::Error::custom)
                })
                .transpose()
        }

        pub(crate) fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(value) => serializer.serialize_some(value),
                None => serializer.serialize_none(),
            }
        }
    }
}

/// Parse a model from a json value.
///
/// `null` yields `None` instead of an error.
pub fn parse_optional<T>(value: serde_json::Value) -> Result<Option<T>, Error>
where
    T: DeserializeOwned,
{
    if value.is_null() {
        return Ok(None);
    }

    let body = value.to_string();
    serde_json::from_value(value)
        .map(Some)
        .map_err(|error| Error::InvalidJson {
            error,
            body: body.into(),
        })
}

/// Sign a message with HMAC-SHA256, returning the lowercase hex digest.
pub(crate) fn hmac_sha256_hex(key: &str, message: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Make sure a required string argument is not empty.
pub(crate) fn require_non_empty(value: &str, name: &'static str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument(name));
    }

    Ok(())
}

/// Get a required string property, failing if it is unset or empty.
pub(crate) fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, Error> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim()),
        _ => Err(Error::MissingProperty(name)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, serde::Deserialize, serde::Serialize)]
    struct Timestamps {
        #[serde(with = "graph_timestamp")]
        graph: OffsetDateTime,

        #[serde(with = "unix_timestamp")]
        legacy: OffsetDateTime,

        #[serde(with = "string_or_u64")]
        id: u64,

        #[serde(default, with = "string_or_u64::option")]
        location_id: Option<u64>,
    }

    #[test]
    fn graph_timestamp_sanity() {
        let parsed: Timestamps = serde_json::from_str(
            r#"{"graph":"2017-08-31T18:10:00+0000","legacy":"1296710327","id":"123"}"#,
        )
        .expect("failed to parse");

        assert!(parsed.graph.unix_timestamp() == 1504203000);
        assert!(parsed.legacy.unix_timestamp() == 1296710327);
        assert!(parsed.id == 123);
        assert!(parsed.location_id.is_none());
    }

    #[test]
    fn graph_timestamp_with_offset() {
        let parsed: Timestamps = serde_json::from_str(
            r#"{"graph":"2020-05-01T12:00:00+0200","legacy":1296710327,"id":123,"location_id":"514276"}"#,
        )
        .expect("failed to parse");

        assert!(parsed.graph.unix_timestamp() == 1588327200);
        assert!(parsed.location_id == Some(514276));
    }

    #[test]
    fn timestamps_serialize_in_api_format() {
        let parsed: Timestamps = serde_json::from_str(
            r#"{"graph":"2017-08-31T18:10:00+0000","legacy":"1296710327","id":"5"}"#,
        )
        .expect("failed to parse");
        let value = serde_json::to_value(&parsed).expect("failed to serialize");

        assert!(value["graph"] == "2017-08-31T18:10:00+0000");
        assert!(value["legacy"] == "1296710327");
        assert!(value["id"] == 5);
    }

    #[test]
    fn bad_id_is_an_error() {
        let result = serde_json::from_str::<Timestamps>(
            r#"{"graph":"2017-08-31T18:10:00+0000","legacy":"1","id":"abc"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn parse_optional_null() {
        let parsed: Option<serde_json::Map<String, serde_json::Value>> =
            parse_optional(serde_json::Value::Null).expect("null should parse");
        assert!(parsed.is_none());
    }

    #[test]
    fn hmac_sanity() {
        let digest = hmac_sha256_hex("app-secret", "graph-token");
        assert!(digest == "3649a13ce85e1c568be8b90219db3a616c307f89dac694e9acae38ad9a76148b");
    }

    #[test]
    fn required_properties() {
        assert!(required(Some("17841405822304914"), "user_id").is_ok());
        assert!(matches!(required(Some(" 42 "), "user_id"), Ok("42")));
        assert!(matches!(
            required(Some(" "), "user_id"),
            Err(Error::MissingProperty("user_id"))
        ));
        assert!(matches!(
            required(None, "user_id"),
            Err(Error::MissingProperty("user_id"))
        ));
        assert!(matches!(
            require_non_empty("", "access_token"),
            Err(Error::InvalidArgument("access_token"))
        ));
    }
}
