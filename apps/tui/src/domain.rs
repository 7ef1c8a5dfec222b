use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Characters,
    Locations,
    Episodes,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Characters, Self::Locations, Self::Episodes];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::Locations => "locations",
            Self::Episodes => "episodes",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Characters),
            1 => Some(Self::Locations),
            2 => Some(Self::Episodes),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Characters => 0,
            Self::Locations => 1,
            Self::Episodes => 2,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "characters" | "character" => Some(Self::Characters),
            "locations" | "location" => Some(Self::Locations),
            "episodes" | "episode" => Some(Self::Episodes),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Characters => "Characters",
            Self::Locations => "Locations",
            Self::Episodes => "Episodes",
        }
    }

    /// Singular noun used in messages and API paths.
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Characters => "character",
            Self::Locations => "location",
            Self::Episodes => "episode",
        }
    }

    /// Name of the container the view renderer writes into.
    pub const fn container(self) -> &'static str {
        match self {
            Self::Characters => "characters-list",
            Self::Locations => "locations-list",
            Self::Episodes => "episodes-list",
        }
    }

    pub fn unavailable_message(self) -> String {
        format!("Unable to load {} data.", self.as_str())
    }

    pub fn detail_failure_message(self) -> String {
        format!("Unable to load {} details.", self.singular())
    }
}

/// Shown in place of a record's name when the API sends none.
pub const UNKNOWN_NAME: &str = "Unknown";

fn unknown_name() -> String {
    UNKNOWN_NAME.to_string()
}

/// `null` decodes like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn name_or_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(unknown_name))
}

/// Name/url pair the API uses for a character's origin and last known location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NamedRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Character {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(default = "unknown_name", deserialize_with = "name_or_unknown")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub species: String,
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub origin: NamedRef,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: NamedRef,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub episode: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Location {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(default = "unknown_name", deserialize_with = "name_or_unknown")]
    pub name: String,
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dimension: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub residents: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Episode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(default = "unknown_name", deserialize_with = "name_or_unknown")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub air_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub episode: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub characters: Vec<String>,
}

/// A page of records as returned by the listing endpoints. `info` is ignored.
///
/// Records decode one at a time: a malformed record is logged and replaced by
/// a placeholder carrying only its id, so one bad entry never hides the rest.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Listing<T> {
    #[serde(deserialize_with = "records")]
    pub results: Vec<T>,
}

fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    Ok(raw.iter().filter_map(decode_record).collect())
}

fn decode_record<T: DeserializeOwned>(value: &Value) -> Option<T> {
    let e = match T::deserialize(value) {
        Ok(record) => return Some(record),
        Err(e) => e,
    };
    warn!(record = %value, error = %e, "malformed record, using placeholder");

    let id = value.get("id").cloned().unwrap_or(Value::Null);
    T::deserialize(&json!({ "id": id }))
        .or_else(|_| T::deserialize(&json!({})))
        .ok()
}
