//! Frontend Models
//!
//! Data structures matching the reddit JSON listing endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `{ data: { children: [...] } }` envelope shared by both endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing<T> {
    pub data: ListingData<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingData<T> {
    #[serde(default = "Vec::new")]
    pub children: Vec<Thing<T>>,
}

/// A single `{ kind, data }` child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thing<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub data: T,
}

/// Post as returned by `/r/{subreddit}.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub score: i64,
    pub num_comments: i64,
    pub subreddit_subscribers: i64,
    pub subreddit_id: String,
    #[serde(default)]
    pub permalink: String,
    /// Everything else, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Display-ready post consumed by the posts template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub author: String,
    pub score: i64,
    /// Grouped with thousands separators
    pub num_comments: String,
    /// Grouped with thousands separators
    pub subreddit_subscribers: String,
    pub are_comments: bool,
    pub subreddit_id: String,
    pub permalink: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Subreddit metadata as returned by `/api/info.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubredditDetails {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub display_name_prefixed: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub public_description: String,
    #[serde(default)]
    pub subscribers: Option<i64>,
    #[serde(default)]
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type PostsResponse = Listing<RawPost>;
pub type InfoResponse = Listing<SubredditDetails>;
