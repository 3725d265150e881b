//! The resolved metadata for one page.

use serde::{Deserialize, Serialize};

use super::og::{OpenGraph, SocialCard};

/// Everything a head renderer needs for one page.
///
/// Built fresh per resolution and never mutated afterwards. Every field
/// carries a value or its documented default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataBundle {
    pub title: String,
    pub description: String,
    pub authors: Vec<AuthorLink>,
    pub keywords: Vec<String>,
    pub canonical_url: String,
    pub open_graph: OpenGraph,
    pub social: SocialCard,
}

/// Author credit, optionally linking to the author's page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorLink {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
