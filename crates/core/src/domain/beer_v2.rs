use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::beer::BeerId;
use super::Resource;
use crate::errors::DomainError;

/// The fixed set of styles accepted by the v2 API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
    Ale,
    PaleAle,
    Ipa,
    Wheat,
    Lager,
    Pilsner,
    Saison,
    Porter,
    Stout,
    Gose,
}

impl BeerStyle {
    pub const ALL: [BeerStyle; 10] = [
        Self::Ale,
        Self::PaleAle,
        Self::Ipa,
        Self::Wheat,
        Self::Lager,
        Self::Pilsner,
        Self::Saison,
        Self::Porter,
        Self::Stout,
        Self::Gose,
    ];

    /// Wire token, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ale => "ALE",
            Self::PaleAle => "PALE_ALE",
            Self::Ipa => "IPA",
            Self::Wheat => "WHEAT",
            Self::Lager => "LAGER",
            Self::Pilsner => "PILSNER",
            Self::Saison => "SAISON",
            Self::Porter => "PORTER",
            Self::Stout => "STOUT",
            Self::Gose => "GOSE",
        }
    }
}

impl fmt::Display for BeerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BeerStyle {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == value)
            .ok_or_else(|| DomainError::InvalidBeerStyle(value.to_string()))
    }
}

/// Beer as served by the v2 API. The style, when present, is restricted to
/// [`BeerStyle`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerDtoV2 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BeerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beer_style: Option<BeerStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upc: Option<i64>,
}

impl Resource for BeerDtoV2 {
    type Id = BeerId;

    const KIND: &'static str = "beer_v2";

    fn id(&self) -> Option<BeerId> {
        self.id
    }

    fn with_id(self, id: BeerId) -> Self {
        Self { id: Some(id), ..self }
    }
}
