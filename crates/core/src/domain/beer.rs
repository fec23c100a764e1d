use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Resource, ResourceId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeerId(pub Uuid);

impl fmt::Display for BeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ResourceId for BeerId {
    fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    fn as_uuid(&self) -> Uuid {
        self.0
    }
}

/// Beer as served by the v1 API. The style is free-form text.
///
/// Every field is optional on the wire; absent fields are omitted on output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BeerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beer_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upc: Option<i64>,
}

impl Resource for BeerDto {
    type Id = BeerId;

    const KIND: &'static str = "beer";

    fn id(&self) -> Option<BeerId> {
        self.id
    }

    fn with_id(self, id: BeerId) -> Self {
        Self { id: Some(id), ..self }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use uuid::Uuid;

    use super::{BeerDto, BeerId};
    use crate::domain::Resource;

    #[test]
    fn serializes_with_wire_field_names() {
        let id = Uuid::new_v4();
        let beer = BeerDto {
            id: Some(BeerId(id)),
            beer_name: Some("Beer1".to_string()),
            beer_style: Some("PALE_ALE".to_string()),
            upc: Some(123_456_789_012),
        };

        let value = serde_json::to_value(&beer).expect("serialize beer");

        assert_eq!(
            value,
            json!({
                "id": id.to_string(),
                "beerName": "Beer1",
                "beerStyle": "PALE_ALE",
                "upc": 123_456_789_012_i64,
            })
        );
    }

    #[test]
    fn accepts_any_style_text_and_missing_id() {
        let beer: BeerDto = serde_json::from_value(json!({
            "beerName": "Galaxy Haze",
            "beerStyle": "hazy double dry-hopped thing",
            "upc": 42,
        }))
        .expect("deserialize beer");

        assert_eq!(beer.id, None);
        assert_eq!(beer.beer_style.as_deref(), Some("hazy double dry-hopped thing"));
        assert_eq!(beer.upc, Some(42));
    }

    #[test]
    fn with_id_replaces_existing_id() {
        let beer = BeerDto {
            id: Some(BeerId(Uuid::new_v4())),
            beer_name: Some("Beer1".to_string()),
            beer_style: Some("ALE".to_string()),
            upc: Some(1),
        };
        let assigned = BeerId(Uuid::new_v4());

        let beer = beer.with_id(assigned);

        assert_eq!(beer.id(), Some(assigned));
        assert_eq!(beer.beer_name.as_deref(), Some("Beer1"));
    }

    #[test]
    fn partial_body_is_accepted_and_round_trips_without_missing_fields() {
        let beer: BeerDto =
            serde_json::from_value(json!({ "beerName": "New Beer" })).expect("deserialize beer");

        assert_eq!(beer.beer_name.as_deref(), Some("New Beer"));
        assert_eq!(beer.beer_style, None);
        assert_eq!(beer.upc, None);
        assert_eq!(
            serde_json::to_value(&beer).expect("serialize beer"),
            json!({ "beerName": "New Beer" })
        );
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let result = serde_json::from_value::<BeerDto>(json!({ "upc": "not a number" }));

        assert!(result.is_err());
    }
}
