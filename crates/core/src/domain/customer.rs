use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Resource, ResourceId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub Uuid);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ResourceId for CustomerId {
    fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    fn as_uuid(&self) -> Uuid {
        self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Resource for CustomerDto {
    type Id = CustomerId;

    const KIND: &'static str = "customer";

    fn id(&self) -> Option<CustomerId> {
        self.id
    }

    fn with_id(self, id: CustomerId) -> Self {
        Self { id: Some(id), ..self }
    }
}
