pub mod config;
pub mod domain;
pub mod errors;
pub mod identity;

pub use domain::beer::{BeerDto, BeerId};
pub use domain::beer_v2::{BeerDtoV2, BeerStyle};
pub use domain::customer::{CustomerDto, CustomerId};
pub use domain::{Resource, ResourceId};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use identity::{IdGenerator, RandomIdGenerator};
