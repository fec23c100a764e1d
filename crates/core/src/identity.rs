use uuid::Uuid;

/// Source of identifiers for newly created resources.
pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> Uuid;
}

/// Random (v4) UUIDs drawn from the operating system's entropy source.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn new_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
