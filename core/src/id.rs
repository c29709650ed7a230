//! Unique ID generation for stored todos.

use uuid::Uuid;

/// Produces collision-resistant unique strings.
///
/// Uniqueness is the only contract; callers must not rely on ordering.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUID v4 IDs in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
