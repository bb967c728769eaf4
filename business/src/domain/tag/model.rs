use uuid::Uuid;

/// Recipe label such as "breakfast". Name, color and slug are unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    /// Hex color code, `#RRGGBB`.
    pub color: String,
    pub slug: String,
}

impl Tag {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: Uuid, name: String, color: String, slug: String) -> Self {
        Self {
            id,
            name,
            color,
            slug,
        }
    }
}
