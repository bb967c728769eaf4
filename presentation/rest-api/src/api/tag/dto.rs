use poem_openapi::Object;

use business::domain::tag::model::Tag;

#[derive(Debug, Clone, Object)]
pub struct TagResponse {
    /// Tag unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Color in `#RRGGBB` format
    pub color: String,
    /// URL-safe identifier used by recipe filters
    pub slug: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.to_string(),
            name: tag.name,
            color: tag.color,
            slug: tag.slug,
        }
    }
}
