use sqlx::FromRow;
use uuid::Uuid;

use business::domain::tag::model::Tag;

#[derive(Debug, FromRow)]
pub struct TagEntity {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub slug: String,
}

impl TagEntity {
    pub fn into_domain(self) -> Tag {
        Tag::from_repository(self.id, self.name, self.color, self.slug)
    }
}
