use crate::domain::shared::value_objects::UserId;

/// Recipe list filters as requested by a client.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub author: Option<UserId>,
    /// Tag slugs; a recipe matches when it carries any of them.
    pub tags: Vec<String>,
    pub is_favorited: Option<bool>,
    pub is_in_shopping_cart: Option<bool>,
}

/// Membership condition against one user's collection.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipFilter {
    pub user_id: UserId,
    pub member: bool,
}

/// Filters resolved for a concrete viewer, ready for the repository.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeQuery {
    pub author: Option<UserId>,
    pub tags: Vec<String>,
    pub favorited: Option<MembershipFilter>,
    pub in_shopping_cart: Option<MembershipFilter>,
}

impl RecipeFilter {
    /// Binds the membership filters to the viewer. Anonymous viewers have no
    /// favorites or cart, so those filters are dropped for them.
    pub fn for_viewer(self, viewer: Option<&UserId>) -> RecipeQuery {
        let membership = |member: Option<bool>| {
            viewer.zip(member).map(|(user_id, member)| MembershipFilter {
                user_id: user_id.clone(),
                member,
            })
        };

        RecipeQuery {
            favorited: membership(self.is_favorited),
            in_shopping_cart: membership(self.is_in_shopping_cart),
            author: self.author,
            tags: self.tags,
        }
    }
}
