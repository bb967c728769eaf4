/// Per-user recipe lists a viewer can add recipes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeCollection {
    Favorites,
    ShoppingCart,
}

impl std::fmt::Display for RecipeCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipeCollection::Favorites => write!(f, "favorites"),
            RecipeCollection::ShoppingCart => write!(f, "shopping_cart"),
        }
    }
}

impl std::str::FromStr for RecipeCollection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "favorites" => Ok(RecipeCollection::Favorites),
            "shopping_cart" => Ok(RecipeCollection::ShoppingCart),
            _ => Err(format!("Invalid recipe collection: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_through_display_and_from_str() {
        for collection in [RecipeCollection::Favorites, RecipeCollection::ShoppingCart] {
            let parsed: RecipeCollection = collection.to_string().parse().unwrap();
            assert_eq!(parsed, collection);
        }
    }

    #[test]
    fn should_reject_unknown_collection() {
        assert!("wishlist".parse::<RecipeCollection>().is_err());
    }
}
