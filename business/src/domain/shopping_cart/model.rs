/// One `(ingredient, amount, unit)` requirement. Also used for the consolidated
/// shopping list entries, where `amount` is a running total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLine {
    pub name: String,
    pub amount: i64,
    pub unit: String,
}

impl IngredientLine {
    pub fn new(name: String, amount: i64, unit: String) -> Self {
        Self { name, amount, unit }
    }
}

/// A recipe in someone's shopping cart, reduced to its ordered ingredient lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartRecipe {
    lines: Vec<IngredientLine>,
}

impl CartRecipe {
    pub fn new(lines: Vec<IngredientLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[IngredientLine] {
        &self.lines
    }
}
