use business::domain::shopping_cart::model::IngredientLine;

pub const CSV_HEADER: [&str; 3] = ["name", "amount", "measurement_unit"];
pub const FILENAME: &str = "shopping_cart.csv";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("shopping_cart.export_failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("shopping_cart.export_failed: buffer")]
    Buffer,
}

/// Renders the shopping list as CSV. The header row is always written.
pub fn render_csv(lines: &[IngredientLine]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for line in lines {
        let amount = line.amount.to_string();
        writer.write_record([line.name.as_str(), amount.as_str(), line.unit.as_str()])?;
    }
    writer.into_inner().map_err(|_| ExportError::Buffer)
}
