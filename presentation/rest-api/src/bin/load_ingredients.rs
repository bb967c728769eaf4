use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use serde::Deserialize;

use business::application::ingredient::import::ImportIngredientsUseCaseImpl;
use business::domain::ingredient::errors::IngredientError;
use business::domain::ingredient::use_cases::import::{
    ImportIngredientsParams, ImportIngredientsUseCase, IngredientRow,
};
use logger::TracingLogger;
use persistence::ingredient::repository::IngredientRepositoryPostgres;
use rest_api::config::database_config;

/// Loads the ingredient catalog into an empty database.
///
/// Exits with an error when ingredients are already present.
#[derive(Debug, Parser)]
#[command(name = "load-ingredients", version)]
struct Args {
    /// CSV file with a `name,measurement_unit` header
    #[arg(default_value = "data/ingredients.csv")]
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    measurement_unit: String,
}

fn read_rows(reader: impl Read) -> Result<Vec<IngredientRow>, csv::Error> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize::<CsvRow>()
        .map(|row| {
            row.map(|row| IngredientRow {
                name: row.name,
                measurement_unit: row.measurement_unit,
            })
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    dotenv().ok();

    let args = Args::parse();
    let file = std::fs::File::open(&args.path)
        .with_context(|| format!("cannot open {}", args.path.display()))?;
    let rows = read_rows(file).with_context(|| format!("cannot parse {}", args.path.display()))?;

    let pool = database_config::init_database().await?;
    let use_case = ImportIngredientsUseCaseImpl {
        repository: Arc::new(IngredientRepositoryPostgres::new(pool)),
        logger: Arc::new(TracingLogger),
    };

    match use_case.execute(ImportIngredientsParams { rows }).await {
        Ok(inserted) => {
            tracing::info!("Loaded {} ingredients", inserted);
            Ok(())
        }
        Err(IngredientError::AlreadyLoaded) => {
            tracing::warn!("Ingredients are already loaded; empty the table to reload them");
            Err(IngredientError::AlreadyLoaded.into())
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_rows_in_file_order() {
        let data = "name,measurement_unit\nabricot,g\n  salt , pinch\n";

        let rows = read_rows(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "abricot");
        assert_eq!(rows[1].name, "salt");
        assert_eq!(rows[1].measurement_unit, "pinch");
    }

    #[test]
    fn should_fail_on_missing_column() {
        let data = "name\nsalt\n";

        assert!(read_rows(data.as_bytes()).is_err());
    }

    #[test]
    fn should_parse_default_path() {
        let args = Args::parse_from(["load-ingredients"]);

        assert_eq!(args.path, PathBuf::from("data/ingredients.csv"));
    }
}
