use fetch_meal::{MealDbConfig, MealsManager};
use log::error;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = MealDbConfig::load()?;
    let manager = MealsManager::from_config(&config)?;

    // With an id argument show that meal, otherwise list the directory
    match env::args().nth(1) {
        Some(id) => {
            let meal = match manager.load_details(&id).await {
                Ok(meal) => meal,
                Err(e) => {
                    error!("Failed to fetch meal details: {}", e);
                    return Err(e.into());
                }
            };

            println!("{}", meal.name);
            if let Some(thumbnail) = &meal.thumbnail {
                println!("{}", thumbnail);
            }
            for ingredient in meal.ingredients() {
                println!("- {} {}", ingredient.name, ingredient.measurement);
            }
        }
        None => {
            manager.refresh_directory().await;
            for meal in manager.meals() {
                println!("{}\t{}", meal.id, meal.name);
            }
        }
    }

    Ok(())
}
