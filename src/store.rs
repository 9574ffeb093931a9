//! Observable container for the current meal directory.
//!
//! Backed by a [`tokio::sync::watch`] channel: writers replace or patch the
//! list, subscribers see the latest value and are woken on every change.

use crate::model::Meal;
use tokio::sync::watch;

pub struct MealStore {
    tx: watch::Sender<Vec<Meal>>,
}

impl Default for MealStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MealStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self { tx }
    }

    /// Receiver that observes every subsequent change to the list
    pub fn subscribe(&self) -> watch::Receiver<Vec<Meal>> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> Vec<Meal> {
        self.tx.borrow().clone()
    }

    pub fn get(&self, id: &str) -> Option<Meal> {
        self.tx.borrow().iter().find(|m| m.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    /// Swap in a freshly fetched directory
    pub fn replace_all(&self, meals: Vec<Meal>) {
        self.tx.send_replace(meals);
    }

    /// Replace the meal sharing `meal.id` in place.
    ///
    /// Returns `false` and leaves the list (and subscribers) untouched when no
    /// meal with that id is present.
    pub fn update_meal(&self, meal: Meal) -> bool {
        self.tx.send_if_modified(|meals| {
            match meals.iter_mut().find(|existing| existing.id == meal.id) {
                Some(existing) => {
                    *existing = meal;
                    true
                }
                None => false,
            }
        })
    }
}
