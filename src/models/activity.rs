//! Activity catalog
//!
//! The fixed, ordered list of activities a user is asked to rate.

use serde::Serialize;

/// Built-in catalog, in display order.
pub const DEFAULT_ACTIVITIES: [&str; 20] = [
    "Bath / shower",
    "Listening to music",
    "Talking to friends",
    "Watching a movie",
    "Exercise",
    "Journaling",
    "Drawing or doodling",
    "Walking outside",
    "Meditation",
    "Cooking or baking",
    "Shopping for clothes",
    "Massage",
    "Looking at old photos",
    "Writing a letter",
    "Playing games",
    "Photography",
    "Going to the beach",
    "Riding a bike",
    "Watching TV series",
    "Drinking coffee or tea",
];

/// Ordered activity names, fixed for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCatalog {
    activities: Vec<String>,
}

impl ActivityCatalog {
    pub fn new(activities: Vec<String>) -> Self {
        Self { activities }
    }

    /// Activities in catalog order.
    pub fn list_activities(&self) -> &[String] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl Default for ActivityCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVITIES.iter().map(|a| a.to_string()).collect())
    }
}
