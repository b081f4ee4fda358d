//! Test utilities for API types
//!
//! Provides helper functions for creating test Category and Meal objects,
//! and for encoding small PNG fixtures.

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};
use mealdeck_core::{Category, Meal};

/// Creates a test category with a thumbnail under `http://img.test/`.
///
/// # Arguments
/// * `id` - Category identifier
/// * `name` - Display name
pub fn test_category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail_url: format!("http://img.test/{}.png", name.to_lowercase()),
        description: format!("{name} dishes"),
    }
}

/// Creates a summary meal (as served by `filter.php`): id, name, thumbnail only.
pub fn test_meal(id: &str, name: &str) -> Meal {
    Meal {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail_url: format!("http://img.test/meal-{id}.png"),
        instructions: None,
        category: None,
        area: None,
        tags: None,
        youtube_url: None,
        source_url: None,
        date_modified: None,
    }
}

/// Creates a fully populated meal.
///
/// # Arguments
/// * `id` - Meal identifier
/// * `name` - Display name
/// * `youtube` - Value for `strYoutube`
pub fn test_meal_full(id: &str, name: &str, youtube: Option<&str>) -> Meal {
    Meal {
        instructions: Some(format!("Cook the {name} slowly.")),
        category: Some("Beef".to_string()),
        area: Some("British".to_string()),
        tags: Some("Stew,Winter".to_string()),
        youtube_url: youtube.map(str::to_string),
        source_url: Some("https://example.com/recipe".to_string()),
        date_modified: None,
        ..test_meal(id, name)
    }
}

/// Encode a solid-colour PNG of `width` x `height`.
pub fn png_bytes(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, Rgb(rgb));
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .expect("PNG encoding of an in-memory image");
    cursor.into_inner()
}
