use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::models::landing_models::{Category, NewSlideshowImage};
use crate::repositories::slideshow_images::SlideshowImageRepository;

#[derive(Debug, Deserialize)]
struct SeedImage {
    category: Category,
    #[serde(default)]
    image_url: String,
    alt_text: String,
    order_index: i32,
}

pub fn seed_from_file(repo: &SlideshowImageRepository, path: &Path) -> anyhow::Result<usize> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read slideshow seed file {}", path.display()))?;
    seed_from_json(repo, &raw)
}

/// Inserts seed rows for every category that has no images yet.
pub fn seed_from_json(repo: &SlideshowImageRepository, raw: &str) -> anyhow::Result<usize> {
    let images: Vec<SeedImage> = serde_json::from_str(raw).context("Invalid slideshow seed JSON")?;

    let mut pending = Vec::new();
    for category in [Category::Compliance, Category::Documentation] {
        if !repo.find_by_category(category)?.is_empty() {
            tracing::info!("Slideshow category {} already populated, skipping seed", category);
            continue;
        }
        pending.extend(
            images
                .iter()
                .filter(|image| image.category == category)
                .map(|image| NewSlideshowImage {
                    category: category.as_str().to_string(),
                    image_url: image.image_url.clone(),
                    alt_text: image.alt_text.clone(),
                    order_index: image.order_index,
                }),
        );
    }

    if pending.is_empty() {
        return Ok(0);
    }
    let inserted = repo.insert_many(&pending)?;
    tracing::info!("Seeded {} slideshow images", inserted);
    Ok(inserted)
}
