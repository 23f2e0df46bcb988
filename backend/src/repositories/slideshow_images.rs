use diesel::prelude::*;

use crate::{
    models::landing_models::{Category, NewSlideshowImage, SlideshowImage},
    repositories::errors::RepositoryError,
    schema::slideshow_images,
    DbPool,
};

pub struct SlideshowImageRepository {
    pool: DbPool,
}

impl SlideshowImageRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    // Images of one category in display order
    pub fn find_by_category(&self, category: Category) -> Result<Vec<SlideshowImage>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let images = slideshow_images::table
            .filter(slideshow_images::category.eq(category.as_str()))
            .order(slideshow_images::order_index.asc())
            .select(SlideshowImage::as_select())
            .load(&mut conn)?;
        Ok(images)
    }

    pub fn insert_many(&self, images: &[NewSlideshowImage]) -> Result<usize, RepositoryError> {
        let mut conn = self.pool.get()?;
        let inserted = diesel::insert_into(slideshow_images::table)
            .values(images)
            .execute(&mut conn)?;
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_pool;

    fn image(category: Category, alt_text: &str, order_index: i32) -> NewSlideshowImage {
        NewSlideshowImage {
            category: category.as_str().to_string(),
            image_url: format!("https://cdn.test/{}.png", order_index),
            alt_text: alt_text.to_string(),
            order_index,
        }
    }

    #[test]
    fn returns_images_of_the_category_ordered_by_index() {
        let repo = SlideshowImageRepository::new(memory_pool());
        repo.insert_many(&[
            image(Category::Compliance, "third", 3),
            image(Category::Documentation, "other tab", 0),
            image(Category::Compliance, "first", 1),
            image(Category::Compliance, "second", 2),
        ])
        .unwrap();

        let alts: Vec<String> = repo
            .find_by_category(Category::Compliance)
            .unwrap()
            .into_iter()
            .map(|i| i.alt_text)
            .collect();
        assert_eq!(alts, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_category_is_not_an_error() {
        let repo = SlideshowImageRepository::new(memory_pool());
        assert!(repo.find_by_category(Category::Documentation).unwrap().is_empty());
    }
}
