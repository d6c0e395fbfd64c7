use axum::extract::Json;

use crate::entities::{Category, CategoryInfo};

pub async fn list() -> Json<Vec<CategoryInfo>> {
    Category::ALL
        .into_iter()
        .map(CategoryInfo::from)
        .collect::<Vec<_>>()
        .into()
}
