use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, SqlErr,
};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
};

/// Fields supplied when persisting a movie picked from search results.
/// Rating, ranking and review get placeholder values; the edit flow
/// overwrites rating and review immediately after.
#[derive(Clone, Debug)]
pub struct NewMovie {
    pub id: i32,
    pub title: String,
    pub year: String,
    pub description: String,
    pub img_url: String,
}

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All movies, lowest-rated first. Ties fall back to physical order.
    pub async fn list_all(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find()
            .order_by_asc(movie::Column::Rating)
            .all(&self.db)
            .await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("movie {id}")))
    }

    pub async fn create(&self, new: NewMovie) -> AppResult<movie::Model> {
        let id = new.id;
        let model = movie::ActiveModel {
            id: Set(new.id),
            title: Set(new.title),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(Some(0.0)),
            ranking: Set(Some(0)),
            review: Set(Some(" ".to_string())),
            img_url: Set(new.img_url),
        };

        match model.insert(&self.db).await {
            Ok(row) => Ok(row),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(AppError::Conflict(format!("movie {id}")))
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Overwrites rating and review; all other fields are immutable after
    /// creation.
    pub async fn update_review(&self, id: i32, rating: f64, review: String) -> AppResult<()> {
        let row = self.get(id).await?;
        let mut active: movie::ActiveModel = row.into();
        active.rating = Set(Some(rating));
        active.review = Set(Some(review));
        active.update(&self.db).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(format!("movie {id}")));
        }
        Ok(())
    }
}
