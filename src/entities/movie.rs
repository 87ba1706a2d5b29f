use sea_orm::entity::prelude::*;

/// One ranked movie. `id` is the TMDB movie id reused as the primary key,
/// so adding the same movie twice hits the unique constraint.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub title: String,
    /// Raw TMDB release-date string, stored verbatim.
    pub year: String,
    pub description: String,
    pub rating: Option<f64>,
    /// Vestigial, always zero.
    pub ranking: Option<i32>,
    pub review: Option<String>,
    pub img_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
