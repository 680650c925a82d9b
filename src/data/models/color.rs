use crate::data::models::schema::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = colors)]
#[diesel(primary_key(color_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Color {
    pub color_id: i32,
    pub name: String,
    pub image: Option<String>,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = colors)]
pub struct NewColor<'a> {
    pub name: &'a str,
    pub image: Option<&'a str>,
}

#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = colors)]
pub struct UpdateColor<'a> {
    pub name: Option<&'a str>,
    pub image: Option<&'a str>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}
