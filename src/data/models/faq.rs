use crate::data::models::schema::*;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = faqs)]
#[diesel(primary_key(faq_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Faq {
    pub faq_id: i32,
    pub question: String,
    pub answer: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = faqs)]
pub struct NewFaq<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub sort_order: i32,
    pub is_active: bool,
}

#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = faqs)]
pub struct UpdateFaq<'a> {
    pub question: Option<&'a str>,
    pub answer: Option<&'a str>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub updated_at: Option<chrono::NaiveDateTime>,
}
