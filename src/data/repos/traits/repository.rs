use async_trait::async_trait;
use diesel::result;

/// Basic persistence operations shared by every table-backed repository.
///
/// Lookups return `Ok(None)` rather than `Err(NotFound)` when nothing matches.
/// Listing goes through each repository's own `find_page`.
#[async_trait]
pub trait Repository {
    type Id: Send + Sync + Copy + 'static;
    type Item: Send;
    type NewItem<'a>: Send;
    type UpdateForm<'a>: Send;

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error>;

    /// Inserts the row and returns its generated id.
    async fn add<'a>(&self, item: Self::NewItem<'a>) -> Result<Self::Id, result::Error>;

    async fn update<'a>(
        &self,
        id: Self::Id,
        item: Self::UpdateForm<'a>,
    ) -> Result<(), result::Error>;

    /// Returns the number of deleted rows.
    async fn delete(&self, id: Self::Id) -> Result<usize, result::Error>;

    async fn delete_many(&self, ids: Vec<Self::Id>) -> Result<usize, result::Error>;
}

/// Search and offset pagination for listing queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageQuery {
    pub search: Option<String>,
    pub skip: Option<i64>,
    pub take: Option<i64>,
}

impl PageQuery {
    pub fn new(search: Option<String>, skip: Option<i64>, take: Option<i64>) -> Self {
        PageQuery { search, skip, take }
    }

    /// `%term%` for LIKE filters, `None` when the search is blank. The term
    /// matches literally: `\`, `%` and `_` are escaped with MySQL's default
    /// `\` escape character.
    pub fn like_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", escape_like(s)))
    }

    pub fn offset(&self) -> i64 {
        self.skip.unwrap_or(0).max(0)
    }

    /// MySQL needs a LIMIT whenever OFFSET is used, so "no limit" becomes i64::MAX.
    pub fn limit(&self) -> i64 {
        self.take.filter(|t| *t >= 0).unwrap_or(i64::MAX)
    }
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
