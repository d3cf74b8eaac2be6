use super::PostgresCookStore;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::menu::{Menu, MenuCatalog, MenuId};
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use sqlx::FromRow;

#[derive(Debug, FromRow)]
struct MenuRow {
    id: String,
    name: String,
    description: String,
    ingredients: Vec<String>,
}

impl TryFrom<MenuRow> for Menu {
    type Error = DomainError;

    fn try_from(row: MenuRow) -> Result<Self, Self::Error> {
        Ok(Menu::new(MenuId::new(row.id)?, row.name)
            .with_description(row.description)
            .with_ingredients(row.ingredients))
    }
}

#[async_trait]
impl MenuCatalog for PostgresCookStore {
    async fn find_menu(&self, id: &MenuId) -> DomainResult<Option<Menu>> {
        let row = sqlx::query_as::<_, MenuRow>(
            "SELECT id, name, description, ingredients FROM menus WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Menu::try_from).transpose()
    }
}
