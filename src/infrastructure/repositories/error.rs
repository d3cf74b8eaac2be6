use crate::domain::errors::DomainError;

const CNT_COOK_NAME: &str = "cooks_name_key";
const CNT_COOK_EMAIL: &str = "cooks_email_key";
const CNT_COOK_EXTERNAL: &str = "cooks_external_subject_key";
const CNT_FAVORITE_COOK: &str = "favorite_links_cook_id_fkey";
const CNT_FAVORITE_PAIR: &str = "favorite_links_cook_id_menu_id_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_COOK_NAME => DomainError::conflict("name already taken"),
                    CNT_COOK_EMAIL => DomainError::conflict("email already registered"),
                    CNT_COOK_EXTERNAL => {
                        DomainError::conflict("external identity already linked to another cook")
                    }
                    CNT_FAVORITE_COOK => DomainError::not_found("cook not found"),
                    CNT_FAVORITE_PAIR => DomainError::conflict("menu already a favorite"),
                    other => {
                        DomainError::persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::conflict("unique constraint violated");
                    }
                    "23503" => {
                        return DomainError::not_found("referenced record not found");
                    }
                    "23514" => {
                        return DomainError::validation("check constraint violated");
                    }
                    _ => {}
                }
            }

            DomainError::persistence(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut => DomainError::persistence("database pool timed out"),
        _ => DomainError::persistence(err.to_string()),
    }
}
