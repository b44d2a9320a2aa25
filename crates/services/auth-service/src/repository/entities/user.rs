//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    /// bcrypt hash
    #[sea_orm(column_name = "password")]
    pub password_hash: String,
    /// JSON array of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub favorite_characters: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// A `favorite_characters` value that is not a string array reads as empty.
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            favorite_characters: serde_json::from_value(model.favorite_characters)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(favorite_characters: Json) -> Model {
        Model {
            id: Uuid::nil(),
            email: "test@test.com".to_string(),
            password_hash: "hash".to_string(),
            favorite_characters,
        }
    }

    #[test]
    fn test_model_to_domain() {
        let user = User::from(model(serde_json::json!(["Leia", "Han"])));

        assert_eq!(user.email, "test@test.com");
        assert_eq!(user.password_hash, "hash");
        assert_eq!(user.favorite_characters, vec!["Leia", "Han"]);
    }

    #[test]
    fn test_unexpected_favorites_read_as_empty() {
        let user = User::from(model(serde_json::json!({ "not": "an array" })));
        assert!(user.favorite_characters.is_empty());
    }
}
