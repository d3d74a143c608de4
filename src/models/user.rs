use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

/// The fields of a user that are safe to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUser {
    pub id: i64,
    pub email: String,
}

impl PublicUser {
    /// Upper-cased first character of the email, shown in the avatar bubble.
    pub fn initial(&self) -> String {
        self.email
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial() {
        let user = PublicUser {
            id: 1,
            email: "athlete@example.com".to_string(),
        };
        assert_eq!(user.initial(), "A");

        let empty = PublicUser {
            id: 2,
            email: String::new(),
        };
        assert_eq!(empty.initial(), "");
    }
}
