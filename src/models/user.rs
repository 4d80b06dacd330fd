use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

/// Document stored in the "users" collection.
///
/// The password is kept verbatim; credentials are compared in plain text.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub fullname: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<BsonDateTime>,
}

impl User {
    pub fn new(fullname: &str, email: &str, password: &str) -> Self {
        Self {
            id: None,
            fullname: fullname.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            created_at: Some(BsonDateTime::now()),
        }
    }
}

/// Public projection returned by login (never carries the password).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct UserProfile {
    pub fullname: String,
    pub email: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            fullname: user.fullname,
            email: user.email,
        }
    }
}
