use serde::Deserialize;

/// Untrusted identity payload handed over by the in-app browser SDK.
/// Everything is optional until the bridge guard has looked at it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InitData {
    #[serde(default)]
    pub user: Option<WebAppUser>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct WebAppUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}
