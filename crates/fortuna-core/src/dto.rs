use crate::domain::InitData;
use crate::error::CoreError;
use serde::Serialize;

/// The reshaped identity object a host callback receives. Field names are
/// the host platform's generic output slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPayload {
    pub value: Option<String>,
    pub output1: i64,
    pub output2: Option<String>,
    pub output3: Option<String>,
}

impl UserPayload {
    pub fn from_init_data(data: &InitData) -> Result<Self, CoreError> {
        let user = data.user.as_ref().ok_or(CoreError::MissingUser)?;
        let id = user.id.ok_or(CoreError::MissingUserId)?;
        Ok(Self {
            value: user.username.clone(),
            output1: id,
            output2: user.first_name.clone(),
            output3: user.last_name.clone(),
        })
    }
}
