use serde::{Deserialize, Serialize};

use crate::Role;
#[cfg(feature = "validation")]
use crate::{AppError, Session};

/// Local sign-in form submission.
///
/// There is no server round-trip: a valid request becomes the stored
/// session directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct SignInRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub display_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    pub role: Role,
}

impl SignInRequest {
    /// Trimmed copy of the form values.
    pub fn normalized(&self) -> Self {
        Self {
            display_name: self.display_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            role: self.role,
        }
    }

    /// Validate and turn the request into the session it establishes.
    #[cfg(feature = "validation")]
    pub fn into_session(self) -> Result<Session, AppError> {
        use validator::Validate;

        let request = self.normalized();
        request.validate()?;
        Ok(Session {
            role: Some(request.role),
            display_name: Some(request.display_name),
            contact_email: Some(request.email),
        })
    }
}
