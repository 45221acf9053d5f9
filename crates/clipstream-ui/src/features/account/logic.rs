//! Account form state and validation.
//!
//! # Design
//! - Mirror the server's sign-up rules client-side so most rejections
//!   never leave the browser.
//! - Return the first failing field's message; the pages render one
//!   error line at a time.

use clipstream_api_models::{Gender, SignInRequest, SignUpRequest};

const USERNAME_MIN: usize = 4;
const PASSWORD_MIN: usize = 8;

pub(crate) fn parse_username(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("username is required".to_string());
    }
    if trimmed.chars().count() < USERNAME_MIN {
        return Err(format!("username must be at least {USERNAME_MIN} characters"));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn parse_password(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err("password is required".to_string());
    }
    if value.chars().count() < PASSWORD_MIN {
        return Err(format!("password must be at least {PASSWORD_MIN} characters"));
    }
    Ok(value.to_string())
}

pub(crate) fn parse_email(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    let valid = trimmed
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if valid {
        Ok(trimmed.to_string())
    } else {
        Err("a valid email address is required".to_string())
    }
}

pub(crate) fn parse_required(field: &str, value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{field} is required"));
    }
    Ok(trimmed.to_string())
}

/// Parse a gender select control value.
#[must_use]
pub fn parse_gender(value: &str) -> Gender {
    match value {
        "FEMALE" => Gender::Female,
        _ => Gender::Male,
    }
}

/// Mutable sign-up form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignUpFormState {
    /// Login identifier.
    pub username: String,
    /// Account email address.
    pub email: String,
    /// Plain-text password.
    pub password: String,
    /// Display name.
    pub nick_name: String,
    /// Birth date in `YYYY-MM-DD` form.
    pub birth_date: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Gender selection.
    pub gender: Gender,
    /// Postal code.
    pub zip_code: String,
    /// Primary address line.
    pub address1: String,
    /// Secondary address line.
    pub address2: String,
}

impl Default for SignUpFormState {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            nick_name: String::new(),
            birth_date: String::new(),
            phone_number: String::new(),
            gender: Gender::Male,
            zip_code: String::new(),
            address1: String::new(),
            address2: String::new(),
        }
    }
}

impl SignUpFormState {
    /// Convert the form into a sign-up payload.
    ///
    /// # Errors
    /// Returns the first failing field's message.
    pub fn to_request(&self) -> Result<SignUpRequest, String> {
        let address2 = self.address2.trim();
        Ok(SignUpRequest {
            username: parse_username(&self.username)?,
            email: parse_email(&self.email)?,
            password: parse_password(&self.password)?,
            nick_name: parse_required("nickname", &self.nick_name)?,
            birth_date: parse_required("birth date", &self.birth_date)?,
            phone_number: parse_required("phone number", &self.phone_number)?,
            gender: self.gender,
            zip_code: parse_required("zip code", &self.zip_code)?,
            address1: parse_required("address", &self.address1)?,
            address2: if address2.is_empty() {
                None
            } else {
                Some(address2.to_string())
            },
        })
    }
}

/// Mutable sign-in form state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SignInFormState {
    /// Login identifier.
    pub username: String,
    /// Plain-text password.
    pub password: String,
}

impl SignInFormState {
    /// Convert the form into a sign-in payload.
    ///
    /// # Errors
    /// Returns an error when either field is blank.
    pub fn to_request(&self) -> Result<SignInRequest, String> {
        let username = parse_required("username", &self.username)?;
        if self.password.is_empty() {
            return Err("password is required".to_string());
        }
        Ok(SignInRequest {
            username,
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{
        SignInFormState, SignUpFormState, parse_email, parse_gender, parse_password,
        parse_username,
    };
    use clipstream_api_models::Gender;

    fn filled() -> SignUpFormState {
        SignUpFormState {
            username: "otterfan".to_string(),
            email: "otter@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            nick_name: "Otter Fan".to_string(),
            birth_date: "1999-12-31".to_string(),
            phone_number: "010-1234-5678".to_string(),
            gender: Gender::Female,
            zip_code: "04524".to_string(),
            address1: "1 Sample St".to_string(),
            address2: String::new(),
        }
    }

    #[test]
    fn username_requires_four_characters() {
        assert!(parse_username("abc").is_err());
        assert!(parse_username(" abcd ").is_ok());
    }

    #[test]
    fn password_requires_eight_characters() {
        assert!(parse_password("seven77").is_err());
        assert!(parse_password("eight888").is_ok());
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(parse_email("not-an-email").is_err());
        assert!(parse_email("@example.com").is_err());
        assert!(parse_email("user@host").is_err());
        assert!(parse_email("user@example.com").is_ok());
    }

    #[test]
    fn gender_parses_select_values() {
        assert_eq!(parse_gender("FEMALE"), Gender::Female);
        assert_eq!(parse_gender("MALE"), Gender::Male);
        assert_eq!(parse_gender(""), Gender::Male);
    }

    #[test]
    fn complete_form_converts() {
        let request = filled().to_request().expect("request should parse");
        assert_eq!(request.username, "otterfan");
        assert_eq!(request.nick_name, "Otter Fan");
        assert!(request.address2.is_none());
    }

    #[test]
    fn first_failing_field_reports() {
        let form = SignUpFormState {
            username: "ab".to_string(),
            ..filled()
        };
        let err = form.to_request().expect_err("short username");
        assert!(err.contains("username"));
    }

    #[test]
    fn optional_address_line_is_kept_when_present() {
        let form = SignUpFormState {
            address2: "  Unit 4  ".to_string(),
            ..filled()
        };
        let request = form.to_request().expect("request should parse");
        assert_eq!(request.address2.as_deref(), Some("Unit 4"));
    }

    #[test]
    fn sign_in_form_requires_both_fields() {
        assert!(SignInFormState::default().to_request().is_err());
        let ok = SignInFormState {
            username: "otterfan".to_string(),
            password: "hunter2hunter2".to_string(),
        };
        assert!(ok.to_request().is_ok());
    }
}
