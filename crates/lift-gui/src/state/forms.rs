//! Form state for the input screens.

use lift_model::{ComplaintDraft, NewUser, Registration};

/// Digits accepted in a one-time password.
pub const OTP_LENGTH: std::ops::RangeInclusive<usize> = 4..=6;

/// Handed to the OTP screen when a code has been sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpRequest {
    /// Address the code was sent to.
    pub email: String,
}

/// Login and OTP screens.
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub email: String,
    pub otp: String,
    /// An OTP request is in flight.
    pub sending: bool,
    /// A login request is in flight.
    pub verifying: bool,
    pub error: Option<String>,
}

impl AuthForm {
    /// Check the code's shape before it is sent: 4 to 6 ASCII digits.
    pub fn otp_is_plausible(&self) -> bool {
        let code = self.otp.trim();
        OTP_LENGTH.contains(&code.len()) && code.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn is_busy(&self) -> bool {
        self.sending || self.verifying
    }
}

// =============================================================================
// REGISTRATION
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    Name,
    Email,
    Phone,
    Company,
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub form: Registration,
    pub submitting: bool,
    pub error: Option<String>,
}

impl RegistrationForm {
    pub fn set(&mut self, field: RegistrationField, value: String) {
        let slot = match field {
            RegistrationField::Name => &mut self.form.name,
            RegistrationField::Email => &mut self.form.email,
            RegistrationField::Phone => &mut self.form.phone,
            RegistrationField::Company => &mut self.form.company,
        };
        *slot = value;
        self.error = None;
    }
}

// =============================================================================
// COMPLAINT
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintField {
    Subject,
    Description,
    Site,
    Lift,
}

#[derive(Debug, Clone, Default)]
pub struct ComplaintForm {
    pub draft: ComplaintDraft,
    pub submitting: bool,
    pub error: Option<String>,
}

impl ComplaintForm {
    pub fn set(&mut self, field: ComplaintField, value: String) {
        match field {
            ComplaintField::Subject => self.draft.subject = value,
            ComplaintField::Description => self.draft.description = value,
            ComplaintField::Site => self.draft.site_name = value,
            ComplaintField::Lift => {
                self.draft.lift_id = Some(value).filter(|v| !v.trim().is_empty());
            }
        }
        self.error = None;
    }

    /// Fresh form for `customer_id`, keeping the last site for convenience.
    pub fn reset_for(&mut self, customer_id: &str) {
        let site_name = std::mem::take(&mut self.draft.site_name);
        *self = Self::default();
        self.draft.customer_id = customer_id.to_string();
        self.draft.site_name = site_name;
    }
}

// =============================================================================
// NEW SUB-CUSTOMER
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewUserField {
    Name,
    Email,
    Phone,
    Site,
}

#[derive(Debug, Clone, Default)]
pub struct NewUserForm {
    pub form: NewUser,
    pub submitting: bool,
    pub error: Option<String>,
}

impl NewUserForm {
    pub fn set(&mut self, field: NewUserField, value: String) {
        match field {
            NewUserField::Name => self.form.name = value,
            NewUserField::Email => self.form.email = value,
            NewUserField::Phone => self.form.phone = value,
            NewUserField::Site => {
                self.form.site_name = Some(value).filter(|v| !v.trim().is_empty());
            }
        }
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_shape() {
        let mut form = AuthForm::default();
        for (code, ok) in [
            ("1234", true),
            ("123456", true),
            (" 98765 ", true),
            ("123", false),
            ("1234567", false),
            ("12a4", false),
            ("١٢٣٤", false),
        ] {
            form.otp = code.to_string();
            assert_eq!(form.otp_is_plausible(), ok, "{code:?}");
        }
    }

    #[test]
    fn test_complaint_reset_keeps_site() {
        let mut form = ComplaintForm::default();
        form.set(ComplaintField::Site, "Sea View".into());
        form.set(ComplaintField::Subject, "Door jam".into());
        form.set(ComplaintField::Lift, "  ".into());
        assert_eq!(form.draft.lift_id, None);

        form.reset_for("C-9");
        assert_eq!(form.draft.customer_id, "C-9");
        assert_eq!(form.draft.site_name, "Sea View");
        assert!(form.draft.subject.is_empty());
    }
}
