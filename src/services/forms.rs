//! Login and signup form validation.
//!
//! DESIGN
//! ======
//! Each form either produces the session marker to record plus a success
//! toast, or a `FormError` whose toast tells the user what is missing.
//! Validation is pure: writing the marker and waiting out the artificial
//! latency belong to the route. A rejected form never touches the session
//! store.

use serde::{Deserialize, Serialize};

use super::catalog::TEACHER_SUBJECTS;
use super::session::{SessionMarker, UserType};

/// Subject recorded for teachers who log in rather than sign up.
pub const DEFAULT_TEACHER_SUBJECT: &str = "Mathematics";

// =============================================================================
// TOAST
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// Transient notification shown after a form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    fn success(title: &str, description: impl Into<String>) -> Self {
        Self { title: title.to_owned(), description: description.into(), variant: ToastVariant::Default }
    }

    fn destructive(title: &str, description: &str) -> Self {
        Self { title: title.to_owned(), description: description.to_owned(), variant: ToastVariant::Destructive }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    LearnerSignup,
    TeacherSignup,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("missing fields: {}", .fields.join(", "))]
    MissingFields { form: FormKind, fields: Vec<&'static str> },
    #[error("unknown subject: {0}")]
    UnknownSubject(String),
}

impl FormError {
    /// The destructive toast shown when submission is blocked.
    #[must_use]
    pub fn toast(&self) -> Toast {
        match self {
            Self::MissingFields { form: FormKind::Login, .. } => {
                Toast::destructive("Missing fields", "Please enter email and password")
            }
            Self::MissingFields { form: FormKind::LearnerSignup, .. } => {
                Toast::destructive("Missing fields", "Please fill in all fields and upload your school report")
            }
            Self::MissingFields { form: FormKind::TeacherSignup, .. } => {
                Toast::destructive("Missing fields", "Please fill in all fields and select a subject")
            }
            Self::UnknownSubject(_) => {
                Toast::destructive("Unknown subject", "Please select a subject from the list")
            }
        }
    }
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub marker: SessionMarker,
    pub toast: Toast,
}

/// Names of fields that are empty after trimming, in form order.
fn missing(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

fn require(form: FormKind, fields: &[(&'static str, &str)]) -> Result<(), FormError> {
    let fields = missing(fields);
    if fields.is_empty() { Ok(()) } else { Err(FormError::MissingFields { form, fields }) }
}

// =============================================================================
// LOGIN
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub user_type: UserType,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    /// Username is the part of the email before `@`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingFields`] if email or password is blank.
    pub fn validate(&self) -> Result<Accepted, FormError> {
        require(FormKind::Login, &[("email", self.email.as_str()), ("password", self.password.as_str())])?;

        let email = self.email.trim();
        let username = email.split('@').next().unwrap_or(email).to_owned();
        let marker = match self.user_type {
            UserType::Learner => SessionMarker::learner(username),
            UserType::Teacher => SessionMarker::teacher(username, DEFAULT_TEACHER_SUBJECT),
        };
        let toast = Toast::success("Welcome back!", format!("Logging in as {}...", self.user_type));
        Ok(Accepted { marker, toast })
    }
}

// =============================================================================
// SIGNUP
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LearnerSignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub school_name: String,
    /// File name of the uploaded school report. Only its presence is checked.
    pub report_file: Option<String>,
}

impl LearnerSignupForm {
    /// # Errors
    ///
    /// Returns [`FormError::MissingFields`] if any field is blank or no
    /// report file was attached.
    pub fn validate(&self) -> Result<Accepted, FormError> {
        require(
            FormKind::LearnerSignup,
            &[
                ("full_name", self.full_name.as_str()),
                ("email", self.email.as_str()),
                ("password", self.password.as_str()),
                ("school_name", self.school_name.as_str()),
                ("report_file", self.report_file.as_deref().unwrap_or_default()),
            ],
        )?;

        Ok(Accepted {
            marker: SessionMarker::learner(self.full_name.as_str()),
            toast: Toast::success(
                "Account created!",
                "Analyzing your school report and creating your learning path...",
            ),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeacherSignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub subject: String,
}

impl TeacherSignupForm {
    /// # Errors
    ///
    /// Returns [`FormError::MissingFields`] if any field is blank, or
    /// [`FormError::UnknownSubject`] if the subject is not on the list.
    pub fn validate(&self) -> Result<Accepted, FormError> {
        require(
            FormKind::TeacherSignup,
            &[
                ("full_name", self.full_name.as_str()),
                ("email", self.email.as_str()),
                ("password", self.password.as_str()),
                ("subject", self.subject.as_str()),
            ],
        )?;

        let subject = self.subject.trim();
        if !TEACHER_SUBJECTS.contains(&subject) {
            return Err(FormError::UnknownSubject(subject.to_owned()));
        }

        let full_name = self.full_name.as_str();
        Ok(Accepted {
            marker: SessionMarker::teacher(full_name, subject),
            toast: Toast::success("Account created!", format!("Welcome {full_name}! Teaching {subject}")),
        })
    }
}

#[cfg(test)]
#[path = "forms_test.rs"]
mod tests;
