//! Signup flow.

use axum::{
    extract::{rejection::FormRejection, Form},
    http::header,
    response::{IntoResponse, Response},
};

use super::{Page, Renderer};

/// Fields posted by the signup form. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
}

impl SignupForm {
    /// Pick the known fields out of decoded form pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut email = None;
        let mut password = None;

        for (key, value) in pairs {
            match key.as_str() {
                "email" => {
                    email.get_or_insert(value);
                }
                "password" => {
                    password.get_or_insert(value);
                }
                _ => {}
            }
        }

        Self {
            email: email.unwrap_or_default(),
            password: password.unwrap_or_default(),
        }
    }
}

/// Users controller: owns the signup page template.
#[derive(Debug, Clone)]
pub struct Users {
    signup: Page,
}

impl Users {
    pub fn new(signup: impl Renderer) -> Self {
        Self {
            signup: Page::new(signup),
        }
    }

    /// `GET /signup`: the empty signup form.
    pub fn new_user(&self) -> Page {
        self.signup.clone()
    }

    /// `POST /signup`: acknowledge a submitted form.
    ///
    /// Nothing is validated or stored. A body that cannot be read as a form
    /// is treated as one with every field empty.
    pub async fn create(form: Result<Form<Vec<(String, String)>>, FormRejection>) -> Response {
        let form = match form {
            Ok(Form(pairs)) => SignupForm::from_pairs(pairs),
            Err(rejection) => {
                tracing::debug!(%rejection, "Unreadable signup form, using empty fields");
                SignupForm::default()
            }
        };

        tracing::info!(
            email = %form.email,
            has_password = !form.password.is_empty(),
            "Signup received"
        );

        (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("Email: {}\nPassword received: {}\n", form.email, !form.password.is_empty()),
        )
            .into_response()
    }
}
