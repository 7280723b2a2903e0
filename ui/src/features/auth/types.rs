// Core types for the login panel - no dioxus imports needed here

/// Which form the login panel is showing. Switching never clears input.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn heading(&self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::Register => "Create your account",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::Register => "Create Account",
        }
    }

    pub fn is_register(&self) -> bool {
        matches!(self, AuthMode::Register)
    }
}

/// Names of the credential inputs
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CredentialField {
    FirstName,
    LastName,
    Email,
    Organisation,
    Password,
    Confirm,
}

/// What the user has typed. Lives only as long as the page.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Credentials {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub organisation: String,
    pub password: String,
    pub confirm: String,
}

impl Credentials {
    pub fn set(&mut self, field: CredentialField, value: String) {
        match field {
            CredentialField::FirstName => self.first_name = value,
            CredentialField::LastName => self.last_name = value,
            CredentialField::Email => self.email = value,
            CredentialField::Organisation => self.organisation = value,
            CredentialField::Password => self.password = value,
            CredentialField::Confirm => self.confirm = value,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginState {
    pub mode: AuthMode,
    pub credentials: Credentials,
    pub show_password: bool,
    /// Empty when there is nothing to show
    pub error: String,
    pub is_loading: bool,
}

#[derive(Clone, PartialEq, Debug)]
pub enum LoginAction {
    SetMode(AuthMode),
    SetField(CredentialField, String),
    SetShowPassword(bool),
    SetError(String),
    SetLoading(bool),
}

impl LoginState {
    /// Reduces the state in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: LoginAction) {
        match action {
            LoginAction::SetMode(mode) => {
                self.mode = mode;
            }
            LoginAction::SetField(field, value) => {
                self.credentials.set(field, value);
            }
            LoginAction::SetShowPassword(show) => {
                self.show_password = show;
            }
            LoginAction::SetError(error) => {
                self.error = error;
            }
            LoginAction::SetLoading(loading) => {
                self.is_loading = loading;
            }
        }
    }

    pub fn password_input_type(&self) -> &'static str {
        if self.show_password {
            "text"
        } else {
            "password"
        }
    }

    pub fn submit_text(&self) -> &'static str {
        if self.is_loading {
            "Please wait..."
        } else {
            self.mode.submit_label()
        }
    }
}
