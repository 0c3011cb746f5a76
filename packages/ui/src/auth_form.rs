//! Login / register form.

use api::{DiaryApi, LoginRequest, RegisterRequest};
use dioxus::prelude::*;
use store::validation::require_fields;
use store::{Session, ValidationError};

use crate::error::FormError;
use crate::notice::use_timed_notice;
use crate::sequence::InFlight;
use crate::session::{use_api, use_config, use_session};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggle(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    fn switch_prompt(self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account?",
            AuthMode::Register => "Already have an account?",
        }
    }

    fn switch_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Register here",
            AuthMode::Register => "Login here",
        }
    }
}

/// Raw field values as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthFields {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug)]
pub enum AuthRequest {
    Login(LoginRequest),
    Register(RegisterRequest),
}

impl AuthFields {
    /// Build the request for `mode`, rejecting empty required fields.
    ///
    /// The username only matters when registering.
    pub fn to_request(&self, mode: AuthMode) -> Result<AuthRequest, ValidationError> {
        let email = self.email.trim().to_string();
        match mode {
            AuthMode::Login => {
                require_fields(&[&email, &self.password])?;
                Ok(AuthRequest::Login(LoginRequest {
                    email,
                    password: self.password.clone(),
                }))
            }
            AuthMode::Register => {
                let username = self.username.trim().to_string();
                require_fields(&[&email, &self.password, &username])?;
                Ok(AuthRequest::Register(RegisterRequest {
                    email,
                    password: self.password.clone(),
                    username,
                }))
            }
        }
    }
}

/// Validate locally, then call the matching auth endpoint.
pub async fn authenticate<A: DiaryApi>(
    api: &A,
    mode: AuthMode,
    fields: &AuthFields,
) -> Result<Session, FormError> {
    let session = match fields.to_request(mode)? {
        AuthRequest::Login(req) => api.login(&req).await?,
        AuthRequest::Register(req) => api.register(&req).await?,
    };
    Ok(session)
}

/// Email/password form with a login/register toggle.
///
/// On success the session is established and `on_authenticated` fires.
#[component]
pub fn AuthForm(on_authenticated: EventHandler<()>) -> Element {
    let session = use_session();
    let client = use_api();
    let config = use_config();

    let mut mode = use_signal(AuthMode::default);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(InFlight::default);
    let mut error = use_timed_notice(config.notices.error());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !loading.write().try_start() {
            return;
        }
        let fields = AuthFields {
            username: username(),
            email: email(),
            password: password(),
        };
        let current_mode = mode();
        let client = client.clone();
        let mut session = session.clone();
        error.clear();
        spawn(async move {
            let result = match authenticate(&client, current_mode, &fields).await {
                Ok(new_session) => session.establish(new_session).map_err(FormError::from),
                Err(e) => Err(e),
            };
            loading.write().finish();
            match result {
                Ok(()) => on_authenticated.call(()),
                Err(e) => {
                    if !e.is_local() {
                        tracing::warn!("{} failed: {}", current_mode.title(), e);
                    }
                    error.show(e.message());
                }
            }
        });
    };

    let toggle = move |_| {
        mode.set(mode().toggle());
        error.clear();
    };

    let is_loading = loading.read().is_busy();
    let current = mode();
    let title = current.title();
    let switch_prompt = current.switch_prompt();
    let switch_label = current.switch_label();

    rsx! {
        div {
            class: "auth-card",
            style: "width: 100%; max-width: 28rem; padding: 2rem; border-radius: 0.5rem; border: 2px solid #134e4a;",

            h2 {
                style: "font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; text-align: center; color: #99f6e4;",
                "{title}"
            }

            form {
                onsubmit: handle_submit,
                style: "display: flex; flex-direction: column; gap: 1rem;",

                if let Some(err) = error.get() {
                    div {
                        class: "auth-error",
                        style: "padding: 0.625rem; background: #fef2f2; border: 1px solid #fecaca; border-radius: 4px; color: #dc2626; font-size: 0.8125rem;",
                        "{err}"
                    }
                }

                if current == AuthMode::Register {
                    input {
                        r#type: "text",
                        placeholder: "Username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    disabled: is_loading,
                    style: "padding: 0.5rem; background: #0d9488; color: white; border: none; border-radius: 4px;",
                    if is_loading { "Please wait..." } else { "{title}" }
                }
            }

            p {
                style: "margin-top: 1rem; font-size: 0.875rem; color: #d1d5db;",
                "{switch_prompt} "
                button {
                    r#type: "button",
                    style: "background: none; border: none; color: #5eead4; cursor: pointer;",
                    onclick: toggle,
                    "{switch_label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingApi};

    fn fields(username: &str, email: &str, password: &str) -> AuthFields {
        AuthFields {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_toggle_flips_between_modes() {
        assert_eq!(AuthMode::Login.toggle(), AuthMode::Register);
        assert_eq!(AuthMode::Register.toggle().toggle(), AuthMode::Register);
    }

    #[test]
    fn test_login_ignores_username() {
        let req = fields("", " ada@example.com ", "pw")
            .to_request(AuthMode::Login)
            .unwrap();
        match req {
            AuthRequest::Login(login) => assert_eq!(login.email, "ada@example.com"),
            AuthRequest::Register(_) => panic!("expected login request"),
        }
    }

    #[test]
    fn test_register_requires_username() {
        let err = fields("  ", "ada@example.com", "pw")
            .to_request(AuthMode::Register)
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingFields);
    }

    #[tokio::test]
    async fn test_empty_fields_make_no_request() {
        let api = RecordingApi::default();
        let err = authenticate(&api, AuthMode::Login, &fields("", "", ""))
            .await
            .unwrap_err();
        assert!(err.is_local());
        assert_eq!(err.message(), "Please fill in all required fields.");
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_register_calls_register_endpoint() {
        let api = RecordingApi::default();
        let session = authenticate(
            &api,
            AuthMode::Register,
            &fields("wren", "wren@example.com", "hunter22"),
        )
        .await
        .unwrap();
        assert_eq!(api.calls(), vec![Call::Register("wren".to_string())]);
        assert_eq!(session.user.display_name(), "wren");
        assert_eq!(session.token, "token-for-wren@example.com");
    }

    #[tokio::test]
    async fn test_backend_field_errors_reach_the_user() {
        let api = RecordingApi::default();
        api.fail_next(400, "Email is invalid, Password too short");
        let err = authenticate(&api, AuthMode::Login, &fields("", "x@y", "p"))
            .await
            .unwrap_err();
        assert!(!err.is_local());
        assert_eq!(err.message(), "Email is invalid, Password too short");
        assert_eq!(api.calls(), vec![Call::Login("x@y".to_string())]);
    }
}
