use dioxus::prelude::*;
use dioxus_router::use_navigator;
use learn_core::model::UserRole;
use services::{LoginForm, StudentRegistration, TeacherRegistration};

use crate::context::{AppContext, use_language};
use crate::routes::dashboard_for;
use crate::views::state::auth_error_message;
use crate::vm::Msg;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AuthMode {
    Login,
    Register,
}

/// Form fields of the sign-in / registration panel.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct AuthFields {
    pub mode: Signal<AuthMode>,
    pub full_name: Signal<String>,
    pub username: Signal<String>,
    pub password: Signal<String>,
    pub confirm_password: Signal<String>,
    pub school_id: Signal<String>,
}

impl AuthFields {
    fn new() -> Self {
        Self {
            mode: Signal::new(AuthMode::Login),
            full_name: Signal::new(String::new()),
            username: Signal::new(String::new()),
            password: Signal::new(String::new()),
            confirm_password: Signal::new(String::new()),
            school_id: Signal::new(String::new()),
        }
    }

    fn clear_passwords(mut self) {
        self.password.set(String::new());
        self.confirm_password.set(String::new());
    }
}

#[component]
pub fn StudentLoginView() -> Element {
    rsx! { AuthPanel { role: UserRole::Student } }
}

#[component]
pub fn TeacherLoginView() -> Element {
    rsx! { AuthPanel { role: UserRole::Teacher } }
}

#[component]
fn AuthPanel(role: UserRole) -> Element {
    let ctx = use_context::<AppContext>();
    let language = use_language();
    let navigator = use_navigator();
    let fields = use_hook(AuthFields::new);
    let notice = use_signal(|| None::<String>);
    let busy = use_signal(|| false);

    let submit = {
        let auth = ctx.auth();
        use_callback(move |()| {
            if *busy.peek() {
                return;
            }
            let auth = auth.clone();
            let mut notice = notice;
            let mut busy = busy;
            let mode = *fields.mode.peek();
            spawn(async move {
                busy.set(true);
                let outcome = match (mode, role) {
                    (AuthMode::Login, _) => {
                        auth.login(LoginForm {
                            username: fields.username.peek().clone(),
                            password: fields.password.peek().clone(),
                            role,
                        })
                        .await
                    }
                    (AuthMode::Register, UserRole::Teacher) => {
                        auth.register_teacher(TeacherRegistration {
                            full_name: fields.full_name.peek().clone(),
                            username: fields.username.peek().clone(),
                            password: fields.password.peek().clone(),
                            confirm_password: fields.confirm_password.peek().clone(),
                            school_id: fields.school_id.peek().clone(),
                        })
                        .await
                    }
                    (AuthMode::Register, _) => {
                        auth.register_student(StudentRegistration {
                            full_name: fields.full_name.peek().clone(),
                            username: fields.username.peek().clone(),
                            password: fields.password.peek().clone(),
                            confirm_password: fields.confirm_password.peek().clone(),
                        })
                        .await
                    }
                };
                busy.set(false);
                match outcome {
                    Ok(session) => {
                        notice.set(None);
                        navigator.replace(dashboard_for(session.role));
                    }
                    Err(err) => {
                        fields.clear_passwords();
                        notice.set(Some(auth_error_message(&err, language)));
                    }
                }
            });
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<AuthTestHandles>() {
                handles.register(submit, fields);
            }
        }
    }

    let toggle_mode = move |_: MouseEvent| {
        let mut mode = fields.mode;
        let mut notice = notice;
        let next = match mode() {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        mode.set(next);
        notice.set(None);
    };

    let mode = (fields.mode)();
    let title = match role {
        UserRole::Teacher => Msg::TeacherLogin,
        _ => Msg::StudentLogin,
    };
    let (submit_label, toggle_label) = match mode {
        AuthMode::Login => (Msg::SignIn, Msg::NeedAccount),
        AuthMode::Register => (Msg::CreateAccount, Msg::HaveAccount),
    };
    let mut full_name = fields.full_name;
    let mut username = fields.username;
    let mut password = fields.password;
    let mut confirm_password = fields.confirm_password;
    let mut school_id = fields.school_id;

    rsx! {
        div { class: "page auth",
            h2 { "{title.text(language)}" }
            if let Some(message) = notice() {
                p { class: "notice notice-error", role: "alert", "{message}" }
            }
            form {
                class: "auth-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submit.call(());
                },
                if mode == AuthMode::Register {
                    label { "{Msg::FullName.text(language)}"
                        input {
                            r#type: "text",
                            value: "{full_name}",
                            oninput: move |evt| full_name.set(evt.value()),
                        }
                    }
                }
                label { "{Msg::Username.text(language)}"
                    input {
                        r#type: "text",
                        autocomplete: "username",
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                }
                label { "{Msg::Password.text(language)}"
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                if mode == AuthMode::Register {
                    label { "{Msg::ConfirmPassword.text(language)}"
                        input {
                            r#type: "password",
                            value: "{confirm_password}",
                            oninput: move |evt| confirm_password.set(evt.value()),
                        }
                    }
                    if role == UserRole::Teacher {
                        label { "{Msg::SchoolId.text(language)}"
                            input {
                                r#type: "text",
                                value: "{school_id}",
                                oninput: move |evt| school_id.set(evt.value()),
                            }
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy(),
                    "{submit_label.text(language)}"
                }
            }
            button { class: "btn btn-link", onclick: toggle_mode, "{toggle_label.text(language)}" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct AuthTestHandles {
    submit: std::rc::Rc<std::cell::RefCell<Option<Callback<()>>>>,
    fields: std::rc::Rc<std::cell::RefCell<Option<AuthFields>>>,
}

#[cfg(test)]
impl AuthTestHandles {
    fn register(&self, submit: Callback<()>, fields: AuthFields) {
        *self.submit.borrow_mut() = Some(submit);
        *self.fields.borrow_mut() = Some(fields);
    }

    pub(crate) fn submit(&self) -> Callback<()> {
        (*self.submit.borrow()).expect("auth submit registered")
    }

    pub(crate) fn fields(&self) -> AuthFields {
        (*self.fields.borrow()).expect("auth fields registered")
    }
}
