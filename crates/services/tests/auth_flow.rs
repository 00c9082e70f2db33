mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use learn_core::model::UserRole;
use learn_core::time::fixed_clock;
use services::api::Credentials;
use services::{
    AuthError, AuthService, LoginForm, RouteAccess, StudentRegistration, TeacherRegistration,
    ValidationError,
};
use storage::repository::Storage;

use common::{FakeApi, login_json};

fn service(api: &Arc<FakeApi>, storage: &Storage, credentials: &Credentials) -> AuthService {
    AuthService::new(
        fixed_clock(),
        api.clone(),
        Arc::clone(&storage.sessions),
        credentials.clone(),
    )
}

fn form(role: UserRole) -> LoginForm {
    LoginForm {
        username: "simran".into(),
        password: "secret".into(),
        role,
    }
}

#[tokio::test]
async fn teacher_account_on_student_form_is_rejected_without_persisting() {
    let api = Arc::new(FakeApi::default());
    *api.login_response.lock().unwrap() = Some(login_json("teacher"));
    let storage = Storage::in_memory();
    let credentials = Credentials::new();
    let auth = service(&api, &storage, &credentials);

    let err = auth.login(form(UserRole::Student)).await.unwrap_err();
    match err {
        AuthError::Validation(ValidationError::WrongRole { expected, actual }) => {
            assert_eq!(expected, UserRole::Student);
            assert_eq!(actual, UserRole::Teacher);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(storage.sessions.load_session().await.unwrap().is_none());
    assert!(auth.current_session().is_none());
    assert!(!credentials.is_signed_in());
}

#[tokio::test]
async fn login_persists_session_and_restores_it() {
    let api = Arc::new(FakeApi::default());
    *api.login_response.lock().unwrap() = Some(login_json("student"));
    let storage = Storage::in_memory();
    let credentials = Credentials::new();
    let auth = service(&api, &storage, &credentials);

    let session = auth.login(form(UserRole::Student)).await.unwrap();
    assert_eq!(session.user.display_name(), "Simran Kaur");
    assert!(credentials.is_signed_in());
    assert_eq!(auth.access(&[UserRole::Student]), RouteAccess::Allow);
    assert_eq!(
        auth.access(&[UserRole::Teacher]),
        RouteAccess::Dashboard(UserRole::Student)
    );

    let fresh_credentials = Credentials::new();
    let restarted = service(&api, &storage, &fresh_credentials);
    assert_eq!(restarted.access(&[UserRole::Student]), RouteAccess::GetStarted);
    let restored = restarted.restore().await.unwrap().expect("session");
    assert_eq!(restored, session);
    assert_eq!(
        fresh_credentials.token().unwrap().expose(),
        session.token.expose()
    );
}

#[tokio::test]
async fn invalid_credentials_surface_auth_error() {
    let api = Arc::new(FakeApi::default());
    let storage = Storage::in_memory();
    let auth = service(&api, &storage, &Credentials::new());

    let err = auth.login(form(UserRole::Teacher)).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(storage.sessions.load_session().await.unwrap().is_none());
}

#[tokio::test]
async fn blank_fields_are_rejected_before_calling_the_api() {
    let api = Arc::new(FakeApi::default());
    let auth = service(&api, &Storage::in_memory(), &Credentials::new());

    let mut empty = form(UserRole::Student);
    empty.password = "  ".into();
    assert!(matches!(
        auth.login(empty).await,
        Err(AuthError::Validation(ValidationError::MissingField("password")))
    ));
    assert_eq!(api.login_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn logout_clears_local_session_even_when_server_call_fails() {
    let api = Arc::new(FakeApi::default());
    *api.login_response.lock().unwrap() = Some(login_json("student"));
    api.logout_fails.store(true, Ordering::SeqCst);
    let storage = Storage::in_memory();
    let credentials = Credentials::new();
    let auth = service(&api, &storage, &credentials);
    auth.login(form(UserRole::Student)).await.unwrap();

    auth.logout().await.unwrap();

    assert_eq!(api.logout_calls.load(Ordering::SeqCst), 1);
    assert!(storage.sessions.load_session().await.unwrap().is_none());
    assert!(auth.current_session().is_none());
    assert!(!credentials.is_signed_in());
}

#[tokio::test]
async fn student_registration_checks_confirmation_then_splits_name() {
    let api = Arc::new(FakeApi::default());
    let storage = Storage::in_memory();
    let auth = service(&api, &storage, &Credentials::new());

    let mismatch = StudentRegistration {
        full_name: "Simran Kaur".into(),
        username: "simran".into(),
        password: "one".into(),
        confirm_password: "two".into(),
    };
    assert!(matches!(
        auth.register_student(mismatch).await,
        Err(AuthError::Validation(ValidationError::PasswordMismatch))
    ));
    assert!(api.register_requests.lock().unwrap().is_empty());

    let ok = StudentRegistration {
        full_name: "Simran Kaur Dhillon".into(),
        username: "simran".into(),
        password: "one".into(),
        confirm_password: "one".into(),
    };
    let session = auth.register_student(ok).await.unwrap();
    assert_eq!(session.role, UserRole::Student);

    let sent = api.register_requests.lock().unwrap()[0].clone();
    assert_eq!(sent["first_name"], "Simran");
    assert_eq!(sent["last_name"], "Kaur Dhillon");
    assert!(sent.get("school_id").is_none());
    assert!(storage.sessions.load_session().await.unwrap().is_some());
}

#[tokio::test]
async fn teacher_registration_sends_school_id() {
    let api = Arc::new(FakeApi::default());
    let auth = service(&api, &Storage::in_memory(), &Credentials::new());

    let session = auth
        .register_teacher(TeacherRegistration {
            full_name: "Harpreet Gill".into(),
            username: "hgill".into(),
            password: "pw".into(),
            confirm_password: "pw".into(),
            school_id: " GSSS-Nabha ".into(),
        })
        .await
        .unwrap();

    assert_eq!(session.role, UserRole::Teacher);
    let sent = api.register_requests.lock().unwrap()[0].clone();
    assert_eq!(sent["school_id"], "GSSS-Nabha");
}
