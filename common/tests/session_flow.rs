mod support;

use common::requests::Method;
use common::routes::Route;
use common::session::{self, MemorySessionStore, Session, SessionStore};
use support::{api, client};

#[tokio::test]
async fn launch_without_token_goes_to_login_without_network() {
    let client = client();
    let session = Session::new(MemorySessionStore::default());

    assert_eq!(session::resolve_start(&client, &session).await, Route::Login);
    assert!(client.transport().sent().is_empty());
}

#[tokio::test]
async fn launch_with_valid_token_goes_to_candidate_list() {
    let client = client();
    client
        .transport()
        .answer(Method::Post, &api("/Seguranca/ValidateToken"), 200, "");
    let session = Session::new(MemorySessionStore::with_token("tok"));

    assert_eq!(
        session::resolve_start(&client, &session).await,
        Route::CandidateList
    );
    let sent = client.transport().sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].bearer.as_deref(), Some("tok"));
    assert_eq!(sent[0].body, None);
}

#[tokio::test]
async fn launch_with_rejected_token_goes_to_login_once() {
    let client = client();
    client
        .transport()
        .answer(Method::Post, &api("/Seguranca/ValidateToken"), 401, "");
    let session = Session::new(MemorySessionStore::with_token("expired"));

    assert_eq!(session::resolve_start(&client, &session).await, Route::Login);
    assert_eq!(client.transport().sent().len(), 1);
}

#[tokio::test]
async fn launch_with_network_failure_goes_to_login() {
    let client = client();
    client
        .transport()
        .fail(Method::Post, &api("/Seguranca/ValidateToken"));
    let session = Session::new(MemorySessionStore::with_token("tok"));

    assert_eq!(session::resolve_start(&client, &session).await, Route::Login);
}

#[tokio::test]
async fn valid_login_stores_token_and_opens_the_list() {
    let client = client();
    client.transport().answer(
        Method::Post,
        &api("/Seguranca/Login"),
        200,
        r#"{"token":"abc","precisaTrocarSenha":false}"#,
    );
    let store = MemorySessionStore::default();
    let session = Session::new(store.clone());

    let outcome = session::login(&client, &session, " ana@example.com ", "pw")
        .await
        .unwrap();
    assert_eq!(outcome.route, Route::CandidateList);
    assert_eq!(outcome.token, "abc");
    assert_eq!(store.load().unwrap(), Some("abc".to_string()));

    let sent = client.transport().sent();
    assert_eq!(
        sent[0].body,
        Some(serde_json::json!({"email": "ana@example.com", "senha": "pw"}))
    );
}

#[tokio::test]
async fn forced_password_change_is_honoured() {
    let client = client();
    client.transport().answer(
        Method::Post,
        &api("/Seguranca/Login"),
        200,
        r#"{"token":"abc","precisaTrocarSenha":true}"#,
    );
    let session = Session::new(MemorySessionStore::default());

    let outcome = session::login(&client, &session, "ana", "pw").await.unwrap();
    assert_eq!(outcome.route, Route::ChangePassword);
}

#[tokio::test]
async fn invalid_login_leaves_no_token() {
    let client = client();
    client
        .transport()
        .answer(Method::Post, &api("/Seguranca/Login"), 401, "");
    let store = MemorySessionStore::default();
    let session = Session::new(store.clone());

    let error = session::login(&client, &session, "ana", "wrong")
        .await
        .unwrap_err();
    assert_eq!(
        error.alert_message("fazer login"),
        "Ocorreu um erro ao fazer login."
    );
    assert_eq!(store.load().unwrap(), None);
}

#[tokio::test]
async fn password_change_reports_the_new_password_rejection() {
    let client = client();
    client.transport().answer(
        Method::Put,
        &api("/Seguranca/TrocarSenha"),
        400,
        r#"[{"propertyName":"novaSenha","errorMessage":"Senha fraca."}]"#,
    );

    let error = session::change_password(&client, "old", "123")
        .await
        .unwrap_err();
    assert_eq!(
        session::new_password_rejection(&error).as_deref(),
        Some("Senha fraca.")
    );
    let sent = client.transport().sent();
    assert_eq!(
        sent[0].body,
        Some(serde_json::json!({"id": 0, "senha": "old", "novaSenha": "123"}))
    );
}

#[tokio::test]
async fn blank_password_change_never_reaches_the_server() {
    let client = client();
    assert!(session::change_password(&client, "old", " ").await.is_err());
    assert!(client.transport().sent().is_empty());
}
