mod common;

use common::client_for;
use forum_api_client::prelude::*;
use mockito::{Matcher, Server};
use std::sync::Arc;

#[tokio::test]
async fn signin_success_persists_access_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/user/signin")
        .match_header("role", Matcher::Missing)
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="email""#.into()),
            Matcher::Regex("alice@example.com".into()),
            Matcher::Regex(r#"name="password""#.into()),
        ]))
        .with_body(r#"{"code": 0, "data": {"id": "u1", "access_token": "abc"}}"#)
        .create_async()
        .await;

    let (client, store) = client_for(&server, AuthMode::AccessToken, None);
    let credentials = FormData::new()
        .with("email", "alice@example.com")
        .with("password", "hunter2");
    let envelope = client.user().signin(credentials).await.unwrap();

    assert!(envelope.is_success());
    assert_eq!(envelope.access_token(), Some("abc"));
    assert_eq!(store.get().unwrap().as_deref(), Some("abc"));
    assert_eq!(client.token().unwrap().as_deref(), Some("abc"));
    mock.assert_async().await;
}

#[tokio::test]
async fn signin_failure_leaves_token_untouched() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/user/signin")
        .with_body(r#"{"code": 6, "data": "wrong password"}"#)
        .create_async()
        .await;

    let (client, store) = client_for(&server, AuthMode::AccessToken, Some("old"));
    let envelope = client
        .user()
        .signin(FormData::new().with("email", "a@b.c").with("password", "nope"))
        .await
        .unwrap();

    assert_eq!(envelope.code, 6);
    assert_eq!(store.get().unwrap().as_deref(), Some("old"));
    mock.assert_async().await;
}

#[tokio::test]
async fn signin_then_authenticated_request_uses_new_token() {
    let mut server = Server::new_async().await;
    let signin = server
        .mock("POST", "/api/user/signin")
        .with_body(r#"{"code": 0, "data": {"access_token": "fresh"}}"#)
        .create_async()
        .await;
    let me = server
        .mock("GET", "/api/user/get_userid")
        .match_header("accesstoken", "fresh")
        .with_body(r#"{"code": 0, "data": "u1"}"#)
        .create_async()
        .await;

    let (client, _) = client_for(&server, AuthMode::AccessToken, None);
    client
        .user()
        .signin(FormData::new().with("nickname", "alice").with("password", "pw"))
        .await
        .unwrap();
    let envelope = client.user().get_user_id().await.unwrap();

    assert_eq!(envelope.data, "u1");
    signin.assert_async().await;
    me.assert_async().await;
}

#[tokio::test]
async fn signin_persists_to_file_store() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/user/signin")
        .with_body(r#"{"code": 0, "data": {"access_token": "durable"}}"#)
        .create_async()
        .await;

    let path = std::env::temp_dir().join(format!("forum-signin-{}.json", nanoid::nanoid!(10)));
    let config = Config::with_server(server.url(), AuthMode::AccessToken);
    let client = Client::new(config, Arc::new(FileTokenStore::new(&path, "t"))).unwrap();
    client
        .user()
        .signin(FormData::new().with("email", "a@b.c").with("password", "pw"))
        .await
        .unwrap();

    let reopened = FileTokenStore::new(&path, "t");
    assert_eq!(reopened.get().unwrap().as_deref(), Some("durable"));
    std::fs::remove_file(path).unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn activation_sends_uid_and_code_as_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/user/activation")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("uid".into(), "0a1b".into()),
            Matcher::UrlEncoded("code".into(), "c0de".into()),
        ]))
        .with_body(r#"{"code": 0, "data": null}"#)
        .create_async()
        .await;

    let (client, _) = client_for(&server, AuthMode::Disabled, None);
    client.user().activation("0a1b", "c0de").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn change_password_posts_both_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/user/change_password")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="old_password""#.into()),
            Matcher::Regex("old-secret".into()),
            Matcher::Regex(r#"name="password""#.into()),
            Matcher::Regex("new-secret".into()),
        ]))
        .with_body(r#"{"code": 0, "data": null}"#)
        .create_async()
        .await;

    let (client, _) = client_for(&server, AuthMode::AccessToken, Some("tok"));
    client
        .user()
        .change_password(ChangePasswordRequest::new("old-secret", "new-secret"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn password_reset_round() {
    let mut server = Server::new_async().await;
    let request = server
        .mock("POST", "/api/user/request_password_reset")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="nickname""#.into()),
            Matcher::Regex("alice".into()),
            Matcher::Regex(r#"name="email""#.into()),
        ]))
        .with_body(r#"{"code": 0, "data": null}"#)
        .create_async()
        .await;
    let validate = server
        .mock("POST", "/api/user/validate_password_reset")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="uid""#.into()),
            Matcher::Regex(r#"name="code""#.into()),
            Matcher::Regex("reset-code".into()),
            Matcher::Regex(r#"name="password""#.into()),
        ]))
        .with_body(r#"{"code": 0, "data": {"id": "u1"}}"#)
        .create_async()
        .await;

    let (client, _) = client_for(&server, AuthMode::Disabled, None);
    client
        .user()
        .request_password_reset("alice", "alice@example.com")
        .await
        .unwrap();
    client
        .user()
        .validate_password_reset("u1", "reset-code", "brand-new")
        .await
        .unwrap();

    request.assert_async().await;
    validate.assert_async().await;
}

#[tokio::test]
async fn signout_posts_without_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/user/signout")
        .match_header("content-type", Matcher::Missing)
        .match_header("accesstoken", "tok")
        .with_body(r#"{"code": 0, "data": null}"#)
        .create_async()
        .await;

    let (client, _) = client_for(&server, AuthMode::AccessToken, Some("tok"));
    client.user().signout().await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn user_client_keeps_standard_operations() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/user/list/1/20")
        .with_body(r#"{"code": 0, "data": {"items": []}}"#)
        .create_async()
        .await;

    let (client, _) = client_for(&server, AuthMode::Disabled, None);
    client.user().list(None, 1, Some(20), Some("admin")).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn signin_recovers_from_corrupt_token_file() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/user/signin")
        .match_header("accesstoken", Matcher::Missing)
        .with_body(r#"{"code": 0, "data": {"access_token": "repaired"}}"#)
        .create_async()
        .await;

    let path = std::env::temp_dir().join(format!("forum-corrupt-{}.json", nanoid::nanoid!(10)));
    std::fs::write(&path, r#"{"t": "trunc"#).unwrap();
    let config = Config::with_server(server.url(), AuthMode::AccessToken);
    let client = Client::new(config, Arc::new(FileTokenStore::new(&path, "t"))).unwrap();

    client
        .user()
        .signin(FormData::new().with("email", "a@b.c").with("password", "pw"))
        .await
        .unwrap();

    assert_eq!(client.token().unwrap().as_deref(), Some("repaired"));
    assert_eq!(
        FileTokenStore::new(&path, "t").get().unwrap().as_deref(),
        Some("repaired")
    );
    std::fs::remove_file(path).unwrap();
    mock.assert_async().await;
}
