mod common;

use common::client_for;
use forum_api_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn misc_fetches_server_info() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/misc/info")
        .with_body(r#"{"code": 0, "data": {"user_online": 12}}"#)
        .create_async()
        .await;

    let (client, _) = client_for(&server, AuthMode::AccessToken, Some("tok"));
    let envelope = client.misc().await.unwrap();

    assert_eq!(envelope.data, json!({"user_online": 12}));
    mock.assert_async().await;
}

#[tokio::test]
async fn notification_operations() {
    let mut server = Server::new_async().await;
    let count = server
        .mock("GET", "/api/notif/count")
        .with_body(r#"{"code": 0, "data": 2}"#)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/notif/refresh")
        .match_header("content-type", Matcher::Missing)
        .with_body(r#"{"code": 0, "data": 0}"#)
        .create_async()
        .await;
    let set_read = server
        .mock("POST", "/api/notif/set_read")
        .with_body(r#"{"code": 0, "data": 2}"#)
        .create_async()
        .await;

    let (client, _) = client_for(&server, AuthMode::AccessToken, Some("tok"));
    assert_eq!(client.notif().count().await.unwrap().data, json!(2));
    client.notif().refresh().await.unwrap();
    client.notif().set_read().await.unwrap();

    count.assert_async().await;
    refresh.assert_async().await;
    set_read.assert_async().await;
}

#[tokio::test]
async fn log_manage_uses_notification_shape_under_its_own_path() {
    let mut server = Server::new_async().await;
    let count = server
        .mock("GET", "/api/log/manage/count")
        .with_body(r#"{"code": 0, "data": 31}"#)
        .create_async()
        .await;
    let list = server
        .mock("GET", "/api/log/manage/list/3")
        .with_body(r#"{"code": 0, "data": {"items": []}}"#)
        .create_async()
        .await;

    let (client, _) = client_for(&server, AuthMode::AccessToken, Some("tok"));
    assert_eq!(client.log_manage().count().await.unwrap().data, json!(31));
    client
        .log_manage()
        .list(None, 3, None, Some("admin"))
        .await
        .unwrap();

    count.assert_async().await;
    list.assert_async().await;
}

#[tokio::test]
async fn upload_token_is_scoped_to_role() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/upload/token")
        .match_header("role", "user")
        .with_body(r#"{"code": 0, "data": "upload-token"}"#)
        .create_async()
        .await;

    let (client, _) = client_for(&server, AuthMode::AccessToken, Some("tok"));
    let envelope = client.upload().token(Some("user")).await.unwrap();

    assert_eq!(envelope.data, "upload-token");
    mock.assert_async().await;
}

#[tokio::test]
async fn upload_token_without_role_sends_no_role_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/upload/token")
        .match_header("role", Matcher::Missing)
        .with_body(r#"{"code": 0, "data": "upload-token"}"#)
        .create_async()
        .await;

    let (client, _) = client_for(&server, AuthMode::AccessToken, Some("tok"));
    client.upload().token(None).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn upload_resource_accepts_binary_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/upload/new")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file"; filename="avatar.png""#.into()),
            Matcher::Regex(r#"name="type_name""#.into()),
        ]))
        .with_body(r#"{"code": 0, "data": {"key": "k1"}}"#)
        .create_async()
        .await;

    let (client, _) = client_for(&server, AuthMode::AccessToken, Some("tok"));
    let data = FormData::new()
        .with("type_name", "avatar")
        .with("file", FormValue::file(b"fake-png-bytes".to_vec(), "avatar.png"));
    client.upload().create(data, None, None).await.unwrap();

    mock.assert_async().await;
}

#[test]
fn result_codes_and_version_are_exposed() {
    assert_eq!(retcode::SUCCESS, 0);
    assert_eq!(retinfo(retcode::SUCCESS), Client::retinfo(0));
    assert!(retinfo(12345).is_none());
    assert!(!version().is_empty());
}
