//! Tests for the auth module

use super::*;

#[test]
fn test_no_auth() {
    let auth = Authenticator::new(AuthConfig::None);
    let client = reqwest::Client::new();
    let req = auth.apply(client.get("https://example.com/api"));

    let built = req.build().unwrap();
    assert!(built.headers().is_empty());
    assert!(built.url().query().is_none());
}

#[test]
fn test_access_token_header() {
    let auth = Authenticator::new(AuthConfig::api_key_header("Access-Token", "o.abc123"));

    let client = reqwest::Client::new();
    let req = auth.apply(client.get("https://api.pushbullet.com/v2/pushes"));

    let built = req.build().unwrap();
    assert_eq!(built.headers().get("Access-Token").unwrap(), "o.abc123");
}

#[test]
fn test_access_token_stays_out_of_query() {
    let auth = Authenticator::new(AuthConfig::api_key_header("Access-Token", "o.abc123"));

    let client = reqwest::Client::new();
    let req = auth.apply(client.get("https://api.pushbullet.com/v2/chats?limit=100"));

    let built = req.build().unwrap();
    assert_eq!(built.url().query(), Some("limit=100"));
}
