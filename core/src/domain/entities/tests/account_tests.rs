//! Tests for the account entity

use crate::domain::entities::account::{Account, AvatarImage, ImageVariant, USERNAME_PATTERN};

fn avatar(content_type: &str) -> AvatarImage {
    AvatarImage::new("/avatars/original/1.gif", "/avatars/static/1.png", content_type)
}

#[test]
fn test_local_account_acct() {
    let account = Account::local("alice", avatar("image/png"));
    assert!(account.is_local());
    assert_eq!(account.acct(), "alice");
}

#[test]
fn test_remote_account_acct() {
    let account = Account::remote("bob", "remote.example", avatar("image/png"))
        .with_display_name("Bob");
    assert!(!account.is_local());
    assert_eq!(account.acct(), "bob@remote.example");
    assert_eq!(account.display_name, "Bob");
}

#[test]
fn test_gif_avatar_has_static_variant() {
    let image = avatar("image/gif");
    assert!(image.is_animated());
    assert_eq!(image.url_for(ImageVariant::Original), "/avatars/original/1.gif");
    assert_eq!(image.url_for(ImageVariant::Static), "/avatars/static/1.png");
}

#[test]
fn test_non_gif_avatar_always_serves_original() {
    for content_type in ["image/png", "image/jpeg", "image/webp"] {
        let image = avatar(content_type);
        assert!(!image.is_animated());
        assert_eq!(image.url_for(ImageVariant::Static), "/avatars/original/1.gif");
    }
}

#[test]
fn test_account_json_round_trip_keeps_domain() {
    let account = Account::remote("bob", "remote.example", avatar("image/gif"));
    let json = serde_json::to_string(&account).unwrap();
    let decoded: Account = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, account);
}

#[test]
fn test_username_pattern_accepts_handles() {
    let re = regex::Regex::new(&format!("(?i)^{}$", USERNAME_PATTERN)).unwrap();
    assert!(re.is_match("alice"));
    assert!(re.is_match("Alice_99"));
    assert!(re.is_match("a.b-c_d"));
    assert!(!re.is_match("trailing."));
    assert!(!re.is_match("-leading"));
    assert!(!re.is_match(""));
}
