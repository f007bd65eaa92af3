//! Profile emoji demo
//!
//! Resolves the profile emoji of an announcement through the configured
//! entity cache and prints the panel as JSON.
//!
//! Run with: cargo run -p fr_infra --example profile_emoji_demo
//! Set ENVIRONMENT=production and REDIS_URL to run against Redis.

use std::sync::Arc;

use fr_core::domain::entities::{Account, Announcement, AnnouncementLink, AvatarImage, CustomEmoji};
use fr_core::presentation::{AnnouncementItem, AnnouncementsPanel};
use fr_core::repositories::InMemoryAccountRepository;
use fr_infra::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = fr_infra::load_config()?;
    telemetry::init_tracing(&config.logging)?;

    println!("=== Profile Emoji Demo ===\n");
    println!("Environment: {}", config.environment);
    println!("Local domain: {:?}\n", config.instance.local_domain());

    let repo = Arc::new(
        InMemoryAccountRepository::with_accounts([
            Account::local(
                "gargron",
                AvatarImage::new(
                    "/system/accounts/avatars/original/gargron.gif",
                    "/system/accounts/avatars/static/gargron.png",
                    "image/gif",
                ),
            )
            .with_display_name("Eugen"),
            Account::remote(
                "bob",
                "remote.example",
                AvatarImage::new(
                    "https://remote.example/avatars/bob.png",
                    "https://remote.example/avatars/bob.png",
                    "image/png",
                ),
            ),
        ])
        .await,
    );

    let scanner = fr_infra::initialize(&config, repo.clone()).await?;

    let announcement = Announcement::new(
        "Server maintenance tonight, thanks :@gargron: and :@bob@remote.example: :blobcat: :@ghost:",
    )
    .with_link(AnnouncementLink::new("https://status.example", "Status page"))
    .with_emoji(CustomEmoji::new("blobcat", "/emoji/blobcat.png", "/emoji/blobcat_static.png"));

    let asset_base = config.instance.asset_base();
    let item = AnnouncementItem::from_announcement(&announcement, &scanner, asset_base.as_deref()).await;
    let panel = AnnouncementsPanel::new(vec![item], true);

    println!("{}", serde_json::to_string_pretty(&panel)?);

    // Scanning again is served from the cache
    scanner.scan(Some(&announcement.text), None).await;
    println!("\nRepository lookups: {}", repo.lookups());

    Ok(())
}
