//! CLI command implementations.

use anyhow::{Context, Result, bail};

use velvet_application::CompanionService;
use velvet_core::profile::{CharacterProfile, IntimacyLevel, RelationshipKind};
use velvet_core::theme::registry;

async fn service() -> Result<CompanionService> {
    let svc = CompanionService::with_default_storage()?;
    svc.load().await.context("failed to load companion roster")?;
    Ok(svc)
}

fn print_profile(profile: &CharacterProfile, active: bool) {
    let marker = if active { "*" } else { " " };
    println!(
        "{} {}  {}  [{}]  {}",
        marker,
        profile.id,
        profile.name,
        profile.relationship.label(),
        profile.created_at.format("%Y-%m-%d"),
    );
}

pub async fn list() -> Result<()> {
    let svc = service().await?;
    let profiles = svc.profiles().await;

    if profiles.is_empty() {
        println!("No companions yet. Create one with `velvet create`.");
        return Ok(());
    }

    let active_id = svc.active_profile().await.map(|p| p.id);
    for profile in &profiles {
        print_profile(profile, active_id.as_deref() == Some(&profile.id));
    }

    let usage = svc.usage();
    println!(
        "\n{}/{} daily calls{}",
        usage.requests_today,
        usage.daily_limit,
        if usage.is_rate_limited {
            " (limit reached)"
        } else {
            ""
        },
    );
    Ok(())
}

pub async fn show(id: Option<&str>) -> Result<()> {
    let svc = service().await?;
    let profile = match id {
        Some(id) => svc
            .profiles()
            .await
            .into_iter()
            .find(|p| p.id == id)
            .with_context(|| format!("no companion with id '{id}'"))?,
        None => match svc.active_profile().await {
            Some(profile) => profile,
            None => bail!("no active companion"),
        },
    };

    println!("Name:         {}", profile.name);
    println!("Relationship: {}", profile.relationship.label());
    println!("Intimacy:     {} - {}", profile.intimacy, profile.intimacy.description());
    println!("Theme:        {} ({})", profile.theme().name, profile.theme_id);
    if !profile.tags.is_empty() {
        println!("Tags:         {}", profile.tags.join(", "));
    }
    println!("Created:      {}", profile.created_at.to_rfc3339());
    println!("Traits:\n{}", profile.traits);
    Ok(())
}

pub async fn create(
    name: &str,
    relationship: &str,
    traits: &str,
    tags: &[String],
    intimacy: &str,
) -> Result<()> {
    let svc = service().await?;
    let mut draft = svc.begin_draft(None).await?;

    draft.name = name.to_string();
    match relationship.parse::<RelationshipKind>() {
        Ok(kind) => draft.relationship_kind = kind,
        Err(_) => {
            draft.use_custom_relationship = true;
            draft.custom_relationship = relationship.to_string();
        }
    }
    draft.base_traits = traits.to_string();
    draft.intimacy = intimacy
        .parse::<IntimacyLevel>()
        .map_err(|_| anyhow::anyhow!("intimacy must be one of: normal, medium, high"))?;
    for tag in tags {
        draft.toggle_tag(tag)?;
    }

    draft.submit()?;
    let profile = svc.commit_draft(draft).await?;
    println!("Created companion '{}' ({})", profile.name, profile.id);
    Ok(())
}

pub async fn select(id: &str) -> Result<()> {
    let svc = service().await?;
    svc.select_profile(id).await?;
    println!("Selected companion {id}");
    Ok(())
}

pub async fn delete(id: &str) -> Result<()> {
    let svc = service().await?;
    let removed = svc.delete_profile(id).await?;
    println!("Deleted companion '{}'", removed.name);
    if let Some(active) = svc.active_profile().await {
        println!("Active companion is now '{}'", active.name);
    } else {
        println!("No companions left.");
    }
    Ok(())
}

pub fn themes() -> Result<()> {
    for theme in registry() {
        println!(
            "{:<10} {:<16} {}  [{}]",
            theme.id.to_string(),
            theme.name,
            theme.description,
            theme.gradient_stops.join(" -> "),
        );
    }
    Ok(())
}

pub async fn whoami(name: Option<&str>) -> Result<()> {
    let svc = service().await?;
    let profile = match name {
        Some(name) => svc.rename_user(name).await?,
        None => svc.user_profile().await?,
    };
    println!("{}", profile.name);
    Ok(())
}
