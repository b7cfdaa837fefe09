mod cli;
mod config;
mod domain;
mod infra;

use anyhow::{bail, Result};
use clap::Parser;

use cli::{Cli, Command, StatusFilter};
use domain::models::{ItemKind, WatchItem, WatchStatus};
use infra::store::Store;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load()?;
    let strict = cli.strict || config.strict;

    let mut store = Store::load(config.data_file);

    match cli.command {
        Command::Add {
            title,
            kind,
            season,
            episode,
            rating,
            notes,
        } => add_item(&mut store, title, kind, season, episode, rating, notes),
        Command::List { status } => {
            list_items(&store, status);
            Ok(())
        }
        Command::Update {
            title,
            season,
            episode,
            status,
            rating,
            notes,
        } => update_item(&mut store, &title, season, episode, status, rating, notes),
        Command::NextEpisode { title } => next_episode(&store, title.as_deref(), strict),
        Command::Complete { title } => {
            set_status(&mut store, &title, WatchStatus::Completed, strict)
        }
        Command::Drop { title } => set_status(&mut store, &title, WatchStatus::Dropped, strict),
    }
}

fn add_item(
    store: &mut Store,
    title: String,
    kind: ItemKind,
    season: u32,
    episode: u32,
    rating: f32,
    notes: String,
) -> Result<()> {
    let mut item = WatchItem::new(title.clone(), kind, season, episode);
    item.rating = rating;
    item.notes = notes;

    if !store.add(item) {
        bail!("{title} already exists");
    }

    println!("Added: {title}");
    Ok(())
}

fn list_items(store: &Store, filter: StatusFilter) {
    if store.items().is_empty() {
        println!("No items in watchlist");
        return;
    }

    println!(
        "{:<30} {:<10} {:<10} {:<10}",
        "Title", "Type", "Status", "Progress"
    );
    println!("{}", "-".repeat(70));

    for item in store.items() {
        if !filter.matches(item.status) {
            continue;
        }

        let title = if item.title.chars().count() > 28 {
            let short: String = item.title.chars().take(28).collect();
            format!("{short}...")
        } else {
            item.title.clone()
        };

        let progress = match item.kind {
            ItemKind::Series => match item.episode {
                Some(episode) if episode > 0 => {
                    format!("S{} E{}", item.season.unwrap_or(1), episode)
                }
                _ => "Not started".to_string(),
            },
            ItemKind::Movie => "Movie".to_string(),
        };

        println!(
            "{title:<30} {:<10} {:<10} {progress:<10}",
            item.kind.as_str(),
            item.status.as_str()
        );
    }
}

fn update_item(
    store: &mut Store,
    title: &str,
    season: Option<u32>,
    episode: Option<u32>,
    status: Option<WatchStatus>,
    rating: Option<f32>,
    notes: Option<String>,
) -> Result<()> {
    let Some(existing) = store.find_by_title(title) else {
        bail!("{title} not found");
    };
    let mut updated = existing.clone();

    // Progress fields only make sense for series
    if updated.kind == ItemKind::Series {
        if let Some(season) = season {
            updated.season = Some(season);
        }
        if let Some(episode) = episode {
            updated.episode = Some(episode);
        }
    }
    if let Some(status) = status {
        updated.status = status;
    }
    if let Some(rating) = rating {
        updated.rating = rating;
    }
    if let Some(notes) = notes {
        updated.notes = notes;
    }

    if !store.update(title, updated) {
        bail!("failed to update {title}");
    }

    println!("Updated: {title}");
    Ok(())
}

fn next_episode(store: &Store, title: Option<&str>, strict: bool) -> Result<()> {
    if store.items().is_empty() {
        println!("No items in watchlist");
        return Ok(());
    }

    let Some(title) = title else {
        println!("Next episodes to watch:");
        println!("{}", "-".repeat(40));

        for item in store.items() {
            if let Some((season, episode)) = item.next_episode() {
                println!("{}: S{season}E{episode}", item.title);
            }
        }
        return Ok(());
    };

    let Some(item) = store.find_by_title(title) else {
        return not_found(title, strict);
    };

    if item.kind != ItemKind::Series {
        println!("{title} is a movie, not a series");
        return Ok(());
    }

    match item.next_episode() {
        Some((season, episode)) => println!("{title}: Season {season}, Episode {episode}"),
        None => println!("{title} is not currently being watched"),
    }

    Ok(())
}

fn set_status(store: &mut Store, title: &str, status: WatchStatus, strict: bool) -> Result<()> {
    let Some(existing) = store.find_by_title(title) else {
        return not_found(title, strict);
    };
    let mut updated = existing.clone();
    updated.status = status;

    if !store.update(title, updated) {
        bail!("failed to update {title}");
    }

    match status {
        WatchStatus::Completed => println!("Marked as completed: {title}"),
        WatchStatus::Dropped => println!("Marked as dropped: {title}"),
        WatchStatus::Watching => println!("Marked as watching: {title}"),
    }
    Ok(())
}

fn not_found(title: &str, strict: bool) -> Result<()> {
    if strict {
        bail!("{title} not found");
    }

    eprintln!("Error: {title} not found");
    Ok(())
}
