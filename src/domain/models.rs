use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Series,
    Movie,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Series => "series",
            ItemKind::Movie => "movie",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WatchStatus {
    Watching,
    Completed,
    Dropped,
}

impl WatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WatchStatus::Watching => "watching",
            WatchStatus::Completed => "completed",
            WatchStatus::Dropped => "dropped",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WatchItem {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub season: Option<u32>,
    pub episode: Option<u32>,
    pub status: WatchStatus,
    pub rating: f32,
    pub notes: String,
}

impl WatchItem {
    /// Season and episode only apply to series; movies always store null.
    pub fn new(title: String, kind: ItemKind, season: u32, episode: u32) -> Self {
        let (season, episode) = match kind {
            ItemKind::Series => (Some(season), Some(episode)),
            ItemKind::Movie => (None, None),
        };

        WatchItem {
            title,
            kind,
            season,
            episode,
            status: WatchStatus::Watching,
            rating: 0.0,
            notes: String::new(),
        }
    }

    /// Next episode to watch, or None for movies and anything not
    /// currently being watched. An unset episode counts as S1E1.
    pub fn next_episode(&self) -> Option<(u32, u32)> {
        if self.kind != ItemKind::Series || self.status != WatchStatus::Watching {
            return None;
        }

        match self.episode {
            None => Some((1, 1)),
            Some(episode) => Some((self.season.unwrap_or(1), episode + 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_episode_watching_series() {
        let mut item = WatchItem::new("Foo".to_string(), ItemKind::Series, 2, 5);
        assert_eq!(item.next_episode(), Some((2, 6)));

        item.episode = None;
        assert_eq!(item.next_episode(), Some((1, 1)));
    }

    #[test]
    fn test_next_episode_not_watching() {
        let mut item = WatchItem::new("Foo".to_string(), ItemKind::Series, 2, 5);
        item.status = WatchStatus::Completed;
        assert_eq!(item.next_episode(), None);

        item.status = WatchStatus::Dropped;
        assert_eq!(item.next_episode(), None);
    }

    #[test]
    fn test_next_episode_movie() {
        let item = WatchItem::new("Heat".to_string(), ItemKind::Movie, 1, 0);
        assert_eq!(item.next_episode(), None);
    }

    #[test]
    fn test_movie_forces_null_progress() {
        let item = WatchItem::new("Heat".to_string(), ItemKind::Movie, 3, 7);
        assert_eq!(item.season, None);
        assert_eq!(item.episode, None);
    }

    #[test]
    fn test_serialized_field_names() {
        let item = WatchItem::new("Heat".to_string(), ItemKind::Movie, 1, 0);
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["title"], "Heat");
        assert_eq!(value["type"], "movie");
        assert!(value["season"].is_null());
        assert!(value["episode"].is_null());
        assert_eq!(value["status"], "watching");
        assert_eq!(value["rating"], 0.0);
        assert_eq!(value["notes"], "");
    }
}
