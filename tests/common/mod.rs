//! Shared test doubles for the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use rcharts::clients::TrackCatalog;
use rcharts::clients::errors::{Error, Result};

pub const FIXTURE: &str = include_str!("../fixtures/hot-100-2024-01-06.html");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPlaylist {
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub public: bool,
}

/// In-memory catalog that records every call made against it.
#[derive(Default)]
pub struct FakeCatalog {
    user_id: String,
    tracks: HashMap<(String, String), String>,
    failing_search: Option<String>,
    pub searches: Mutex<Vec<(String, String)>>,
    pub created: Mutex<Vec<CreatedPlaylist>>,
    pub appended: Mutex<Vec<(String, Vec<String>)>>,
    pub user_lookups: Mutex<usize>,
}

impl FakeCatalog {
    pub fn new(user_id: &str) -> Self {
        FakeCatalog {
            user_id: user_id.to_string(),
            ..Default::default()
        }
    }

    pub fn with_track(mut self, title: &str, artist: &str, uri: &str) -> Self {
        self.tracks
            .insert((title.to_string(), artist.to_string()), uri.to_string());
        self
    }

    /// Make searches for `title` fail the way an expired token would.
    pub fn failing_on(mut self, title: &str) -> Self {
        self.failing_search = Some(title.to_string());
        self
    }
}

impl TrackCatalog for FakeCatalog {
    async fn current_user_id(&self) -> Result<String> {
        *self.user_lookups.lock().unwrap() += 1;
        Ok(self.user_id.clone())
    }

    async fn search_track(&self, title: &str, artist: &str) -> Result<Option<String>> {
        self.searches
            .lock()
            .unwrap()
            .push((title.to_string(), artist.to_string()));
        if self.failing_search.as_deref() == Some(title) {
            return Err(Error::UnexpectedResponse("401 Unauthorized".to_string()));
        }
        Ok(self
            .tracks
            .get(&(title.to_string(), artist.to_string()))
            .cloned())
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> Result<String> {
        let mut created = self.created.lock().unwrap();
        created.push(CreatedPlaylist {
            user_id: user_id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            public,
        });
        Ok(format!("playlist-{}", created.len()))
    }

    async fn add_tracks(&self, playlist_id: &str, track_ids: &[String]) -> Result<()> {
        self.appended
            .lock()
            .unwrap()
            .push((playlist_id.to_string(), track_ids.to_vec()));
        Ok(())
    }
}
