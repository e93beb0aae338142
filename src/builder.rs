use log::{debug, info, warn};

use crate::clients::{
    catalog::TrackCatalog,
    entities::{ChartEntry, Playlist, ResolvedTrack},
    errors::Result,
};

/// Description given to every generated playlist
pub const PLAYLIST_DESCRIPTION: &str = "Playlist generated from the top 100 songs of the Billboard Hot 100.";

/// Playlist name for a chart label such as `2024-01-06`
pub fn playlist_name(label: &str) -> String {
    format!("Billboard Top 100 - {label}")
}

/// Turns chart entries into a private playlist on a track catalog
pub struct PlaylistBuilder<C> {
    catalog: C,
}

impl<C: TrackCatalog> PlaylistBuilder<C> {
    /// Builder on top of `catalog`
    pub fn new(catalog: C) -> Self {
        PlaylistBuilder { catalog }
    }

    /// The wrapped catalog
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Look up every entry, one request at a time, keeping chart order.
    ///
    /// A miss is logged and recorded; only catalog failures abort.
    pub async fn resolve(&self, entries: &[ChartEntry]) -> Result<Vec<ResolvedTrack>> {
        let mut resolved = Vec::with_capacity(entries.len());
        for entry in entries {
            let track_id = self.catalog.search_track(&entry.title, &entry.artist).await?;
            let track = ResolvedTrack {
                entry: entry.clone(),
                track_id,
            };
            if track.found() {
                debug!("#{} {} resolved", entry.rank, entry);
            } else {
                warn!("No track found for #{} {}", entry.rank, entry);
            }
            resolved.push(track);
        }
        Ok(resolved)
    }

    /// Create the playlist, then append every resolved track in one batch.
    ///
    /// The playlist exists even when nothing resolves; it is just left empty.
    pub async fn create_playlist(
        &self,
        user_id: &str,
        label: &str,
        entries: &[ChartEntry],
    ) -> Result<Playlist> {
        let name = playlist_name(label);
        let id = self
            .catalog
            .create_playlist(user_id, &name, PLAYLIST_DESCRIPTION, false)
            .await?;
        info!("Created playlist '{name}'");

        let tracks: Vec<String> = self
            .resolve(entries)
            .await?
            .into_iter()
            .filter_map(|track| track.track_id)
            .collect();

        if tracks.is_empty() {
            warn!("No songs could be added to playlist '{name}'");
        } else {
            self.catalog.add_tracks(&id, &tracks).await?;
            info!(
                "Added {} of {} songs to playlist '{name}'",
                tracks.len(),
                entries.len()
            );
        }

        Ok(Playlist {
            id,
            name,
            description: PLAYLIST_DESCRIPTION.to_string(),
            public: false,
            tracks,
        })
    }
}
