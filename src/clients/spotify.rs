use std::path::PathBuf;

use log::debug;

use crate::clients::{
    catalog::TrackCatalog,
    errors::{Error, Result},
};
use rspotify::{
    AuthCodeSpotify, Config, Credentials, OAuth,
    model::{PlayableId, PlaylistId, SearchResult, SearchType, TrackId, UserId},
    prelude::*,
    scopes,
};

// Upper bound on items per "add items to playlist" request
const MAX_ITEMS_PER_REQUEST: usize = 100;

// Field-filtered search query for one chart entry
fn search_query(title: &str, artist: &str) -> String {
    format!("track:{title} artist:{artist}")
}

// URI of the top search hit. A top hit without an id (local file) is a miss.
fn top_track_uri<'a>(ids: impl IntoIterator<Item = Option<TrackId<'a>>>) -> Option<String> {
    ids.into_iter().next().flatten().map(|id| id.uri())
}

// Split track URIs into request-sized batches, keeping their order
fn track_batches(track_ids: &[String]) -> Result<Vec<Vec<PlayableId<'_>>>> {
    let items = track_ids
        .iter()
        .map(|uri| TrackId::from_uri(uri).map(PlayableId::Track))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(items
        .chunks(MAX_ITEMS_PER_REQUEST)
        .map(<[PlayableId<'_>]>::to_vec)
        .collect())
}

/// Spotify-backed [`TrackCatalog`] using the OAuth authorization code flow.
pub struct SpotifyClient {
    spotify: AuthCodeSpotify,
}

impl SpotifyClient {
    /// Authorize the Spotify client via CLI prompt and OAuth flow.
    /// A valid cached token is reused without prompting.
    pub async fn authorize_client(&self) -> Result<()> {
        debug!("Starting Spotify authorization ...");
        let url = self.spotify.get_authorize_url(true)?;
        self.spotify.prompt_for_token(&url).await?;
        let user = self.spotify.me().await?;
        debug!("Authenticated as user: {:?}", user.display_name);
        Ok(())
    }

    /// Create a `SpotifyClient` from environment variables or raise a configuration error
    pub fn try_default() -> Result<Self> {
        let creds = Credentials::from_env().ok_or_else(|| {
            Error::ConfigurationError(
                "Missing Spotify credentials (RSPOTIFY_CLIENT_ID, RSPOTIFY_CLIENT_SECRET) in environment variables.".into(),
            )
        })?;
        let oauth = OAuth::from_env(scopes!("playlist-modify-private")).ok_or_else(|| {
            Error::ConfigurationError(
                "Missing Spotify redirect URI (RSPOTIFY_REDIRECT_URI) in environment variables.".into(),
            )
        })?;

        let cache_path = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp")) // Fallback to /tmp if cache directory can't be determined
            .join(".rcharts_token_cache");

        let spotify = AuthCodeSpotify::with_config(
            creds,
            oauth,
            Config {
                token_cached: true,
                cache_path,
                ..Default::default()
            },
        );

        Ok(Self { spotify })
    }
}

impl TrackCatalog for SpotifyClient {
    async fn current_user_id(&self) -> Result<String> {
        let user = self.spotify.me().await?;
        Ok(user.id.id().to_owned())
    }

    async fn search_track(&self, title: &str, artist: &str) -> Result<Option<String>> {
        let query = search_query(title, artist);
        debug!("Searching Spotify for {query:?}");
        let result = self
            .spotify
            .search(&query, SearchType::Track, None, None, Some(1), None)
            .await?;
        match result {
            SearchResult::Tracks(page) => Ok(top_track_uri(page.items.into_iter().map(|track| track.id))),
            other => Err(Error::UnexpectedResponse(format!(
                "expected tracks for {query:?}, got {other:?}"
            ))),
        }
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> Result<String> {
        let user_id = UserId::from_id(user_id)?;
        let playlist = self
            .spotify
            .user_playlist_create(user_id, name, Some(public), None, Some(description))
            .await?;
        debug!("Created playlist {name:?} ({})", playlist.id.id());
        Ok(playlist.id.id().to_owned())
    }

    async fn add_tracks(&self, playlist_id: &str, track_ids: &[String]) -> Result<()> {
        let playlist_id = PlaylistId::from_id(playlist_id)?;
        for batch in track_batches(track_ids)? {
            debug!("Appending {} tracks to playlist {}", batch.len(), playlist_id.id());
            self.spotify
                .playlist_add_items(playlist_id.clone(), batch, None)
                .await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track_uri(n: usize) -> String {
        format!("spotify:track:{n:022}")
    }

    fn batch_ids(batch: &[PlayableId<'_>]) -> Vec<String> {
        batch
            .iter()
            .map(|item| match item {
                PlayableId::Track(id) => id.uri(),
                other => panic!("Expected only tracks, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn query_filters_on_title_and_artist() {
        assert_eq!(
            search_query("Lovin On Me", "Jack Harlow"),
            "track:Lovin On Me artist:Jack Harlow"
        );
    }

    #[test]
    fn top_hit_uri_is_the_identifier() {
        let first = TrackId::from_id("4xhsWYTOGcal8zt0J161CU").unwrap();
        let second = TrackId::from_id("2IGMVunIBsBLtEQyoI1Mu7").unwrap();

        let uri = top_track_uri([Some(first), Some(second)]);

        assert_eq!(uri.as_deref(), Some("spotify:track:4xhsWYTOGcal8zt0J161CU"));
    }

    #[test]
    fn no_hits_or_unidentified_top_hit_is_a_miss() {
        assert_eq!(top_track_uri(Vec::<Option<TrackId<'_>>>::new()), None);
        let later = TrackId::from_id("2IGMVunIBsBLtEQyoI1Mu7").unwrap();
        assert_eq!(top_track_uri([None, Some(later)]), None);
    }

    #[test]
    fn full_chart_fits_one_request() {
        let uris: Vec<_> = (0..100).map(track_uri).collect();

        let batches = track_batches(&uris).unwrap();

        assert_eq!(batches.len(), 1);
        assert_eq!(batch_ids(&batches[0]), uris);
    }

    #[test]
    fn batches_split_at_limit_and_keep_order() {
        let uris: Vec<_> = (0..250).map(track_uri).collect();

        let batches = track_batches(&uris).unwrap();

        assert_eq!(
            batches.iter().map(Vec::len).collect::<Vec<_>>(),
            vec![100, 100, 50]
        );
        let flattened: Vec<_> = batches.iter().flat_map(|b| batch_ids(b)).collect();
        assert_eq!(flattened, uris);
    }

    #[test]
    fn no_tracks_means_no_requests() {
        assert!(track_batches(&[]).unwrap().is_empty());
    }

    #[test]
    fn malformed_uri_is_rejected() {
        let uris = vec![track_uri(1), "not-a-track".to_string()];

        assert!(matches!(track_batches(&uris), Err(Error::InvalidId(_))));
    }
}
