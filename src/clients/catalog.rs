use crate::clients::errors::Result;

/// Streaming-service operations the playlist builder relies on.
///
/// [`SpotifyClient`](crate::clients::SpotifyClient) is the production
/// implementation; tests provide their own.
pub trait TrackCatalog: Send + Sync {
    /// Identifier of the authenticated user.
    fn current_user_id(&self) -> impl Future<Output = Result<String>> + Send;

    /// Best match for a title/artist pair, or `None` when nothing matches.
    fn search_track(
        &self,
        title: &str,
        artist: &str,
    ) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Create an empty playlist owned by `user_id` and return its identifier.
    fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> impl Future<Output = Result<String>> + Send;

    /// Append tracks to the end of a playlist, keeping the given order.
    fn add_tracks(
        &self,
        playlist_id: &str,
        track_ids: &[String],
    ) -> impl Future<Output = Result<()>> + Send;
}
