/// Billboard chart page client
pub mod billboard;
/// Streaming-service seam used by the playlist builder
pub mod catalog;
/// Chart entries, resolved tracks and playlists
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Spotify API client
pub mod spotify;

pub use billboard::BillboardClient;
pub use catalog::TrackCatalog;
pub use spotify::SpotifyClient;
