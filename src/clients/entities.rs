use std::fmt;

/// One row of a weekly chart. Rank is 1-based and follows document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartEntry {
    /// 1-based chart position
    pub rank: usize,
    /// Song title
    pub title: String,
    /// Credited artist(s)
    pub artist: String,
}

impl fmt::Display for ChartEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.artist)
    }
}

/// Outcome of looking up one chart entry in a track catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTrack {
    /// Entry that was looked up
    pub entry: ChartEntry,
    /// Catalog URI of the top search hit
    pub track_id: Option<String>,
}

impl ResolvedTrack {
    /// Whether the search matched a track
    pub fn found(&self) -> bool {
        self.track_id.is_some()
    }
}

/// A playlist as created by this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Description shown under the name
    pub description: String,
    /// Visibility; always private here
    pub public: bool,
    /// Track URIs appended, in chart order
    pub tracks: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_displays_as_title_by_artist() {
        let entry = ChartEntry {
            rank: 1,
            title: "Lovin On Me".to_string(),
            artist: "Jack Harlow".to_string(),
        };
        assert_eq!(entry.to_string(), "Lovin On Me by Jack Harlow");
    }

    #[test]
    fn resolved_track_reports_found() {
        let entry = ChartEntry {
            rank: 2,
            title: "Paint The Town Red".to_string(),
            artist: "Doja Cat".to_string(),
        };
        let hit = ResolvedTrack {
            entry: entry.clone(),
            track_id: Some("spotify:track:abc".to_string()),
        };
        let miss = ResolvedTrack {
            entry,
            track_id: None,
        };
        assert!(hit.found());
        assert!(!miss.found());
    }
}
