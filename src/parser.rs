//! Billboard Hot 100 page parser.
//!
//! Every chart row is rendered as an `li.lrv-u-width-100p` container holding
//! the song title in an `h3` and the artist in the `span` that follows it,
//! next to a set of stat columns (last week, peak, weeks on chart) that are
//! also `span`s. Title and artist are always read from the same container so
//! the stat spans can never shift an artist onto the wrong title.

use log::debug;
use scraper::{ElementRef, Html};

use crate::clients::entities::ChartEntry;
use crate::selector;

/// Extract the chart rows from a Hot 100 page, in rank order.
///
/// Rows missing a title or an artist are dropped rather than emitted half
/// filled, so the result is either well formed or empty.
pub fn parse_chart(html: &str) -> Vec<ChartEntry> {
    let document = Html::parse_document(html);
    let row = selector!("li.lrv-u-width-100p");

    document
        .select(row)
        .filter(|container| {
            !container
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|ancestor| row.matches(&ancestor))
        })
        .filter_map(parse_row)
        .enumerate()
        .map(|(idx, (title, artist))| ChartEntry {
            rank: idx + 1,
            title,
            artist,
        })
        .collect()
}

fn parse_row(container: ElementRef) -> Option<(String, String)> {
    let Some(heading) = container.select(selector!("h3")).next() else {
        debug!("Skipping chart container without a title heading");
        return None;
    };
    let title = normalized_text(heading)?;
    let Some(artist) = artist_after(heading) else {
        debug!("Skipping {title:?}: no artist found in its row");
        return None;
    };
    Some((title, artist))
}

// The artist is the first non-empty span following the heading inside the
// heading's own item. Other list items in the row hold stat columns, so the
// search neither climbs out of that item nor descends into sibling lists.
fn artist_after(heading: ElementRef) -> Option<String> {
    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find_map(|sibling| match sibling.value().name() {
            "span" => normalized_text(sibling),
            "ul" | "ol" | "li" => None,
            _ => sibling.select(selector!("span")).find_map(normalized_text),
        })
}

fn normalized_text(element: ElementRef) -> Option<String> {
    let text = element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");
    (!text.is_empty()).then_some(text)
}
