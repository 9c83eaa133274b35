//! Normalizes raw catalog records into flat output rows.

use crate::client::RawComic;
use chrono::Datelike;
use std::fmt;

/// The dated-event classification denoting first public availability
const ONSALE_DATE: &str = "onsaleDate";

/// Sentinel rendered when the catalog has no usable onsale date
const UNKNOWN_YEAR: &str = "Unknown Publication Year";

/// Calendar year of first sale, or an explicit unknown marker.
///
/// Kept as a tagged union rather than a stringly-typed field so downstream
/// consumers cannot confuse the sentinel with a real year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublicationYear {
    /// Calendar year extracted from the onsale date
    Year(i32),
    /// The onsale date was absent or unparseable
    Unknown,
}

impl fmt::Display for PublicationYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublicationYear::Year(year) => write!(f, "{year}"),
            PublicationYear::Unknown => f.write_str(UNKNOWN_YEAR),
        }
    }
}

/// Flat output row, one per comic issue
#[derive(Clone, Debug, PartialEq)]
pub struct ComicRow {
    /// Issue title, passed through unchanged
    pub title: String,
    /// Publication year derived from the onsale date
    pub year: PublicationYear,
    /// Full cover image URL: thumbnail path + "." + extension
    pub cover_url: String,
}

impl ComicRow {
    /// Build a row from a raw catalog record.
    ///
    /// Total on well-formed input: a missing or unparseable onsale date
    /// degrades to [`PublicationYear::Unknown`] instead of failing.
    pub fn from_raw(comic: RawComic) -> Self {
        let cover_url = format!("{}.{}", comic.thumbnail.path, comic.thumbnail.extension);
        let year = comic
            .dates
            .iter()
            .find(|event| event.kind == ONSALE_DATE)
            .map(|event| parse_year(&event.date))
            .unwrap_or(PublicationYear::Unknown);

        Self {
            title: comic.title,
            year,
            cover_url,
        }
    }
}

// The gateway renders dates like "2020-01-08T00:00:00-0500"; older records
// occasionally carry a bare date, and the gateway's null date has year -1.
// Anything else is Unknown.
fn parse_year(raw: &str) -> PublicationYear {
    let year = if let Ok(datetime) = chrono::DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z") {
        Some(datetime.year())
    } else if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(raw) {
        Some(datetime.year())
    } else if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Some(date.year())
    } else {
        None
    };

    match year {
        Some(year) if year > 0 => PublicationYear::Year(year),
        _ => PublicationYear::Unknown,
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ComicDate, Thumbnail};

    fn raw(title: &str, path: &str, ext: &str, dates: Vec<ComicDate>) -> RawComic {
        RawComic {
            title: title.to_string(),
            thumbnail: Thumbnail {
                path: path.to_string(),
                extension: ext.to_string(),
            },
            dates,
        }
    }

    fn onsale(date: &str) -> ComicDate {
        ComicDate {
            kind: ONSALE_DATE.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn cover_url_joins_path_and_extension_with_a_period() {
        let row = ComicRow::from_raw(raw("X #1", "http://x/y", "jpg", vec![]));
        assert_eq!(row.cover_url, "http://x/y.jpg");
    }

    #[test]
    fn gateway_timestamp_yields_calendar_year() {
        let row = ComicRow::from_raw(raw(
            "Thor #1",
            "http://x/y",
            "jpg",
            vec![onsale("2020-01-08T00:00:00-0500")],
        ));
        assert_eq!(row.year, PublicationYear::Year(2020));
    }

    #[test]
    fn bare_date_yields_calendar_year() {
        let row = ComicRow::from_raw(raw("A #1", "p", "jpg", vec![onsale("2011-05-04")]));
        assert_eq!(row.year, PublicationYear::Year(2011));
    }

    #[test]
    fn missing_onsale_entry_is_unknown() {
        let other = ComicDate {
            kind: "focDate".to_string(),
            date: "2019-12-01T00:00:00-0500".to_string(),
        };
        let row = ComicRow::from_raw(raw("B #1", "p", "jpg", vec![other]));
        assert_eq!(row.year, PublicationYear::Unknown);
    }

    #[test]
    fn empty_dates_is_unknown() {
        let row = ComicRow::from_raw(raw("C #1", "p", "jpg", vec![]));
        assert_eq!(row.year, PublicationYear::Unknown);
    }

    #[test]
    fn unparseable_date_is_unknown() {
        // "-0001-11-30..." is the gateway's null-date convention
        for bad in ["-0001-11-30T00:00:00-0500", "not a date", ""] {
            let row = ComicRow::from_raw(raw("D #1", "p", "jpg", vec![onsale(bad)]));
            assert_eq!(row.year, PublicationYear::Unknown, "input: {bad:?}");
        }
    }

    #[test]
    fn unknown_year_renders_the_sentinel() {
        assert_eq!(
            PublicationYear::Unknown.to_string(),
            "Unknown Publication Year"
        );
        assert_eq!(PublicationYear::Year(2020).to_string(), "2020");
    }

    #[test]
    fn first_onsale_entry_wins_when_duplicated() {
        let row = ComicRow::from_raw(raw(
            "E #1",
            "p",
            "jpg",
            vec![onsale("2018-03-07T00:00:00-0500"), onsale("1999-01-01")],
        ));
        assert_eq!(row.year, PublicationYear::Year(2018));
    }
}
