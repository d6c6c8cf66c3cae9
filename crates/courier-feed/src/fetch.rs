use tracing::debug;

use crate::error::FeedError;
use crate::record::FeedRecord;

/// Download and deserialize the CSV feed.
///
/// HTTP error statuses are failures; so is any malformed row. A feed that
/// cannot be read completely is not trusted partially.
pub async fn fetch_records(url: &str) -> Result<Vec<FeedRecord>, FeedError> {
    debug!(url, "fetching feed");
    let body = reqwest::get(url)
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    parse_records(&body)
}

/// Deserialize CSV bytes into records. Split out so tests can feed byte
/// slices directly.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<FeedRecord>, FeedError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: FeedRecord = row?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headered_csv() {
        let csv = "title,url,score\n\
                   First,https://example.com/1,42.5\n\
                   Second,https://example.com/2,7\n";
        let records = parse_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "First");
        assert_eq!(records[0].url, "https://example.com/1");
        assert!((records[1].score - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_body_yields_no_records() {
        let records = parse_records(b"title,url,score\n").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn rejects_rows_with_missing_columns() {
        let csv = "title,url,score\njust-a-title\n";
        assert!(matches!(
            parse_records(csv.as_bytes()),
            Err(FeedError::Csv(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_scores() {
        let csv = "title,url,score\nA,https://example.com/a,very popular\n";
        assert!(matches!(
            parse_records(csv.as_bytes()),
            Err(FeedError::Csv(_))
        ));
    }
}
