//! Streamed file reading
//!
//! Parses one `;`-delimited source file row by row, normalizing and
//! validating each record. Rows failing validation are skipped with a
//! warning; a stream or IO failure aborts the whole read.

use std::path::Path;

use futures::StreamExt;
use tracing::{info, warn};
use vintry_common::WineType;

use crate::loader::LoadError;
use crate::record::{self, WineRecord};

/// Reads a wine source file, returning its accepted records in row order.
///
/// Each file gets its own result vector; the orchestrator merges the two
/// after both reads complete, so no collection is shared across tasks.
pub async fn read_wine_file(path: &Path, wine_type: WineType) -> Result<Vec<WineRecord>, LoadError> {
    info!(wine_type = %wine_type, path = %path.display(), "starting file processing");

    let file = tokio::fs::File::open(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv_async::AsyncReaderBuilder::new()
        .delimiter(b';')
        .create_reader(file);

    let headers = reader.headers().await?.clone();
    let mut rows = reader.records();
    let mut accepted = Vec::new();

    while let Some(row) = rows.next().await {
        let row = row?;
        match record::normalize_row(headers.iter().zip(row.iter()), wine_type).into_record() {
            Ok(rec) => accepted.push(rec),
            Err(err) => {
                warn!(
                    wine_type = %wine_type,
                    error = %err,
                    row = ?row,
                    "skipping row with invalid or missing quality"
                );
            },
        }
    }

    info!(
        wine_type = %wine_type,
        count = accepted.len(),
        "file processing complete"
    );

    Ok(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "fixed acidity;volatile acidity;citric acid;residual sugar;chlorides;free sulfur dioxide;total sulfur dioxide;density;pH;sulphates;alcohol;quality";

    fn fixture(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[tokio::test]
    async fn test_reads_valid_rows_in_order() {
        let file = fixture(&[
            "7.4;0.70;0.00;1.9;0.076;11;34;0.9978;3.51;0.56;9.4;5",
            "7.8;0.88;0.00;2.6;0.098;25;67;0.9968;3.20;0.68;9.8;5",
            "6.3;0.30;0.34;1.6;0.049;14;132;0.9940;3.30;0.49;9.5;6",
        ]);

        let records = read_wine_file(file.path(), WineType::Red).await.unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.wine_type == WineType::Red));
        assert_eq!(records[0].fixed_acidity, Some(7.4));
        assert_eq!(records[1].fixed_acidity, Some(7.8));
        assert_eq!(records[2].quality, 6);
    }

    #[tokio::test]
    async fn test_skips_rows_with_bad_quality() {
        let file = fixture(&[
            "7.4;0.70;0.00;1.9;0.076;11;34;0.9978;3.51;0.56;9.4;5",
            "7.8;0.88;0.00;2.6;0.098;25;67;0.9968;3.20;0.68;9.8;11",
            "6.3;0.30;0.34;1.6;0.049;14;132;0.9940;3.30;0.49;9.5;",
            "6.3;0.30;0.34;1.6;0.049;14;132;0.9940;3.30;0.49;9.5;6",
        ]);

        let records = read_wine_file(file.path(), WineType::White).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].quality, 5);
        assert_eq!(records[1].quality, 6);
    }

    #[tokio::test]
    async fn test_unparseable_measurement_is_nulled_not_skipped() {
        let file = fixture(&["bad;0.70;0.00;1.9;0.076;11;34;0.9978;3.51;0.56;9.4;5"]);

        let records = read_wine_file(file.path(), WineType::Red).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fixed_acidity, None);
        assert_eq!(records[0].volatile_acidity, Some(0.7));
    }

    #[tokio::test]
    async fn test_ph_header_normalizes() {
        let file = fixture(&["7.4;0.70;0.00;1.9;0.076;11;34;0.9978;3.51;0.56;9.4;5"]);

        let records = read_wine_file(file.path(), WineType::Red).await.unwrap();
        assert_eq!(records[0].ph, Some(3.51));
    }

    #[tokio::test]
    async fn test_missing_file_fails_the_read() {
        let result =
            read_wine_file(Path::new("/nonexistent/winequality-red.csv"), WineType::Red).await;
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[tokio::test]
    async fn test_header_only_file_yields_no_records() {
        let file = fixture(&[]);
        let records = read_wine_file(file.path(), WineType::Red).await.unwrap();
        assert!(records.is_empty());
    }
}
