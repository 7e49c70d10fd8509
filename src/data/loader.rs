use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{
    Array, Float32Array, Float64Array, Int32Array, Int64Array, LargeListArray, LargeStringArray,
    ListArray, StringArray, UInt64Array,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::mock;
use super::model::Movie;
use crate::config::AppConfig;
use crate::util::error::handle_api_error;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Movies for the trending dashboard: the configured catalog file, or the
/// built-in mock list when none is configured.
pub fn fetch_trending(config: &AppConfig) -> Result<Vec<Movie>> {
    match &config.catalog_path {
        Some(path) => load_file(path)
            .with_context(|| format!("loading catalog {}", path.display())),
        None => Ok(mock::trending_movies()),
    }
}

/// Load a movie catalog from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.json`    – array of movie records, as served by `/api/movies/trending`
/// * `.csv`     – one movie per row, `genres` semicolon-separated
/// * `.parquet` – `genres` as a list-of-strings column
pub fn load_file(path: &Path) -> Result<Vec<Movie>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// A JSON catalog is the body of the trending endpoint. A saved error
/// response (an object instead of an array) is reported with its message.
fn load_json(path: &Path) -> Result<Vec<Movie>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<Vec<Movie>> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let records = match root {
        JsonValue::Array(records) => records,
        JsonValue::Object(_) => bail!("Catalog holds an API error: {}", handle_api_error(&root)),
        _ => bail!("Expected top-level JSON array"),
    };

    records
        .into_iter()
        .enumerate()
        .map(|(i, rec)| {
            serde_json::from_value::<Movie>(rec).with_context(|| format!("Row {i}: invalid movie record"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with
/// `id,title,poster_url,rating,ml_confidence,release_year,genres`,
/// where `genres` holds semicolon-separated labels (`"Sci-Fi;Action"`).
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: u64,
    title: String,
    #[serde(alias = "posterUrl", alias = "poster_path")]
    poster_url: String,
    rating: f64,
    #[serde(alias = "mlConfidence")]
    ml_confidence: f64,
    #[serde(alias = "releaseYear")]
    release_year: i32,
    #[serde(default)]
    genres: String,
}

impl From<CsvRow> for Movie {
    fn from(row: CsvRow) -> Self {
        Movie {
            id: row.id,
            title: row.title,
            poster_url: row.poster_url,
            rating: row.rating,
            ml_confidence: row.ml_confidence,
            release_year: row.release_year,
            genres: split_genres(&row.genres),
        }
    }
}

fn split_genres(s: &str) -> Vec<String> {
    s.split(';')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

fn load_csv(path: &Path) -> Result<Vec<Movie>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(row_no, result)| {
            result
                .map(Movie::from)
                .with_context(|| format!("CSV row {row_no}"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet catalog.
///
/// Expected schema:
/// - `id`: Int64 / Int32 / UInt64
/// - `title`, `poster_url`: Utf8
/// - `rating`, `ml_confidence`: Float64 / Float32
/// - `release_year`: Int32 / Int64
/// - `genres`: List<Utf8> or LargeList<Utf8> (optional)
fn load_parquet(path: &Path) -> Result<Vec<Movie>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut movies = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let id = required_column(&batch, "id")?;
        let title = required_column(&batch, "title")?;
        let poster = required_column(&batch, "poster_url")?;
        let rating = required_column(&batch, "rating")?;
        let confidence = required_column(&batch, "ml_confidence")?;
        let year = required_column(&batch, "release_year")?;
        let genres = batch.column_by_name("genres");

        for row in 0..batch.num_rows() {
            let movie = Movie {
                id: extract_int(id, row).with_context(|| format!("Row {row}: 'id'"))?,
                title: extract_string(title, row).with_context(|| format!("Row {row}: 'title'"))?,
                poster_url: extract_string(poster, row).unwrap_or_default(),
                rating: extract_f64(rating, row).with_context(|| format!("Row {row}: 'rating'"))?,
                ml_confidence: extract_f64(confidence, row)
                    .with_context(|| format!("Row {row}: 'ml_confidence'"))?,
                release_year: extract_int(year, row)
                    .with_context(|| format!("Row {row}: 'release_year'"))?,
                genres: match genres {
                    Some(col) => extract_string_list(col, row)
                        .with_context(|| format!("Row {row}: 'genres'"))?,
                    None => Vec::new(),
                },
            };
            movies.push(movie);
        }
    }

    Ok(movies)
}

// -- Parquet / Arrow helpers --

fn required_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Arc<dyn Array>> {
    batch
        .column_by_name(name)
        .with_context(|| format!("Parquet file missing '{name}' column"))
}

fn extract_i64(col: &Arc<dyn Array>, row: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("null value");
    }
    let any = col.as_any();
    if let Some(arr) = any.downcast_ref::<Int64Array>() {
        Ok(arr.value(row))
    } else if let Some(arr) = any.downcast_ref::<Int32Array>() {
        Ok(arr.value(row) as i64)
    } else if let Some(arr) = any.downcast_ref::<UInt64Array>() {
        let v = arr.value(row);
        i64::try_from(v)
            .ok()
            .with_context(|| format!("value {v} out of range"))
    } else {
        bail!("expected integer column, got {:?}", col.data_type())
    }
}

/// Integer cell narrowed to the field's type; out-of-range values are errors.
fn extract_int<T: TryFrom<i64>>(col: &Arc<dyn Array>, row: usize) -> Result<T> {
    let v = extract_i64(col, row)?;
    T::try_from(v)
        .ok()
        .with_context(|| format!("value {v} out of range"))
}

fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value");
    }
    let any = col.as_any();
    if let Some(arr) = any.downcast_ref::<Float64Array>() {
        Ok(arr.value(row))
    } else if let Some(arr) = any.downcast_ref::<Float32Array>() {
        Ok(arr.value(row) as f64)
    } else {
        bail!("expected Float64 or Float32 column, got {:?}", col.data_type())
    }
}

fn extract_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value");
    }
    let any = col.as_any();
    if let Some(arr) = any.downcast_ref::<StringArray>() {
        Ok(arr.value(row).to_string())
    } else if let Some(arr) = any.downcast_ref::<LargeStringArray>() {
        Ok(arr.value(row).to_string())
    } else {
        bail!("expected Utf8 column, got {:?}", col.data_type())
    }
}

/// Extract a `Vec<String>` from a List or LargeList column at the given row.
/// A null list means "no genres".
fn extract_string_list(col: &Arc<dyn Array>, row: usize) -> Result<Vec<String>> {
    if col.is_null(row) {
        return Ok(Vec::new());
    }

    let values = match col.data_type() {
        DataType::List(_) => col
            .as_any()
            .downcast_ref::<ListArray>()
            .context("expected ListArray")?
            .value(row),
        DataType::LargeList(_) => col
            .as_any()
            .downcast_ref::<LargeListArray>()
            .context("expected LargeListArray")?
            .value(row),
        other => bail!("Expected List or LargeList column, got {other:?}"),
    };

    (0..values.len())
        .filter(|&i| !values.is_null(i))
        .map(|i| extract_string(&values, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use arrow::array::{Float64Builder, Int32Builder, Int64Builder, ListBuilder, StringBuilder};
    use arrow::datatypes::{Field, Schema};
    use parquet::arrow::ArrowWriter;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_json_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let json = serde_json::to_string(&mock::trending_movies()).unwrap();
        let path = write(&dir, "trending.json", &json);

        let movies = load_file(&path).unwrap();
        assert_eq!(movies, mock::trending_movies());
    }

    #[test]
    fn test_json_error_envelope() {
        let err = parse_json(r#"{"response": {"data": {"message": "Rate limit exceeded"}}}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Catalog holds an API error: Rate limit exceeded");

        assert!(parse_json("42").is_err());
        assert!(parse_json(r#"[{"id": 1}]"#).is_err());
    }

    #[test]
    fn test_csv_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "movies.csv",
            "id,title,poster_url,rating,ml_confidence,release_year,genres\n\
             1,Inception,/9gk7adHYeDMPS6ivNEmZwtI91a0.jpg,8.8,0.92,2010,Sci-Fi;Action;Thriller\n\
             9,Paddington 2,/p.jpg,7.8,0.55,2017,\n",
        );

        let movies = load_file(&path).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Inception");
        assert_eq!(movies[0].genres, ["Sci-Fi", "Action", "Thriller"]);
        assert_eq!(movies[1].release_year, 2017);
        assert!(movies[1].genres.is_empty());
    }

    #[test]
    fn test_csv_accepts_camel_case_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "camel.csv",
            "id,title,posterUrl,rating,mlConfidence,releaseYear,genres\n\
             4,Pulp Fiction,/3W7v0eIac2zGmBRgHd2LYNQDMoD.jpg,8.9,0.87,1994,Crime;Drama\n",
        );

        let movies = load_file(&path).unwrap();
        assert_eq!(movies, &mock::trending_movies()[3..4]);
    }

    #[test]
    fn test_csv_bad_row_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "bad.csv",
            "id,title,poster_url,rating,ml_confidence,release_year,genres\n\
             1,Inception,/a.jpg,high,0.92,2010,Drama\n",
        );
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 0"), "{err:#}");
    }

    fn write_parquet(path: &Path, names: &[&str], columns: Vec<Arc<dyn Array>>) {
        let fields: Vec<Field> = names
            .iter()
            .zip(&columns)
            .map(|(name, col)| Field::new(*name, col.data_type().clone(), true))
            .collect();
        let schema = Arc::new(Schema::new(fields));
        let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();

        let file = std::fs::File::create(path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
    }

    const PARQUET_COLUMNS: [&str; 6] =
        ["id", "title", "poster_url", "rating", "ml_confidence", "release_year"];

    /// One-row catalog without genres; `id` and `release_year` as Int64.
    fn single_row(id: i64, title: Option<&str>, year: i64) -> Vec<Arc<dyn Array>> {
        vec![
            Arc::new(Int64Array::from(vec![id])),
            Arc::new(StringArray::from(vec![title])),
            Arc::new(StringArray::from(vec!["/a.jpg"])),
            Arc::new(Float64Array::from(vec![8.1])),
            Arc::new(Float64Array::from(vec![0.7])),
            Arc::new(Int64Array::from(vec![year])),
        ]
    }

    fn parquet_error(dir: &tempfile::TempDir, names: &[&str], columns: Vec<Arc<dyn Array>>) -> String {
        let path = dir.path().join("bad.parquet");
        write_parquet(&path, names, columns);
        format!("{:#}", load_file(&path).unwrap_err())
    }

    #[test]
    fn test_parquet_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.parquet");

        let mut ids = Int64Builder::new();
        let mut titles = StringBuilder::new();
        let mut posters = StringBuilder::new();
        let mut ratings = Float64Builder::new();
        let mut confidences = Float64Builder::new();
        let mut years = Int32Builder::new();
        let mut genres = ListBuilder::new(StringBuilder::new());
        for m in mock::trending_movies() {
            ids.append_value(m.id as i64);
            titles.append_value(&m.title);
            posters.append_value(&m.poster_url);
            ratings.append_value(m.rating);
            confidences.append_value(m.ml_confidence);
            years.append_value(m.release_year);
            for g in &m.genres {
                genres.values().append_value(g);
            }
            genres.append(true);
        }

        let mut names = PARQUET_COLUMNS.to_vec();
        names.push("genres");
        write_parquet(
            &path,
            &names,
            vec![
                Arc::new(ids.finish()),
                Arc::new(titles.finish()),
                Arc::new(posters.finish()),
                Arc::new(ratings.finish()),
                Arc::new(confidences.finish()),
                Arc::new(years.finish()),
                Arc::new(genres.finish()),
            ],
        );

        let movies = load_file(&path).unwrap();
        assert_eq!(movies, mock::trending_movies());
    }

    #[test]
    fn test_parquet_int64_columns_narrow() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.parquet");
        write_parquet(&path, &PARQUET_COLUMNS, single_row(42, Some("Heat"), 1995));

        let movies = load_file(&path).unwrap();
        assert_eq!((movies[0].id, movies[0].release_year), (42, 1995));
        assert!(movies[0].genres.is_empty());
    }

    #[test]
    fn test_parquet_rejects_out_of_range_integers() {
        let dir = tempfile::tempdir().unwrap();

        let err = parquet_error(&dir, &PARQUET_COLUMNS, single_row(-1, Some("Heat"), 1995));
        assert!(err.contains("Row 0: 'id'"), "{err}");
        assert!(err.contains("value -1 out of range"), "{err}");

        let err = parquet_error(&dir, &PARQUET_COLUMNS, single_row(1, Some("Heat"), 4_294_969_306));
        assert!(err.contains("Row 0: 'release_year'"), "{err}");
        assert!(err.contains("value 4294969306 out of range"), "{err}");
    }

    #[test]
    fn test_parquet_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let mut columns = single_row(1, Some("Heat"), 1995);
        columns.remove(1);
        let names = ["id", "poster_url", "rating", "ml_confidence", "release_year"];

        let err = parquet_error(&dir, &names, columns);
        assert!(err.contains("Parquet file missing 'title' column"), "{err}");
    }

    #[test]
    fn test_parquet_wrong_type_and_null() {
        let dir = tempfile::tempdir().unwrap();

        let rating: Arc<dyn Array> = Arc::new(StringArray::from(vec!["high"]));
        let mut columns = single_row(1, Some("Heat"), 1995);
        columns[3] = rating;
        let err = parquet_error(&dir, &PARQUET_COLUMNS, columns);
        assert!(err.contains("Row 0: 'rating'"), "{err}");
        assert!(err.contains("expected Float64 or Float32 column"), "{err}");

        let err = parquet_error(&dir, &PARQUET_COLUMNS, single_row(1, None, 1995));
        assert!(err.contains("Row 0: 'title'"), "{err}");
        assert!(err.contains("null value"), "{err}");
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_file(Path::new("movies.xlsx")).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported file extension: .xlsx");
    }

    #[test]
    fn test_fetch_trending_defaults_to_mock() {
        let config = AppConfig::default();
        assert_eq!(fetch_trending(&config).unwrap(), mock::trending_movies());

        let config = AppConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/movies.json")),
            ..AppConfig::default()
        };
        let err = fetch_trending(&config).unwrap_err();
        assert!(err.to_string().starts_with("loading catalog"), "{err}");
    }
}
