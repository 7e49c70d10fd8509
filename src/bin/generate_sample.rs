use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{
    ArrayRef, Float64Array, Int32Array, Int64Array, ListBuilder, StringArray, StringBuilder,
};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use cinescope::data::filter::GENRES;
use cinescope::data::mock;
use cinescope::data::model::Movie;
use cinescope::util::format::round_to;

const SYNTHETIC_MOVIES: usize = 54;

const ADJECTIVES: [&str; 8] = [
    "Silent", "Crimson", "Last", "Hidden", "Electric", "Broken", "Golden", "Midnight",
];
const NOUNS: [&str; 8] = [
    "Horizon", "Empire", "Garden", "Signal", "Harbor", "Orbit", "Promise", "Frontier",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn synthetic_movie(id: u64, rng: &mut SimpleRng) -> Movie {
    let title = format!(
        "The {} {}",
        ADJECTIVES[rng.below(ADJECTIVES.len())],
        NOUNS[rng.below(NOUNS.len())]
    );

    let n_genres = 1 + rng.below(3);
    let mut genres: Vec<String> = Vec::with_capacity(n_genres);
    while genres.len() < n_genres {
        let g = GENRES[rng.below(GENRES.len())].to_string();
        if !genres.contains(&g) {
            genres.push(g);
        }
    }

    Movie {
        id,
        title,
        poster_url: format!("/sample_{id:03}.jpg"),
        rating: round_to(rng.gauss(7.0, 1.2).clamp(1.0, 10.0), 1),
        ml_confidence: round_to(rng.next_f64(), 2),
        release_year: 1995 + rng.below(30) as i32,
        genres,
    }
}

fn write_parquet(movies: &[Movie], path: &str) -> Result<()> {
    let mut genres = ListBuilder::new(StringBuilder::new());
    for m in movies {
        for g in &m.genres {
            genres.values().append_value(g);
        }
        genres.append(true);
    }

    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("title", DataType::Utf8, false),
        Field::new("poster_url", DataType::Utf8, false),
        Field::new("rating", DataType::Float64, false),
        Field::new("ml_confidence", DataType::Float64, false),
        Field::new("release_year", DataType::Int32, false),
        Field::new(
            "genres",
            DataType::List(Arc::new(Field::new("item", DataType::Utf8, true))),
            true,
        ),
    ]));

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from_iter_values(movies.iter().map(|m| m.id as i64))),
        Arc::new(StringArray::from_iter_values(movies.iter().map(|m| m.title.as_str()))),
        Arc::new(StringArray::from_iter_values(movies.iter().map(|m| m.poster_url.as_str()))),
        Arc::new(Float64Array::from_iter_values(movies.iter().map(|m| m.rating))),
        Arc::new(Float64Array::from_iter_values(movies.iter().map(|m| m.ml_confidence))),
        Arc::new(Int32Array::from_iter_values(movies.iter().map(|m| m.release_year))),
        Arc::new(genres.finish()),
    ];

    let batch = RecordBatch::try_new(schema.clone(), columns).context("building record batch")?;

    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut movies = mock::trending_movies();
    let first_id = movies.len() as u64 + 1;
    for id in first_id..first_id + SYNTHETIC_MOVIES as u64 {
        movies.push(synthetic_movie(id, &mut rng));
    }

    let parquet_path = "sample_movies.parquet";
    write_parquet(&movies, parquet_path)?;

    let json_path = "sample_movies.json";
    let json = serde_json::to_string_pretty(&movies).context("serializing movies")?;
    std::fs::write(json_path, json).with_context(|| format!("writing {json_path}"))?;

    println!(
        "Wrote {} movies to {parquet_path} and {json_path}",
        movies.len()
    );
    Ok(())
}
