// Copyright (C) 2020 Kevin Del Castillo Ramírez
//
// This file is part of movie-recommender.
//
// movie-recommender is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// movie-recommender is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with movie-recommender.  If not, see <http://www.gnu.org/licenses/>.

use controller::{Genres, Movie};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use engine::{correlation::pearson_correlation, recommend, Catalog, Query, RatingMatrixBuilder};
use rand::{thread_rng, Rng};
use std::collections::HashMap;

fn generate_columns(size: u64) -> (HashMap<u64, f64>, HashMap<u64, f64>) {
    let mut rng = thread_rng();

    let mut a = HashMap::new();
    let mut b = HashMap::new();

    for i in 0..size {
        a.insert(i, rng.gen_range(0.5, 5.0));

        // Create one that's shortest
        if i > (0.3 * size as f64) as u64 {
            b.insert(i, rng.gen_range(0.5, 5.0));
        }
    }

    (a, b)
}

fn pearson_1000(c: &mut Criterion) {
    let (a, b) = generate_columns(1000);

    c.bench_function("pearson 1000", |bench| {
        bench.iter(|| pearson_correlation(black_box(&a), black_box(&b)))
    });
}

fn pearson_100_000(c: &mut Criterion) {
    let (a, b) = generate_columns(100_000);

    c.bench_function("pearson 100_000", |bench| {
        bench.iter(|| pearson_correlation(black_box(&a), black_box(&b)))
    });
}

fn recommend_500_movies(c: &mut Criterion) {
    let mut rng = thread_rng();
    let mut builder = RatingMatrixBuilder::new();
    let mut movies = Vec::new();

    for movie_id in 0..500u64 {
        let title = format!("Movie {}", movie_id);
        for user in 0..600u64 {
            if rng.gen_bool(0.1) {
                let score = f64::from(rng.gen_range(1u8, 11)) / 2.0;
                builder
                    .insert(user, &title, score)
                    .expect("every (user, title) cell is generated once");
            }
        }

        let genres = Genres::from_tags(vec![["Action", "Drama", "Comedy"][movie_id as usize % 3]]);
        movies.push(Movie::new(movie_id, &title, "en", genres));
    }

    let matrix = builder.build();
    let catalog: Catalog = movies.into_iter().collect();

    c.bench_function("recommend 500 movies", |bench| {
        bench.iter(|| recommend(&catalog, &matrix, black_box(&Query::new("Movie 0", 10))))
    });
}

criterion_group!(benches, pearson_1000, pearson_100_000, recommend_500_movies);
criterion_main!(benches);
