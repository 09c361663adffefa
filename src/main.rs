// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod parser;
mod utils;

use anyhow::Error;
use clap::{value_t, App, Arg, ArgMatches};
use config::Config;
use controller::ToTable;
use engine::{Engine, Query};
use movies_metadata::MoviesMetadataController;
use parser::{GenreOption, Statement};
use simplelog::{Config as LogConfig, LevelFilter, SimpleLogger, TermLogger, TerminalMode};

macro_rules! prompt {
    ($ed:ident) => {{
        use rustyline::error::ReadlineError;

        match $ed.readline(PROMPT) {
            Ok(line) => {
                $ed.add_history_entry(line.as_str());
                Ok(line)
            }

            Err(ReadlineError::Interrupted) => {
                continue;
            }

            Err(ReadlineError::Eof) => {
                println!("Exiting...Good bye!");
                break;
            }

            Err(e) => Err(e),
        }
    }};
}

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROMPT: &str = ">> ";

fn print_recommendations(engine: &Engine, query: &Query) {
    match engine.recommend(query) {
        Ok(recommended) if recommended.is_empty() => {
            println!("No movie has comparable ratings with '{}'", query.title)
        }
        Ok(recommended) => println!("{}", utils::recommendations_table(&recommended)),
        Err(e) => println!("{}", e),
    }
}

fn print_help() {
    println!("Main help:");
    println!("h | help                               Shows this help");
    println!("q | quit                               Quit");
    println!("v | version                            Shows the version");
    println!("recommend(N, 'Title')                  Top N movies similar to Title");
    println!("recommend(N, 'Title', nogenre)         Same, ignoring genres");
    println!("recommend(N, 'Title', weight(W))       Same, with W per shared genre");
    println!("movie('Title')                         Shows the movie metadata");
    println!("corr('A', 'B')                         Rating correlation of A and B");
}

fn interactive(engine: &Engine) -> Result<(), Error> {
    let mut rl = rustyline::Editor::<()>::new();

    loop {
        let opt: String = prompt!(rl)?;

        match opt.trim() {
            "?" | "h" | "help" => print_help(),

            "q" | "quit" => {
                println!("Bye!");
                break;
            }

            "v" | "version" => {
                println!("version: {}", VERSION);
            }

            empty if empty.is_empty() => {}

            line => match parser::parse_line(line) {
                Some(Statement::Recommend(n, title, option)) => {
                    let mut query = engine.query(&title);
                    query.n = n;

                    match option {
                        GenreOption::Configured => {}
                        GenreOption::Disabled => query.use_genre = false,
                        GenreOption::Weight(weight) => {
                            query.use_genre = true;
                            query.weight = weight;
                        }
                    }

                    print_recommendations(engine, &query);
                }

                Some(Statement::Movie(title)) => match engine.movie(&title) {
                    Ok(movie) => println!("{}", movie.to_table()),
                    Err(e) => println!("{}", e),
                },

                Some(Statement::Correlation(a, b)) => match engine.correlation(&a, &b) {
                    Ok(Some(r)) => println!("Correlation is {:.4}", r),
                    Ok(None) => println!("Not enough common ratings to correlate"),
                    Err(e) => println!("{}", e),
                },

                None => println!("Invalid syntax!"),
            },
        }
    }

    Ok(())
}

fn cli() -> App<'static, 'static> {
    App::new("movie-recommender")
        .version(VERSION)
        .about("Recommends movies by rating correlation and shared genres")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .help("TOML configuration file"),
        )
        .arg(
            Arg::with_name("metadata")
                .long("metadata")
                .value_name("FILE")
                .takes_value(true)
                .help("Movies metadata CSV"),
        )
        .arg(
            Arg::with_name("ratings")
                .long("ratings")
                .value_name("FILE")
                .takes_value(true)
                .help("Ratings CSV"),
        )
        .arg(
            Arg::with_name("language")
                .short("l")
                .long("language")
                .takes_value(true)
                .help("Only keep movies in this original language"),
        )
        .arg(
            Arg::with_name("all-languages")
                .long("all-languages")
                .conflicts_with("language")
                .help("Keep movies in every language"),
        )
        .arg(
            Arg::with_name("query")
                .short("q")
                .long("query")
                .value_name("TITLE")
                .takes_value(true)
                .help("Print recommendations for TITLE and exit"),
        )
        .arg(
            Arg::with_name("top")
                .short("n")
                .long("top")
                .takes_value(true)
                .help("Number of recommendations"),
        )
        .arg(
            Arg::with_name("no-genre")
                .long("no-genre")
                .help("Score by rating correlation only"),
        )
        .arg(
            Arg::with_name("weight")
                .short("w")
                .long("weight")
                .takes_value(true)
                .help("Bonus per shared genre"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("More logging, can be repeated"),
        )
}

fn apply_overrides(config: &mut Config, matches: &ArgMatches) {
    if let Some(path) = matches.value_of("metadata") {
        config.data.metadata_path = path.into();
    }

    if let Some(path) = matches.value_of("ratings") {
        config.data.ratings_path = path.into();
    }

    if let Some(language) = matches.value_of("language") {
        config.data.language = Some(language.into());
    }

    if matches.is_present("all-languages") {
        config.data.language = None;
    }

    if matches.is_present("top") {
        config.engine.top_n = value_t!(matches, "top", usize).unwrap_or_else(|e| e.exit());
    }

    if matches.is_present("weight") {
        config.engine.genre_weight = value_t!(matches, "weight", f64).unwrap_or_else(|e| e.exit());
    }

    if matches.is_present("no-genre") {
        config.engine.use_genre = false;
    }
}

fn main() -> Result<(), Error> {
    let matches = cli().get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    if TermLogger::init(level, LogConfig::default(), TerminalMode::Mixed).is_err() {
        // No terminal to write to
        SimpleLogger::init(level, LogConfig::default())?;
    }

    let mut config = match matches.value_of("config") {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    apply_overrides(&mut config, &matches);
    log::debug!("Using {:?}", config);

    let controller = MoviesMetadataController::with_paths(
        &config.data.metadata_path,
        &config.data.ratings_path,
        config.data.language.as_deref(),
    )?;

    let engine = Engine::with_controller(&controller, config.engine.clone())?;

    if let Some(title) = matches.value_of("query") {
        print_recommendations(&engine, &engine.query(title));
        return Ok(());
    }

    println!("Welcome to movie-recommender {}", VERSION);
    interactive(&engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_config() {
        let matches = cli().get_matches_from(vec![
            "movie-recommender",
            "--ratings",
            "other.csv",
            "--all-languages",
            "-n",
            "3",
            "--no-genre",
            "-w",
            "0.5",
        ]);

        let mut config = Config::default();
        apply_overrides(&mut config, &matches);

        assert_eq!(config.data.ratings_path, std::path::PathBuf::from("other.csv"));
        assert_eq!(config.data.language, None);
        assert_eq!(config.engine.top_n, 3);
        assert_eq!(config.engine.genre_weight, 0.5);
        assert!(!config.engine.use_genre);
    }

    #[test]
    fn defaults_are_kept_without_flags() {
        let matches = cli().get_matches_from(vec!["movie-recommender"]);

        let mut config = Config::default();
        apply_overrides(&mut config, &matches);

        assert_eq!(config, Config::default());
    }
}
