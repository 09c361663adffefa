// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

mod basics;

use basics::{parse_float, parse_number, parse_separator, parse_string};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{all_consuming, map, opt},
    sequence::{delimited, preceded, separated_pair, tuple},
    IResult,
};

#[derive(Debug, Clone, PartialEq)]
pub enum GenreOption {
    Configured,
    Disabled,
    Weight(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Recommend(usize, String, GenreOption),
    Movie(String),
    Correlation(String, String),
}

fn parse_genre_option(input: &str) -> IResult<&str, GenreOption> {
    alt((
        map(tag("nogenre"), |_| GenreOption::Disabled),
        map(
            preceded(tag("weight"), delimited(char('('), parse_float, char(')'))),
            GenreOption::Weight,
        ),
    ))(input)
}

fn parse_recommend(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag("recommend")(input)?;
    let (input, (n, _, title, option)) = delimited(
        char('('),
        tuple((
            parse_number,
            parse_separator,
            parse_string,
            opt(preceded(parse_separator, parse_genre_option)),
        )),
        char(')'),
    )(input)?;

    let option = option.unwrap_or(GenreOption::Configured);
    Ok((input, Statement::Recommend(n, title.into(), option)))
}

fn parse_movie(input: &str) -> IResult<&str, Statement> {
    let (input, title) = preceded(
        tag("movie"),
        delimited(char('('), parse_string, char(')')),
    )(input)?;

    Ok((input, Statement::Movie(title.into())))
}

fn parse_correlation(input: &str) -> IResult<&str, Statement> {
    let (input, (a, b)) = preceded(
        tag("corr"),
        delimited(
            char('('),
            separated_pair(parse_string, parse_separator, parse_string),
            char(')'),
        ),
    )(input)?;

    Ok((input, Statement::Correlation(a.into(), b.into())))
}

pub fn parse_line(line: &str) -> Option<Statement> {
    let line = line.trim();
    let parsed = all_consuming(alt((parse_recommend, parse_movie, parse_correlation)))(line);

    parsed.ok().map(|(_, statement)| statement)
}
