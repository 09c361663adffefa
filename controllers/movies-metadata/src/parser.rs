// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use controller::{error::ErrorKind, Genres};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_till},
    character::complete::{char, multispace0},
    combinator::all_consuming,
    multi::separated_list,
    number::complete::recognize_float,
    sequence::{delimited, preceded, separated_pair, terminated},
    IResult,
};

fn quoted(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('\''), take_till(|c: char| c == '\''), char('\'')),
        delimited(char('"'), take_till(|c: char| c == '"'), char('"')),
    ))(input)
}

fn scalar(input: &str) -> IResult<&str, &str> {
    alt((quoted, recognize_float, tag("None"), tag("null")))(input)
}

fn entry(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(
        preceded(multispace0, quoted),
        delimited(multispace0, char(':'), multispace0),
        terminated(scalar, multispace0),
    )(input)
}

fn object(input: &str) -> IResult<&str, Vec<(&str, &str)>> {
    delimited(
        preceded(multispace0, char('{')),
        separated_list(char(','), entry),
        terminated(char('}'), multispace0),
    )(input)
}

fn object_list(input: &str) -> IResult<&str, Vec<Vec<(&str, &str)>>> {
    delimited(
        preceded(multispace0, char('[')),
        separated_list(char(','), object),
        preceded(multispace0, char(']')),
    )(input)
}

/// Parse a genres cell such as `[{'id': 16, 'name': 'Animation'}]` keeping
/// only the `name` of every object.
pub fn parse_genres(input: &str) -> Result<Genres, ErrorKind> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Genres::default());
    }

    let (_, objects) =
        all_consuming(object_list)(input).map_err(|_| ErrorKind::InvalidGenres(input.into()))?;

    Ok(objects
        .into_iter()
        .flatten()
        .filter_map(|(key, val)| if key == "name" { Some(val) } else { None })
        .collect())
}
