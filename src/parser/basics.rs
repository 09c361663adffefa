// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use nom::branch::alt;
use nom::bytes::complete::{tag, take_till1, take_while};
use nom::character::complete::{char, digit1};
use nom::combinator::map_res;
use nom::number::complete::recognize_float;
use nom::{sequence::delimited, IResult};

// Either quote can be used, so that titles like 'Schindler's List' can be
// written as "Schindler's List"
pub(crate) fn parse_string(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('\''), take_till1(|c: char| c == '\''), char('\'')),
        delimited(char('"'), take_till1(|c: char| c == '"'), char('"')),
    ))(input)
}

pub(crate) fn parse_number(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

pub(crate) fn parse_float(input: &str) -> IResult<&str, f64> {
    map_res(recognize_float, |s: &str| s.parse::<f64>())(input)
}

pub(crate) fn parse_separator(input: &str) -> IResult<&str, &str> {
    delimited(
        take_while(|c: char| c == ' '),
        tag(","),
        take_while(|c: char| c == ' '),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string() {
        let parsed = parse_string("'holo, cómo estás?'");
        let expected = ("", "holo, cómo estás?");

        assert_eq!(parsed, Ok(expected));

        let parsed = parse_string("'holo' #wed2@ws");
        let expected = (" #wed2@ws", "holo");

        assert_eq!(parsed, Ok(expected));

        let parsed = parse_string("\"Schindler's List\"");
        let expected = ("", "Schindler's List");

        assert_eq!(parsed, Ok(expected));
    }

    #[test]
    fn test_parse_numbers() {
        let parsed = parse_number("12345");
        let expected = ("", 12345);

        assert_eq!(parsed, Ok(expected));

        let parsed = parse_number("12c3");
        let expected = ("c3", 12);
        assert_eq!(parsed, Ok(expected));
    }

    #[test]
    fn test_parse_floats() {
        assert_eq!(parse_float("0.25)"), Ok((")", 0.25)));
        assert_eq!(parse_float("2"), Ok(("", 2.0)));
        assert!(parse_float("abc").is_err());
    }

    #[test]
    fn test_parse_separator() {
        assert_eq!(parse_separator("  ,  x"), Ok(("x", ",")));
        assert!(parse_separator("x").is_err());
    }
}
