//! Entry lines: mode flag, timestamp and the folder/file dispatch.
//!
//! An entry line is only identifiable once its mode flag has been read: `d...` lines have
//! no size column, every other line does. The mode is parsed first and then chooses the
//! continuation parser with `then_with`, so no alternative is ever retried from the start
//! of the line.

use chrono::NaiveDateTime;
use chumsky::prelude::*;
use std::ops::Range;
use std::sync::Arc;

use crate::dirtree::ast::{Element, Mode};
use crate::dirtree::date::DateOrder;
use crate::dirtree::lexer::Token;
use crate::dirtree::parser::combinators::{
    extract_text, line_terminator, number, rest_of_line, token, unexpected, whitespace,
    ParserError, TokenLocation,
};

/// Parse a mode flag: adjacent letters and dashes, all lowercase
pub(crate) fn mode(source: Arc<str>) -> impl Parser<TokenLocation, Mode, Error = ParserError> + Clone {
    filter_map(|span: Range<usize>, found: TokenLocation| {
        if found.0.is_mode_part() {
            Ok(found)
        } else {
            Err(unexpected(span, &[Token::Dashes, Token::Word], found))
        }
    })
    .repeated()
    .at_least(1)
    .try_map(move |tokens: Vec<TokenLocation>, span| {
        let flags = extract_text(&source, &tokens);
        if flags.chars().all(|c| c.is_ascii_lowercase() || c == '-') {
            Ok(Mode::new(flags))
        } else {
            Err(Simple::custom(span, format!("invalid mode flag '{}'", flags)))
        }
    })
    .labelled("mode flag")
}

/// Parse `D/M/Y H:M[:S]`, with the date fields read according to `order`
pub(crate) fn timestamp(
    source: Arc<str>,
    order: DateOrder,
) -> impl Parser<TokenLocation, NaiveDateTime, Error = ParserError> + Clone {
    let field = number::<u32>(source);

    let date = field
        .clone()
        .then_ignore(token(Token::Slash))
        .then(field.clone())
        .then_ignore(token(Token::Slash))
        .then(field.clone())
        .map(|((first, second), third)| [first, second, third]);

    let time = field
        .clone()
        .then_ignore(token(Token::Colon))
        .then(field.clone())
        .then(token(Token::Colon).ignore_then(field).or_not());

    date.then_ignore(whitespace().or_not())
        .then(time)
        .try_map(move |(fields, ((hour, minute), second)), span| {
            order
                .resolve(fields)
                .and_then(|date| date.and_hms_opt(hour, minute, second.unwrap_or(0)))
                .ok_or_else(|| {
                    Simple::custom(
                        span,
                        format!(
                            "{}/{}/{} {}:{} is not a valid {} timestamp",
                            fields[0], fields[1], fields[2], hour, minute, order
                        ),
                    )
                })
        })
        .labelled("timestamp")
}

/// The rest of a folder line once its mode is known: timestamp, then name
fn folder_entry(
    source: Arc<str>,
    order: DateOrder,
    mode: Mode,
) -> BoxedParser<'static, TokenLocation, Element, ParserError> {
    whitespace()
        .ignore_then(timestamp(source.clone(), order))
        .then_ignore(whitespace())
        .then(rest_of_line(source).labelled("name"))
        .then_ignore(line_terminator())
        .map(move |(timestamp, name)| Element::Folder {
            mode: mode.clone(),
            timestamp,
            name,
        })
        .boxed()
}

/// The rest of a file line once its mode is known: timestamp, size, then name
fn file_entry(
    source: Arc<str>,
    order: DateOrder,
    mode: Mode,
) -> BoxedParser<'static, TokenLocation, Element, ParserError> {
    whitespace()
        .ignore_then(timestamp(source.clone(), order))
        .then_ignore(whitespace())
        .then(number::<u64>(source.clone()).labelled("size"))
        .then_ignore(whitespace())
        .then(rest_of_line(source).labelled("name"))
        .then_ignore(line_terminator())
        .map(move |((timestamp, size), name)| Element::File {
            mode: mode.clone(),
            timestamp,
            size,
            name,
        })
        .boxed()
}

/// Parse one entry line, dispatching on the first flag of its mode
pub(crate) fn element(
    source: Arc<str>,
    order: DateOrder,
) -> impl Parser<TokenLocation, Element, Error = ParserError> + Clone {
    whitespace()
        .or_not()
        .ignore_then(mode(source.clone()))
        .then_with(move |mode: Mode| {
            if mode.is_directory() {
                folder_entry(source.clone(), order, mode)
            } else {
                file_entry(source.clone(), order, mode)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dirtree::lexer::lex_with_spans;
    use crate::dirtree::parser::error::ParseError;
    use chrono::NaiveDate;
    use chumsky::Stream;

    fn parse_element(source: &str) -> Result<Element, Vec<ParserError>> {
        let eoi = source.len();
        let tokens = lex_with_spans(source);
        element(Arc::from(source), DateOrder::DayMonthYear)
            .then_ignore(end())
            .parse(Stream::from_iter(
                eoi..eoi,
                tokens
                    .into_iter()
                    .map(|(token, span)| ((token, span.clone()), span)),
            ))
    }

    fn at(day: u32, month: u32, year: i32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_file_entry() {
        let element = parse_element("-a---           1/2/2017   09:30            120 notes.txt\n")
            .expect("file entry to parse");
        assert_eq!(
            element,
            Element::File {
                mode: Mode::new("-a---"),
                timestamp: at(1, 2, 2017, 9, 30),
                size: 120,
                name: "notes.txt".to_string(),
            }
        );
    }

    #[test]
    fn test_folder_entry_has_no_size() {
        let element = parse_element("d----           1/2/2017   09:00                Sub\n")
            .expect("folder entry to parse");
        assert_eq!(
            element,
            Element::Folder {
                mode: Mode::new("d----"),
                timestamp: at(1, 2, 2017, 9, 0),
                name: "Sub".to_string(),
            }
        );
    }

    #[test]
    fn test_folder_name_starting_with_digits() {
        let element = parse_element("d-----  3/4/2020 10:15  2019 Archive").unwrap();
        assert_eq!(element.name(), "2019 Archive");
        assert!(element.is_folder());
    }

    #[test]
    fn test_file_without_size_is_rejected() {
        assert!(parse_element("-a---  1/2/2017 09:30  notes.txt\n").is_err());
    }

    #[test]
    fn test_missing_size_is_reported_as_size() {
        let source = "-a---  1/2/2017 09:30  notes.txt\n";
        let error = ParseError::from_errors(source, parse_element(source).unwrap_err());
        assert_eq!(error.expected, vec!["size"]);
        assert_eq!(error.found.as_deref(), Some("word"));
        assert_eq!(error.column(), 24);
    }

    #[test]
    fn test_missing_mode_is_reported_as_mode_flag() {
        let source = "  1/2/2017 09:30  5 x\n";
        let error = ParseError::from_errors(source, parse_element(source).unwrap_err());
        assert_eq!(error.expected, vec!["mode flag"]);
        assert_eq!(error.found.as_deref(), Some("number"));
    }

    #[test]
    fn test_folder_without_name_is_reported_as_name() {
        let source = "d----  1/2/2017 09:00  \n";
        let error = ParseError::from_errors(source, parse_element(source).unwrap_err());
        assert_eq!(error.expected, vec!["name"]);
    }

    #[test]
    fn test_seconds_are_optional() {
        let element = parse_element("-a--- 1/2/2017 09:30:15 1 x").unwrap();
        let expected = NaiveDate::from_ymd_opt(2017, 2, 1)
            .unwrap()
            .and_hms_opt(9, 30, 15)
            .unwrap();
        assert_eq!(element.timestamp(), expected);
    }

    #[test]
    fn test_name_with_spaces_is_right_trimmed() {
        let element = parse_element("-a---  1/2/2017 09:30  5 my  notes .txt   \r\n").unwrap();
        assert_eq!(element.name(), "my  notes .txt");
    }

    #[test]
    fn test_invalid_modes() {
        assert!(parse_element("D----  1/2/2017 09:30  5 x\n").is_err());
        assert!(parse_element("-a1--  1/2/2017 09:30  5 x\n").is_err());
        assert!(parse_element("  1/2/2017 09:30  5 x\n").is_err());
    }

    #[test]
    fn test_invalid_timestamps() {
        assert!(parse_element("-a---  13/13/2017 09:30  5 x\n").is_err());
        assert!(parse_element("-a---  1/2/2017 25:30  5 x\n").is_err());
        assert!(parse_element("-a---  1/2 09:30  5 x\n").is_err());
        assert!(parse_element("-a---  1/x/2017 09:30  5 x\n").is_err());
    }
}
