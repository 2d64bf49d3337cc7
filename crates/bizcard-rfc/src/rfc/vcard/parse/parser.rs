//! vCard document parser.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{ContentLine, parse_content_line, split_lines, unfold};
use crate::error::RfcResult;
use crate::rfc::vcard::core::{
    Address, VCard, VCardProperty, VCardValue, VCardVersion, names,
};

/// Parses a vCard document into one or more vCards.
///
/// ## Summary
/// Every line between `BEGIN:VCARD` and `END:VCARD` must be a content line.
/// Content outside of a card is skipped.
///
/// ## Errors
/// Returns a parse error if a card is unterminated, has no supported
/// VERSION, or contains a malformed content line.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<Vec<VCard>> {
    tracing::debug!("Parsing vCard document");

    let unfolded = unfold(input);
    let lines = split_lines(&unfolded);

    tracing::trace!(count = lines.len(), "Split lines");

    let mut parser = Parser::new(lines);
    let result = parser.parse_document()?;

    tracing::debug!(count = result.len(), "Parsed vCards");

    Ok(result)
}

/// Parses a single vCard from input.
///
/// ## Errors
/// Returns an error if the document contains no vCards or is malformed.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_single(input: &str) -> ParseResult<VCard> {
    let cards = parse(input)?;
    cards.into_iter().next().ok_or_else(|| {
        tracing::warn!("No vCard found in document");
        ParseError::new(
            ParseErrorKind::UnexpectedEof,
            1,
            "no vCard found in document",
        )
    })
}

/// Checks that `input` is exactly one well-formed card carrying an FN.
///
/// ## Summary
/// The document must start with `BEGIN:VCARD` and end with `END:VCARD`
/// with nothing outside of them.
///
/// ## Errors
/// Returns an error if the card does not parse, is not bracketed, or has
/// no FN property.
pub fn verify(input: &str) -> RfcResult<VCard> {
    let begin = format!("{}:{}", names::BEGIN, names::VCARD);
    let end = format!("{}:{}", names::END, names::VCARD);
    let trimmed = input.trim_end_matches(['\r', '\n']);

    if !trimmed.starts_with(&begin) {
        return Err(ParseError::unexpected(1, &begin, first_line(trimmed)).into());
    }
    if !trimmed.ends_with(&end) {
        let last = trimmed.lines().next_back().unwrap_or_default();
        return Err(ParseError::new(
            ParseErrorKind::UnexpectedEof,
            trimmed.lines().count(),
            format!("expected {end}, found {last}"),
        )
        .into());
    }

    let card = parse_single(trimmed)?;
    if card.get_property(names::FN).is_none() {
        return Err(ParseError::missing_property(1, names::FN).into());
    }

    Ok(card)
}

fn first_line(s: &str) -> &str {
    s.lines().next().unwrap_or_default()
}

struct Parser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(lines: Vec<&'a str>) -> Self {
        Self { lines, pos: 0 }
    }

    fn current_line(&self) -> usize {
        self.pos + 1
    }

    fn parse_document(&mut self) -> ParseResult<Vec<VCard>> {
        let mut cards = Vec::new();

        while let Some(&line) = self.lines.get(self.pos) {
            self.pos += 1;

            if is_marker(line, names::BEGIN) {
                cards.push(self.parse_vcard()?);
            } else {
                tracing::trace!(line = self.pos, "Skipping content outside of a vCard");
            }
        }

        Ok(cards)
    }

    fn parse_vcard(&mut self) -> ParseResult<VCard> {
        let start_line = self.current_line();
        let mut version = None;
        let mut properties = Vec::new();

        while let Some(&line) = self.lines.get(self.pos) {
            let line_num = self.current_line();
            self.pos += 1;

            if is_marker(line, names::END) {
                let version = version.ok_or_else(|| {
                    ParseError::missing_property(start_line, names::VERSION)
                })?;
                return Ok(VCard {
                    version,
                    properties,
                });
            }

            let content = parse_content_line(line, line_num)?;

            if content.name == names::VERSION {
                version = Some(content.value.parse::<VCardVersion>().map_err(|()| {
                    ParseError::new(
                        ParseErrorKind::UnsupportedVersion,
                        line_num,
                        format!("unsupported version: {}", content.value),
                    )
                })?);
                continue;
            }

            properties.push(build_property(content));
        }

        Err(ParseError::new(
            ParseErrorKind::UnexpectedEof,
            start_line,
            "missing END:VCARD",
        ))
    }
}

fn is_marker(line: &str, marker: &str) -> bool {
    line.split_once(':').is_some_and(|(name, value)| {
        name.eq_ignore_ascii_case(marker) && value.trim().eq_ignore_ascii_case(names::VCARD)
    })
}

fn build_property(content: ContentLine) -> VCardProperty {
    let value = match content.name.as_str() {
        names::ADR => VCardValue::Address(Address::from_components(content.value.split(';'))),
        names::URL => VCardValue::Uri(content.value),
        _ => VCardValue::Text(content.value),
    };

    VCardProperty {
        name: content.name,
        params: content.params,
        value,
    }
}
