//! Line parsing for `identifier:dep,dep,...` records

use super::error::ResolveError;

/// One parsed input line: the owning identifier and its dependency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub identifier: String,
    pub dependencies: Vec<String>,
}

/// Splits a raw line at the first `:` into identifier and dependencies.
///
/// The remainder is split on `,`; an empty remainder means no dependencies.
/// Tokens are taken verbatim, whitespace included, so validation can report
/// exactly what the input said.
pub fn parse_line(raw: &str, line_number: usize) -> Result<ParsedLine, ResolveError> {
    let Some(separator) = raw.find(':') else {
        return Err(ResolveError::MalformedLine {
            line_text: raw.to_string(),
            line_number,
        });
    };

    let identifier = raw[..separator].to_string();
    let remainder = &raw[separator + 1..];

    let dependencies = if remainder.is_empty() {
        Vec::new()
    } else {
        remainder.split(',').map(str::to_string).collect()
    };

    Ok(ParsedLine {
        identifier,
        dependencies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_identifier_and_dependencies() {
        let parsed = parse_line("T:A,B,C", 1).unwrap();
        assert_eq!(parsed.identifier, "T");
        assert_eq!(parsed.dependencies, vec!["A", "B", "C"]);
    }

    #[test]
    fn empty_remainder_means_no_dependencies() {
        let parsed = parse_line("Build:", 1).unwrap();
        assert_eq!(parsed.identifier, "Build");
        assert!(parsed.dependencies.is_empty());
    }

    #[test]
    fn splits_at_first_separator_only() {
        let parsed = parse_line("A:B:C", 1).unwrap();
        assert_eq!(parsed.identifier, "A");
        assert_eq!(parsed.dependencies, vec!["B:C"]);
    }

    #[test]
    fn tokens_are_verbatim() {
        let parsed = parse_line(" A: B,C ", 1).unwrap();
        assert_eq!(parsed.identifier, " A");
        assert_eq!(parsed.dependencies, vec![" B", "C "]);
    }

    #[test]
    fn consecutive_commas_produce_empty_tokens() {
        let parsed = parse_line("A:B,,C", 1).unwrap();
        assert_eq!(parsed.dependencies, vec!["B", "", "C"]);
    }

    #[test]
    fn missing_separator_is_malformed() {
        let err = parse_line("C", 4).unwrap_err();
        assert_eq!(
            err,
            ResolveError::MalformedLine {
                line_text: "C".to_string(),
                line_number: 4,
            }
        );
    }
}
