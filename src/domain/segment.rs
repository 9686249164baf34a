//! Input segmentation: raw lines to forests to printable sequences

use super::error::ResolveError;
use super::forest::Forest;
use super::ident::is_valid_identifier;
use super::parse::parse_line;

/// Builds one forest per blank-line-delimited block.
///
/// Comment lines (leading `#`) are skipped everywhere and never open or
/// close a block, though they still count toward line numbering. A blank
/// line closes the block in progress, if any. End of input closes an
/// in-progress block just like a blank line, including when the final
/// physical line is a comment.
pub fn build_forests<'a, I>(lines: I) -> Result<Vec<Forest>, ResolveError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut forests = Vec::new();
    let mut current = Forest::new();

    for (index, raw) in lines.into_iter().enumerate() {
        let line_number = index + 1;

        if raw.starts_with('#') {
            continue;
        }

        if raw.is_empty() {
            if !current.is_empty() {
                forests.push(std::mem::take(&mut current));
            }
            continue;
        }

        let parsed = parse_line(raw, line_number)?;

        for token in std::iter::once(parsed.identifier.as_str())
            .chain(parsed.dependencies.iter().map(String::as_str))
        {
            if !is_valid_identifier(token) {
                return Err(ResolveError::InvalidIdentifier {
                    identifier: token.to_string(),
                    line_number,
                });
            }
        }

        current.insert(&parsed.identifier, &parsed.dependencies, line_number)?;
    }

    if !current.is_empty() {
        forests.push(current);
    }

    Ok(forests)
}

/// Resolves raw input lines into one space-joined output line per block.
///
/// Nothing is produced unless the whole input resolves: a fatal error on
/// any line discards blocks that were already complete.
pub fn resolve_lines<'a, I>(lines: I) -> Result<Vec<String>, ResolveError>
where
    I: IntoIterator<Item = &'a str>,
{
    let forests = build_forests(lines)?;
    Ok(forests
        .iter()
        .map(|forest| forest.flatten().join(" "))
        .collect())
}
