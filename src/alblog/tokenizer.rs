use std::borrow::Cow;

use crate::error::MalformedRecord;

const SEPARATOR: char = ' ';
const QUOTE: char = '"';

/// Splits a log line into fields.
///
/// Fields are separated by single spaces, so consecutive spaces yield empty
/// fields. A field that starts with a double quote extends to the matching
/// closing quote and may contain spaces; `""` inside it is a literal quote.
pub(crate) fn split_fields(line: &str) -> Result<Vec<Cow<'_, str>>, MalformedRecord> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut fields = Vec::new();
    let mut rest = line;

    loop {
        if let Some(quoted) = rest.strip_prefix(QUOTE) {
            let offset = line.len().saturating_sub(rest.len());
            let (value, remainder) =
                take_quoted(quoted).ok_or(MalformedRecord::UnterminatedQuote { offset })?;
            fields.push(value);
            if remainder.is_empty() {
                break;
            }
            rest = remainder
                .strip_prefix(SEPARATOR)
                .ok_or(MalformedRecord::UnterminatedQuote { offset })?;
            continue;
        }

        match rest.split_once(SEPARATOR) {
            Some((field, next)) => {
                fields.push(Cow::Borrowed(field));
                rest = next;
            }
            None => {
                fields.push(Cow::Borrowed(rest));
                break;
            }
        }
    }

    Ok(fields)
}

/// Reads a quoted field body (opening quote already consumed) and returns the
/// unescaped value plus whatever follows the closing quote.
fn take_quoted(input: &str) -> Option<(Cow<'_, str>, &str)> {
    let mut owned: Option<String> = None;
    let mut start = 0_usize;

    loop {
        let relative = input.get(start..)?.find(QUOTE)?;
        let quote_at = start.checked_add(relative)?;
        let after = input.get(quote_at.checked_add(1)?..)?;
        let chunk = input.get(start..quote_at)?;

        if after.starts_with(QUOTE) {
            let buffer = owned.get_or_insert_with(String::new);
            buffer.push_str(chunk);
            buffer.push(QUOTE);
            start = quote_at.checked_add(2)?;
            continue;
        }

        let value = owned.map_or(Cow::Borrowed(chunk), |mut buffer| {
            buffer.push_str(chunk);
            Cow::Owned(buffer)
        });
        return Some((value, after));
    }
}
