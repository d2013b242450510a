#[derive(Debug, PartialEq)]
pub(crate) struct ParseError {
    pub(crate) index: usize,
}

/// Split a REPL line on whitespace. Single or double quotes group words, so
/// `add "3 Wood" 245` yields three items.
pub(crate) fn parse_items(input: &str) -> Result<Vec<String>, ParseError> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut open_index = 0usize;
    let mut quoted_token = false;
    for (index, ch) in input.char_indices() {
        if ch.is_control() && ch != '\t' {
            return Err(ParseError { index });
        }
        if let Some(active) = quote {
            if ch == active {
                quote = None;
            } else {
                current.push(ch);
            }
            continue;
        }

        if ch == '"' || ch == '\'' {
            quote = Some(ch);
            open_index = index;
            quoted_token = true;
            continue;
        }

        if ch.is_whitespace() {
            if !current.is_empty() || quoted_token {
                items.push(std::mem::take(&mut current));
                quoted_token = false;
            }
            continue;
        }

        current.push(ch);
    }

    if quote.is_some() {
        return Err(ParseError { index: open_index });
    }

    if !current.is_empty() || quoted_token {
        items.push(current);
    }
    Ok(items)
}

pub(crate) fn format_parse_error(input: &str, index: usize) -> String {
    let mut caret_pos = 0usize;
    for (byte_idx, _) in input.char_indices() {
        if byte_idx >= index {
            break;
        }
        caret_pos += 1;
    }
    let mut marker = String::new();
    marker.push_str(&" ".repeat(caret_pos));
    marker.push('^');
    format!(
        "Invalid input at position {}:\n{}\n{}",
        caret_pos + 1,
        input,
        marker
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_group_words() {
        assert_eq!(
            parse_items(r#"add "3 Wood" 245"#).unwrap(),
            vec!["add", "3 Wood", "245"]
        );
        assert_eq!(
            parse_items("lie 'Light Rough'").unwrap(),
            vec!["lie", "Light Rough"]
        );
        assert_eq!(parse_items("  wind   -5  SW ").unwrap(), vec!["wind", "-5", "SW"]);
    }

    #[test]
    fn empty_quotes_are_an_empty_item() {
        assert_eq!(parse_items(r#"rename 2 """#).unwrap(), vec!["rename", "2", ""]);
    }

    #[test]
    fn unbalanced_quote_points_at_the_opening_quote() {
        let line = r#"add "3 Wood 245"#;
        let err = parse_items(line).unwrap_err();
        assert_eq!(err, ParseError { index: 4 });
        let message = format_parse_error(line, err.index);
        assert!(message.ends_with("\n    ^"), "{message}");
    }
}
