use anyhow::bail;

/// Split a shell line into words.
///
/// Words are separated by whitespace. Double or single quotes group a run of
/// text containing spaces into one word, so `add "Olive oil"` yields two
/// words. A backslash escapes the next character inside or outside quotes.
pub fn split_words(line: &str) -> anyhow::Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (_, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => bail!("line ends with a dangling backslash"),
            },
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        bail!("unterminated {q} quote");
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_words() {
        assert_eq!(
            split_words("  ingredient   add Rice ").unwrap(),
            vec!["ingredient", "add", "Rice"]
        );
    }

    #[test]
    fn quoted_words() {
        assert_eq!(
            split_words(r#"i add "Olive oil" -c 2"#).unwrap(),
            vec!["i", "add", "Olive oil", "-c", "2"]
        );
        assert_eq!(
            split_words("r add Salad -i 'Lettuce:1, Olive oil:1'").unwrap(),
            vec!["r", "add", "Salad", "-i", "Lettuce:1, Olive oil:1"]
        );
    }

    #[test]
    fn empty_quotes_make_empty_word() {
        assert_eq!(split_words(r#"a "" b"#).unwrap(), vec!["a", "", "b"]);
    }

    #[test]
    fn escapes() {
        assert_eq!(split_words(r"Mac\ cheese").unwrap(), vec!["Mac cheese"]);
        assert_eq!(split_words(r#""say \"hi\"""#).unwrap(), vec![r#"say "hi""#]);
    }

    #[test]
    fn blank_line_has_no_words() {
        assert!(split_words("   ").unwrap().is_empty());
    }

    #[test]
    fn unterminated_quote_is_error() {
        assert!(split_words(r#"add "Rice"#).is_err());
        assert!(split_words("add Rice\\").is_err());
    }
}
