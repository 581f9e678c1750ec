//! Whitespace-token scanning for the formatted-read paths.

use std::io::BufRead;

use crate::error::Result;

/// Pull the next whitespace-delimited token from `reader`.
///
/// Consumes the token's bytes plus the single delimiter that ends it,
/// leaving the rest of the stream untouched so several containers can
/// fill themselves from one reader. Returns `None` at end of input.
pub(crate) fn next_token<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut token: Vec<u8> = Vec::new();
    loop {
        let mut used = 0;
        let mut complete = false;
        let exhausted = {
            let available = reader.fill_buf()?;
            while used < available.len() {
                let byte = available[used];
                used += 1;
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        complete = true;
                        break;
                    }
                } else {
                    token.push(byte);
                }
            }
            available.is_empty()
        };
        reader.consume(used);
        if complete || exhausted {
            break;
        }
    }
    if token.is_empty() {
        Ok(None)
    } else {
        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::next_token;

    #[test]
    fn splits_on_any_whitespace() {
        let mut input: &[u8] = b"  one\ttwo\nthree ";
        assert_eq!(next_token(&mut input).unwrap().as_deref(), Some("one"));
        assert_eq!(next_token(&mut input).unwrap().as_deref(), Some("two"));
        assert_eq!(next_token(&mut input).unwrap().as_deref(), Some("three"));
        assert_eq!(next_token(&mut input).unwrap(), None);
    }

    #[test]
    fn final_token_needs_no_trailing_delimiter() {
        let mut input: &[u8] = b"42";
        assert_eq!(next_token(&mut input).unwrap().as_deref(), Some("42"));
        assert_eq!(next_token(&mut input).unwrap(), None);
    }

    #[test]
    fn empty_input_yields_none() {
        let mut input: &[u8] = b"   \n\t ";
        assert_eq!(next_token(&mut input).unwrap(), None);
    }
}
