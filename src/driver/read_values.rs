use std::fmt::Display;
use std::io::BufRead;

use num::Num;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read line {line}")]
    Io {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: cannot parse {token:?} as a base-{radix} number: {reason}")]
    Parse { line: usize, token: String, radix: u32, reason: String },
}

fn parse_line<T>(line: &str, line_number: usize, radix: u32, values: &mut Vec<T>) -> Result<(), ReadError>
where
    T: Num,
    T::FromStrRadixErr: Display,
{
    for field in line.split_whitespace() {
        let value = T::from_str_radix(field, radix).map_err(|e| ReadError::Parse {
            line: line_number,
            token: field.to_string(),
            radix,
            reason: e.to_string(),
        })?;
        values.push(value);
    }
    Ok(())
}

/// Reads whitespace-separated numbers; blank lines and `#` comments are skipped.
pub fn read_values<T, R>(reader: R, radix: u32) -> Result<Vec<T>, ReadError>
where
    T: Num,
    T::FromStrRadixErr: Display,
    R: BufRead,
{
    let mut values = vec![];
    for (index, read_result) in reader.lines().enumerate() {
        let line = read_result.map_err(|source| ReadError::Io { line: index + 1, source })?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        parse_line(line, index + 1, radix, &mut values)?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_across_lines_and_skips_comments() {
        let input = "# heap input\n0 1 2\n\n  3 4\t5\n";
        let values: Vec<i64> = read_values(input.as_bytes(), 10).unwrap();
        assert_eq!(values, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn reads_negative_and_hex() {
        let values: Vec<i64> = read_values("-1 ff 10".as_bytes(), 16).unwrap();
        assert_eq!(values, vec![-1, 255, 16]);
    }

    #[test]
    fn empty_input() {
        let values: Vec<i64> = read_values("".as_bytes(), 10).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn reports_bad_token_with_line() {
        let error = read_values::<i64, _>("1 2\n3 x 4\n".as_bytes(), 10).unwrap_err();
        match error {
            ReadError::Parse { line, token, radix, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
                assert_eq!(radix, 10);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
