use std::fmt::Display;

/// Space-separated rendering of a sequence, e.g. `9 8 5 6`.
pub fn render<'a, T, I>(values: I) -> String
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut line = String::new();
    for value in values {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&value.to_string());
    }
    line
}
