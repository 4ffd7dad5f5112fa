mod config;
mod read_values;
mod render;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use binary_heap_sort::{heap_sort_by, Before, Heap, MaxOrder, MinOrder};
use tracing::debug;

pub use config::{Command, Config, Order};
pub use read_values::read_values;
pub use render::render;

pub type Value = i64;

fn run_with<B, W>(command: Command, mut values: Vec<Value>, before: B, writer: &mut W) -> Result<()>
where
    B: Before<Value>,
    W: Write,
{
    let line = match command {
        Command::Heapify => render(&Heap::from_vec(values, before)),
        Command::Drain => render(&Heap::from_vec(values, before).into_sorted_vec()),
        Command::Sort => {
            heap_sort_by(&mut values, &before);
            render(&values)
        }
    };
    writeln!(writer, "{line}").context("failed to write output")?;
    Ok(())
}

pub fn run<R, W>(config: &Config, reader: R, writer: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    debug!(?config, "starting");
    let values = read_values::<Value, _>(reader, config.radix).context("failed to read input values")?;
    debug!(count = values.len(), "read input values");
    match config.order {
        Order::Max => run_with(config.command, values, MaxOrder, writer),
        Order::Min => run_with(config.command, values, MinOrder, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(args: &[&str], input: &str) -> String {
        let mut argv = vec!["binary_heap_sort"];
        argv.extend_from_slice(args);
        let config = <Config as clap::Parser>::try_parse_from(argv).unwrap();
        let mut output = Vec::new();
        run(&config, input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn heapify_max() {
        assert_eq!(run_to_string(&["heapify"], "0 1 2 3 4 5 6 7 8 9"), "9 8 5 6 7 1 4 0 3 2\n");
    }

    #[test]
    fn heapify_min() {
        assert_eq!(run_to_string(&["--order", "min", "heapify"], "9 8 5 6 7 1 4 0 3 2"), "0 1 4 3 2 8 5 9 6 7\n");
    }

    #[test]
    fn drain_max() {
        assert_eq!(run_to_string(&["drain"], "3 -1 7\n2"), "7 3 2 -1\n");
    }

    #[test]
    fn sort_both_ways() {
        assert_eq!(run_to_string(&["sort"], "9 8 7 6 5 4 3 2 1 0"), "0 1 2 3 4 5 6 7 8 9\n");
        assert_eq!(run_to_string(&["--order", "min", "sort"], "0 2 1"), "2 1 0\n");
    }

    #[test]
    fn empty_input_prints_empty_line() {
        assert_eq!(run_to_string(&["drain"], ""), "\n");
    }

    #[test]
    fn bad_input_is_an_error() {
        let config = <Config as clap::Parser>::try_parse_from(["binary_heap_sort", "sort"]).unwrap();
        let mut output = Vec::new();
        let error = run(&config, "1 two 3".as_bytes(), &mut output).unwrap_err();
        assert!(error.downcast_ref::<read_values::ReadError>().is_some());
        assert!(output.is_empty());
    }
}
