use clap::{Parser, Subcommand, ValueEnum};

/// Builds a binary heap from whitespace-separated integers read on stdin.
#[derive(Debug, Parser)]
#[command(name = "binary_heap_sort", version)]
pub struct Config {
    /// Which element sits at the root of the heap.
    #[arg(long, value_enum, default_value_t = Order::Max)]
    pub order: Order,

    /// Radix of the input numbers.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(2..=36))]
    pub radix: u32,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Order {
    Max,
    Min,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the heapified array.
    Heapify,
    /// Print the values in extraction order.
    Drain,
    /// Print the heap-sorted values (ascending for max, descending for min).
    Sort,
}
