//! Measures the Throughput of the bounded Queue and verifies that every Item
//! was received exactly once and in Order.
//!
//! Usage: `cargo run --release --example driver -- <num_producers>
//! <num_consumers> <items_per_producer> <queue_capacity>`

use std::{
    collections::HashSet,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    thread,
    time::Instant,
};

use anyhow::{bail, ensure, Context, Result};
use boundq::queues::bounded::Queue;

/// Every Item encodes its Producer as `producer * PRODUCER_STRIDE + seq`
const PRODUCER_STRIDE: u64 = 1_000_000;

#[derive(Debug)]
struct Config {
    producers: u64,
    consumers: usize,
    items_per_producer: u64,
    capacity: usize,
}

impl Config {
    fn from_args() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        if args.len() != 4 {
            bail!(
                "usage: driver <num_producers> <num_consumers> <items_per_producer> <queue_capacity>"
            );
        }

        let config = Self {
            producers: args[0].parse().context("invalid num_producers")?,
            consumers: args[1].parse().context("invalid num_consumers")?,
            items_per_producer: args[2].parse().context("invalid items_per_producer")?,
            capacity: args[3].parse().context("invalid queue_capacity")?,
        };
        ensure!(
            config.items_per_producer < PRODUCER_STRIDE,
            "items_per_producer must be less than {}",
            PRODUCER_STRIDE
        );
        ensure!(config.consumers > 0, "at least one consumer is needed");

        Ok(config)
    }

    fn total_items(&self) -> u64 {
        self.producers * self.items_per_producer
    }
}

#[derive(Debug, Default)]
struct Stats {
    produced: AtomicUsize,
    consumed: AtomicUsize,
}

/// Checks that no Item was received twice, that every Consumer saw the Items
/// of each Producer in increasing Order and that no Item got lost
fn verify(per_consumer: &[Vec<u64>], config: &Config) -> Result<()> {
    let mut seen = HashSet::new();

    for (consumer, items) in per_consumer.iter().enumerate() {
        let mut last_seen: Vec<Option<u64>> = vec![None; config.producers as usize];

        for &item in items {
            ensure!(seen.insert(item), "duplicate item {}", item);

            let producer = (item / PRODUCER_STRIDE) as usize;
            let seq = item % PRODUCER_STRIDE;
            if let Some(last) = last_seen[producer] {
                ensure!(
                    seq > last,
                    "consumer {} saw producer {} items out of order: {} after {}",
                    consumer,
                    producer,
                    seq,
                    last
                );
            }
            last_seen[producer] = Some(seq);
        }
    }

    let total = seen.len() as u64;
    ensure!(
        total == config.total_items(),
        "expected {} items but got {}",
        config.total_items(),
        total
    );

    Ok(())
}

fn main() -> Result<()> {
    boundq::trace::init_tracing();

    let config = Config::from_args()?;

    println!("Configuration:");
    println!("  Producers: {}", config.producers);
    println!("  Consumers: {}", config.consumers);
    println!("  Items per producer: {}", config.items_per_producer);
    println!("  Queue capacity: {}", config.capacity);
    println!("  Total items: {}\n", config.total_items());

    let queue = Arc::new(Queue::new(config.capacity).context("invalid queue_capacity")?);
    let stats = Arc::new(Stats::default());

    let start = Instant::now();

    let producers: Vec<_> = (0..config.producers)
        .map(|id| {
            let queue = queue.clone();
            let stats = stats.clone();
            let items = config.items_per_producer;
            thread::spawn(move || {
                for seq in 0..items {
                    if queue.push(id * PRODUCER_STRIDE + seq).is_err() {
                        break;
                    }
                    stats.produced.fetch_add(1, Ordering::Relaxed);
                }
                println!("Producer {} finished producing {} items", id, items);
            })
        })
        .collect();

    let consumers: Vec<_> = (0..config.consumers)
        .map(|id| {
            let queue = queue.clone();
            let stats = stats.clone();
            thread::spawn(move || {
                let mut received = Vec::new();
                for item in queue.iter() {
                    received.push(item);
                    stats.consumed.fetch_add(1, Ordering::Relaxed);
                }
                println!("Consumer {} finished", id);
                received
            })
        })
        .collect();

    for producer in producers {
        if producer.join().is_err() {
            bail!("a producer panicked");
        }
    }

    queue.close();
    let mut per_consumer = Vec::with_capacity(config.consumers);
    for consumer in consumers {
        match consumer.join() {
            Ok(received) => per_consumer.push(received),
            Err(_) => bail!("a consumer panicked"),
        }
    }

    let elapsed = start.elapsed();
    let seconds = elapsed.as_secs_f64();
    let consumed = stats.consumed.load(Ordering::Relaxed);
    let throughput = if seconds > 0.0 {
        consumed as f64 / seconds
    } else {
        0.0
    };

    println!("\n=== Results ===");
    println!("Items produced: {}", stats.produced.load(Ordering::Relaxed));
    println!("Items consumed: {}", consumed);
    println!("Duration: {:?}", elapsed);
    println!("Throughput: {:.0} items/second\n", throughput);

    println!("=== Verification ===");
    match verify(&per_consumer, &config) {
        Ok(()) => {
            println!("All items received exactly once");
            println!("Per-producer ordering preserved");
            println!("PASS");
            Ok(())
        }
        Err(e) => {
            println!("FAIL");
            Err(e)
        }
    }
}
