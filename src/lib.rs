#![deny(missing_docs)]
#![warn(rust_2018_idioms, missing_debug_implementations)]
//! This crate provides a blocking, bounded Multi-Producer-Multi-Consumer
//! Queue, which applies backpressure to its Producers once it is full and
//! can be shut down gracefully by closing it.
//!
//! # Example
//! ```
//! use std::{sync::Arc, thread};
//!
//! use boundq::queues::bounded::Queue;
//!
//! let queue = Arc::new(Queue::new(4).unwrap());
//!
//! let producer = {
//!     let queue = queue.clone();
//!     thread::spawn(move || {
//!         for i in 0..16 {
//!             queue.push(i).unwrap();
//!         }
//!         queue.close();
//!     })
//! };
//!
//! let received: Vec<_> = queue.iter().collect();
//! producer.join().unwrap();
//!
//! assert_eq!((0..16).collect::<Vec<_>>(), received);
//! ```
//!
//! # Feature-Flags
//! * `tracing`: Emits [`tracing`](https://docs.rs/tracing) Events for the
//! Lifecycle of a Queue and enables [`trace::init_tracing`]
//!
//! # Testing with loom
//! All the Synchronization goes through an internal `sync` Module, which
//! switches to the Primitives of [`loom`](https://docs.rs/loom) when the
//! crate is compiled with `--cfg loom`

pub mod queues;
pub mod trace;

mod sync;
