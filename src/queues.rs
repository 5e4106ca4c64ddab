//! This module provides the Queue implementations of this crate
//!
//! # Bounded
//! The [`bounded::Queue`] is a blocking Multi-Producer-Multi-Consumer Queue
//! with a fixed Capacity. Producers block while the Queue is full and
//! Consumers block while it is empty. Closing the Queue wakes everyone up,
//! rejects all further Items and lets the Consumers drain what is left.

use std::fmt;

pub mod bounded;

/// The Error for the Enqueue Operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnqueueError {
    /// This means that the Queue is full and the Element could not be
    /// inserted in this Moment
    WouldBlock,
    /// The Queue has been closed and will never accept any Elements again
    Closed,
}

impl fmt::Display for EnqueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WouldBlock => write!(f, "queue is full"),
            Self::Closed => write!(f, "queue is closed"),
        }
    }
}

impl std::error::Error for EnqueueError {}

/// The Error for the non-blocking Dequeue Operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeueError {
    /// The Queue is currently empty, but Elements could still be added to it
    /// later on
    WouldBlock,
    /// The Queue is empty and has been closed, meaning that there will never
    /// be any Elements to dequeue again
    Closed,
}

impl fmt::Display for DequeueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WouldBlock => write!(f, "queue is empty"),
            Self::Closed => write!(f, "queue is empty and closed"),
        }
    }
}

impl std::error::Error for DequeueError {}

/// Returned when attempting to create a Queue that could never hold any
/// Element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCapacity;

impl fmt::Display for InvalidCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue capacity must be greater than zero")
    }
}

impl std::error::Error for InvalidCapacity {}
