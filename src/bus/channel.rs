// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Unbounded multi-producer, multi-consumer FIFO channel.
//!
//! Producers call [`Channel::publish`] from any thread or task; it takes the
//! queue mutex only long enough to append and signal. Consumers hold a
//! [`Subscription`] and await items with a bounded wait: an empty queue parks
//! the task on a [`Notify`] until a producer signals or the wait elapses, after
//! which the queue is checked again.
//!
//! The mutex is a `std::sync::Mutex` and is never held across an `.await`, so
//! the same channel can be fed from plain OS threads and drained by tokio tasks.
//!
//! # Example
//! ```rust
//! use attack_bus::bus::Channel;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let channel = Channel::new("raw");
//! channel.publish(1);
//! channel.publish(2);
//!
//! let mut subscription = channel.consume(Duration::from_millis(50));
//! assert_eq!(subscription.next().await, 1);
//! assert_eq!(subscription.next().await, 2);
//! assert!(subscription.recv().await.is_err());
//! # }
//! ```

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::Instant;

use crate::errors::ChannelWaitTimeout;
use crate::observability::messages::bus::{ChannelWaitElapsed, ItemPublished};
use crate::observability::messages::StructuredLog;

pub struct Channel<T> {
    label: &'static str,
    queue: Mutex<VecDeque<T>>,
    ready: Notify,
}

impl<T> Channel<T> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            queue: Mutex::new(VecDeque::new()),
            ready: Notify::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Append `item` to the tail and wake one waiting consumer.
    pub fn publish(&self, item: T) {
        let backlog = {
            let mut queue = self.lock();
            queue.push_back(item);
            // A stored permit covers a consumer that checked the queue but has
            // not started waiting yet.
            self.ready.notify_one();
            queue.len()
        };

        ItemPublished {
            channel: self.label,
            backlog,
        }
        .log();
    }

    /// Start a lazy, never-ending sequence over this channel.
    ///
    /// Each call returns an independent cursor; items are shared out between
    /// all live subscriptions, each delivered to exactly one of them.
    pub fn consume(&self, wait: Duration) -> Subscription<'_, T> {
        Subscription {
            channel: self,
            wait,
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn try_pop(&self) -> Option<T> {
        self.lock().pop_front()
    }

    /// Pop the head, suspending up to `wait` while the queue is empty.
    pub async fn recv_timeout(&self, wait: Duration) -> Result<T, ChannelWaitTimeout> {
        let deadline = Instant::now() + wait;
        loop {
            if let Some(item) = self.try_pop() {
                return Ok(item);
            }

            if tokio::time::timeout_at(deadline, self.ready.notified())
                .await
                .is_err()
            {
                return self.try_pop().ok_or(ChannelWaitTimeout(wait));
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<T>> {
        // A panic while holding the guard cannot leave the deque half-updated.
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A consumer's cursor over a [`Channel`].
pub struct Subscription<'a, T> {
    channel: &'a Channel<T>,
    wait: Duration,
}

impl<T> Subscription<'_, T> {
    /// Wait at most one bounded interval for the next item.
    ///
    /// Drivers use this so they can check for cancellation between waits.
    pub async fn recv(&mut self) -> Result<T, ChannelWaitTimeout> {
        let result = self.channel.recv_timeout(self.wait).await;
        if let Err(ChannelWaitTimeout(waited)) = result {
            ChannelWaitElapsed {
                channel: self.channel.label,
                waited,
            }
            .log();
        }
        result
    }

    /// Next item in enqueue order. Never returns while the channel stays empty;
    /// stop it by dropping the future.
    pub async fn next(&mut self) -> T {
        loop {
            if let Ok(item) = self.recv().await {
                return item;
            }
        }
    }
}
