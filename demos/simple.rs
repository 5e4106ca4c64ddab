use std::{sync::Arc, thread};

use boundq::queues::bounded::Queue;

fn main() {
    boundq::trace::init_tracing();

    let queue = Arc::new(Queue::new(5).unwrap());

    let producers: Vec<_> = (1..=2)
        .map(|id| {
            let queue = queue.clone();
            thread::spawn(move || {
                for i in 0..10 {
                    let item = id * 1000 + i;
                    queue.push(item).unwrap();
                    println!("Producer {} pushed: {}", id, item);
                }
            })
        })
        .collect();

    let consumers: Vec<_> = (1..=3)
        .map(|id| {
            let queue = queue.clone();
            thread::spawn(move || {
                while let Some(item) = queue.pop() {
                    println!("Consumer {} popped: {}", id, item);
                }
            })
        })
        .collect();

    for producer in producers {
        producer.join().unwrap();
    }

    queue.close();
    for consumer in consumers {
        consumer.join().unwrap();
    }
}
