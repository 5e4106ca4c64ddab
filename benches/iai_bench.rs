use iai::black_box;

use boundq::queues::bounded::Queue;

fn iai_push_pop() {
    let queue = Queue::<u64>::new(8).unwrap();

    for i in 0..64 {
        queue.push(black_box(i)).unwrap();
        black_box(queue.pop());
    }
}

fn iai_fill_close_drain() {
    let queue = Queue::<u64>::new(64).unwrap();

    for i in 0..64 {
        queue.try_push(black_box(i)).unwrap();
    }
    queue.close();
    black_box(queue.iter().count());
}

iai::main!(iai_push_pop, iai_fill_close_drain);
