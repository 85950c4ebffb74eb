use std::thread;
use std::time::Duration;
use SharedQueueMini::core::log::append_logs;
use SharedQueueMini::core::shared::SharedQueue;

fn main() {
    let mut handles = vec![];

    // Spawn producer/consumer workers, all against the one shared queue
    for worker in 0..8 {
        handles.push(thread::spawn(move || {
            let queue = SharedQueue::<String>::instance();

            // Enqueue 3 items
            for i in 1..=3 {
                let item = format!("W{}-Item {}", worker, i);
                queue.enqueue(item).expect("items are never absent here");
                thread::sleep(Duration::from_millis(10));
            }

            // Dequeue 2 items
            for _ in 0..2 {
                queue.try_dequeue();
                thread::sleep(Duration::from_millis(10));
            }
        }));
    }

    // Wait for all threads to complete
    for handle in handles {
        handle.join().unwrap();
    }

    let queue = SharedQueue::<String>::instance();
    println!(
        "remaining items: {} (empty: {})",
        queue.count(),
        queue.is_empty()
    );

    // Append the operation log as NDJSON
    append_logs(&queue.logs(), "output.ndjson").expect("Failed to append logs");
}
