use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

type Job = Pin<Box<dyn Future<Output = ()> + Send>>;

/// FIFO task queue with a single worker.
///
/// Jobs run one at a time in push order; none are dropped while the
/// queue is alive. Must be created from within a Tokio runtime.
pub struct SerialQueue {
    name: &'static str,
    tx: mpsc::UnboundedSender<Job>,
    pending: Arc<AtomicUsize>,
    worker: JoinHandle<()>,
}

impl SerialQueue {
    pub fn new(name: &'static str) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Job>();
        let pending = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&pending);
        let worker = tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                job.await;
                counter.fetch_sub(1, Ordering::SeqCst);
            }
        });

        Self {
            name,
            tx,
            pending,
            worker,
        }
    }

    /// Append a job behind everything already queued.
    pub fn push<F>(&self, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let queued = self.pending.fetch_add(1, Ordering::SeqCst) + 1;
        if self.tx.send(Box::pin(job)).is_err() {
            self.pending.fetch_sub(1, Ordering::SeqCst);
            tracing::warn!(effect = self.name, "Worker stopped, job dropped");
            return;
        }
        tracing::debug!(effect = self.name, queued, "Job queued");
    }

    /// Jobs queued or running.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }
}

impl Drop for SerialQueue {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn jobs_run_in_order_without_overlap() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let queue = SerialQueue::new("test");
        let start = Instant::now();

        // Later jobs are shorter; FIFO must still hold.
        for (n, delay) in [(0, 300), (1, 200), (2, 100)] {
            let tx = tx.clone();
            queue.push(async move {
                tokio::time::sleep(Duration::from_millis(delay)).await;
                let _ = tx.send((n, start.elapsed()));
            });
        }
        assert_eq!(queue.pending(), 3);

        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(rx.recv().await.unwrap());
        }

        let order: Vec<_> = seen.iter().map(|(n, _)| *n).collect();
        assert_eq!(order, vec![0, 1, 2]);
        assert!(seen[0].1 >= Duration::from_millis(300));
        assert!(seen[1].1 >= Duration::from_millis(500));
        assert!(seen[2].1 >= Duration::from_millis(600));
    }

    #[tokio::test(start_paused = true)]
    async fn pending_drains_to_zero() {
        let queue = SerialQueue::new("test");
        queue.push(async {
            tokio::time::sleep(Duration::from_millis(10)).await;
        });
        assert_eq!(queue.pending(), 1);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(queue.pending(), 0);
    }
}
