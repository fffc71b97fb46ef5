use tokio::sync::{mpsc, Mutex};

/// The four lanes spec §4.6 requires: three work priorities plus a
/// dedicated lane for cleanup/monitoring tasks so a backlog of warming work
/// never starves maintenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Standard,
    Low,
    Maintenance,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::High, Priority::Standard, Priority::Low, Priority::Maintenance];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high_priority",
            Self::Standard => "standard",
            Self::Low => "low_priority",
            Self::Maintenance => "maintenance",
        }
    }
}

/// Four independent unbounded channels, one per [`Priority`]. Pulling always
/// prefers the highest-priority lane with pending work (biased `select!`),
/// so a flood of low-priority warming work never delays a high-priority
/// on-demand-triggered job.
pub struct PriorityQueues<T> {
    high_tx: mpsc::UnboundedSender<T>,
    standard_tx: mpsc::UnboundedSender<T>,
    low_tx: mpsc::UnboundedSender<T>,
    maintenance_tx: mpsc::UnboundedSender<T>,
    high_rx: Mutex<mpsc::UnboundedReceiver<T>>,
    standard_rx: Mutex<mpsc::UnboundedReceiver<T>>,
    low_rx: Mutex<mpsc::UnboundedReceiver<T>>,
    maintenance_rx: Mutex<mpsc::UnboundedReceiver<T>>,
}

impl<T: Send + 'static> PriorityQueues<T> {
    pub fn new() -> Self {
        let (high_tx, high_rx) = mpsc::unbounded_channel();
        let (standard_tx, standard_rx) = mpsc::unbounded_channel();
        let (low_tx, low_rx) = mpsc::unbounded_channel();
        let (maintenance_tx, maintenance_rx) = mpsc::unbounded_channel();

        Self {
            high_tx,
            standard_tx,
            low_tx,
            maintenance_tx,
            high_rx: Mutex::new(high_rx),
            standard_rx: Mutex::new(standard_rx),
            low_rx: Mutex::new(low_rx),
            maintenance_rx: Mutex::new(maintenance_rx),
        }
    }

    pub fn push(&self, priority: Priority, item: T) {
        let sender = match priority {
            Priority::High => &self.high_tx,
            Priority::Standard => &self.standard_tx,
            Priority::Low => &self.low_tx,
            Priority::Maintenance => &self.maintenance_tx,
        };
        // Senders are never dropped while `self` is alive, since every
        // receiver is held in the same struct.
        let _ = sender.send(item);
    }

    /// Waits for the next item, preferring higher-priority lanes. Only one
    /// caller may poll at a time (enforced by the receiver mutexes); the
    /// worker runtime holds one `PriorityQueues` shared across its pool and
    /// each worker calls this independently, so contention is expected and
    /// fine -- it's a cheap `try_lock`-free `Mutex`, held only long enough
    /// to poll once.
    pub async fn pop(&self) -> Option<T> {
        loop {
            {
                let mut high = self.high_rx.lock().await;
                if let Ok(item) = high.try_recv() {
                    return Some(item);
                }
            }
            {
                let mut standard = self.standard_rx.lock().await;
                if let Ok(item) = standard.try_recv() {
                    return Some(item);
                }
            }
            {
                let mut low = self.low_rx.lock().await;
                if let Ok(item) = low.try_recv() {
                    return Some(item);
                }
            }
            {
                let mut maintenance = self.maintenance_rx.lock().await;
                if let Ok(item) = maintenance.try_recv() {
                    return Some(item);
                }
            }

            // Nothing ready anywhere: block on whichever lane wakes first.
            let mut high = self.high_rx.lock().await;
            let mut standard = self.standard_rx.lock().await;
            let mut low = self.low_rx.lock().await;
            let mut maintenance = self.maintenance_rx.lock().await;

            tokio::select! {
                biased;
                item = high.recv() => return item,
                item = standard.recv() => return item,
                item = low.recv() => return item,
                item = maintenance.recv() => return item,
            }
        }
    }
}

impl<T: Send + 'static> Default for PriorityQueues<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn higher_priority_items_are_popped_first() {
        let queues = PriorityQueues::new();
        queues.push(Priority::Low, "low");
        queues.push(Priority::High, "high");
        queues.push(Priority::Standard, "standard");

        assert_eq!(queues.pop().await, Some("high"));
        assert_eq!(queues.pop().await, Some("standard"));
        assert_eq!(queues.pop().await, Some("low"));
    }

    #[tokio::test]
    async fn pop_blocks_until_an_item_arrives() {
        let queues = std::sync::Arc::new(PriorityQueues::new());
        let q2 = queues.clone();

        let handle = tokio::spawn(async move { q2.pop().await });
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        queues.push(Priority::Maintenance, "cleanup");

        assert_eq!(handle.await.unwrap(), Some("cleanup"));
    }
}
