//! Fire-and-forget image load requests.
//!
//! Binding happens inside the layout pass, which must never wait on I/O. The
//! image provider therefore only records what should be loaded, by sending a
//! [`LoadRequest`] down a channel. The host drains the other end on its own
//! schedule and delivers pixels however it likes.

use crossbeam_channel::{Receiver, Sender, unbounded};
use nine_grid_core::Size;
use nine_grid_core::logging::targets;

/// Identifier of one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    #[inline]
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

/// A request to load `source` for the item at `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub id: RequestId,
    pub source: String,
    pub position: usize,
    /// Size of the cell the image will be shown in.
    pub target: Size,
}

/// Unbounded queue of [`LoadRequest`]s.
#[derive(Debug)]
pub struct ImageRequestQueue {
    sender: Sender<LoadRequest>,
    receiver: Receiver<LoadRequest>,
    next_id: u64,
}

impl ImageRequestQueue {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            next_id: 0,
        }
    }

    /// A receiving handle for the host's loader. It may live on another
    /// thread.
    pub fn receiver(&self) -> Receiver<LoadRequest> {
        self.receiver.clone()
    }

    /// Queue a request and return its id without waiting.
    pub fn submit(&mut self, source: &str, position: usize, target: Size) -> RequestId {
        let id = RequestId(self.next_id);
        self.next_id += 1;

        let request = LoadRequest {
            id,
            source: source.to_owned(),
            position,
            target,
        };
        // The queue holds its own receiver, so the channel cannot disconnect.
        if self.sender.send(request).is_err() {
            tracing::warn!(target: targets::IMAGE, source, "image request dropped");
        } else {
            tracing::trace!(target: targets::IMAGE, id = id.0, source, position, "image requested");
        }
        id
    }

    /// Take every request queued so far.
    pub fn drain(&self) -> Vec<LoadRequest> {
        self.receiver.try_iter().collect()
    }

    /// Number of requests waiting to be drained.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

impl Default for ImageRequestQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_and_drain() {
        let mut queue = ImageRequestQueue::new();
        let a = queue.submit("a.png", 0, Size::square(100.0));
        let b = queue.submit("b.png", 1, Size::square(100.0));
        assert_ne!(a, b);
        assert_eq!(queue.pending(), 2);

        let requests = queue.drain();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].source, "a.png");
        assert_eq!(requests[1].position, 1);
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn test_receiver_on_another_thread() {
        let mut queue = ImageRequestQueue::new();
        let receiver = queue.receiver();
        queue.submit("remote.jpg", 3, Size::square(64.0));

        let handle = std::thread::spawn(move || receiver.recv().map(|r| r.source));
        assert_eq!(handle.join().unwrap().unwrap(), "remote.jpg");
    }
}
