// Frame-loop bookkeeping, independent of how frames are actually scheduled.

/// Host mechanism that calls back once per display refresh.
pub trait FrameScheduler {
    type Handle: Copy;

    /// Ask for one callback; `None` when the host refused.
    fn request(&mut self) -> Option<Self::Handle>;
    fn cancel(&mut self, handle: Self::Handle);
}

/// Tracks whether the loop is live and which request is outstanding.
///
/// At most one request is pending at a time. Once stopped, a callback that
/// was already queued runs nothing and requests nothing.
pub struct FrameGate<S: FrameScheduler> {
    scheduler: S,
    running: bool,
    pending: Option<S::Handle>,
}

impl<S: FrameScheduler> FrameGate<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            running: false,
            pending: None,
        }
    }

    /// Request the first frame. Returns whether the loop is running.
    pub fn start(&mut self) -> bool {
        if !self.running && self.pending.is_none() {
            self.running = true;
            self.schedule();
        }
        self.running
    }

    /// Handle a scheduled callback: run `frame` if still live, then request
    /// the next one. Returns whether `frame` ran.
    pub fn fire(&mut self, frame: impl FnOnce()) -> bool {
        self.pending = None;
        if !self.running {
            return false;
        }
        frame();
        self.schedule();
        true
    }

    /// Cancel the outstanding request. Returns whether the loop was running.
    pub fn stop(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        was_running
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending(&self) -> Option<S::Handle> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn schedule(&mut self) {
        match self.scheduler.request() {
            Some(handle) => self.pending = Some(handle),
            None => self.running = false,
        }
    }
}
