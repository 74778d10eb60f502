use super::StoryWeaveApp;

impl StoryWeaveApp {
    /// Drains async results queued by background tasks and applies them.
    /// Returns whether anything changed, so the frame loop can keep
    /// repainting while work is pending.
    pub fn poll_action_messages(&mut self) -> bool {
        let mut any = false;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            any = true;
        }
        any
    }
}
