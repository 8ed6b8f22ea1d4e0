use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Work queued by key handlers and the ticker, drained once per frame.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    Tick,
    ToggleTimer,
    StopTimer,
    SaveDescription,
    SubmitProjectForm,
    SubmitEntryForm,
    ConfirmDelete,
    ExportCsv,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
