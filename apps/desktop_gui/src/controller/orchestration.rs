//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        BackendCommand::FetchCatalog => "fetch_catalog",
        BackendCommand::FetchPoster { .. } => "fetch_poster",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Backend command processor disconnected (possible startup/runtime failure); restart the app"
                    .to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::domain::MovieId;

    #[test]
    fn queues_commands_while_capacity_remains() {
        let (tx, rx) = bounded(4);
        let mut status = String::new();

        dispatch_backend_command(&tx, BackendCommand::FetchCatalog, &mut status);

        assert!(status.is_empty());
        assert!(matches!(rx.try_recv(), Ok(BackendCommand::FetchCatalog)));
    }

    #[test]
    fn full_queue_surfaces_a_status_message() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();

        dispatch_backend_command(&tx, BackendCommand::FetchCatalog, &mut status);
        dispatch_backend_command(
            &tx,
            BackendCommand::FetchPoster {
                movie_id: MovieId(1),
                url: "https://img.example/poster.jpg".to_string(),
            },
            &mut status,
        );

        assert!(status.contains("queue is full"));
    }

    #[test]
    fn disconnected_queue_surfaces_a_status_message() {
        let (tx, rx) = bounded::<BackendCommand>(1);
        drop(rx);
        let mut status = String::new();

        dispatch_backend_command(&tx, BackendCommand::FetchCatalog, &mut status);

        assert!(status.contains("disconnected"));
    }
}
