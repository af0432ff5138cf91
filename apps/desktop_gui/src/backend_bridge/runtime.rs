//! Backend worker: a dedicated thread running a tokio runtime that services
//! UI commands serially off the queue, so the UI thread never blocks on the
//! network.

use std::thread;

use catalog_client::CatalogClient;
use crossbeam_channel::{Receiver, Sender};
use image::GenericImageView;
use shared::error::FetchError;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{PosterImage, UiEvent};

pub fn launch(listing_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::CatalogFailed(FetchError::Unreachable(format!(
                    "backend worker startup failure: {err}"
                ))));
                return;
            }
        };

        runtime.block_on(async move {
            let client = match CatalogClient::new(listing_url) {
                Ok(client) => client,
                Err(err) => {
                    tracing::error!("failed to build catalog client: {err:#}");
                    let _ = ui_tx.try_send(UiEvent::CatalogFailed(FetchError::Unreachable(
                        format!("backend worker startup failure: {err:#}"),
                    )));
                    return;
                }
            };

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchCatalog => {
                        tracing::info!("backend: fetch_catalog");
                        match client.fetch_all().await {
                            Ok(movies) => {
                                let _ = ui_tx.try_send(UiEvent::CatalogLoaded(movies));
                            }
                            Err(err) => {
                                tracing::error!(
                                    reason = err.reason(),
                                    "backend: fetch_catalog failed: {err}"
                                );
                                let _ = ui_tx.try_send(UiEvent::CatalogFailed(err));
                            }
                        }
                    }
                    BackendCommand::FetchPoster { movie_id, url } => {
                        tracing::debug!(movie_id = movie_id.0, "backend: fetch_poster");
                        let event = match client.fetch_poster(&url).await {
                            Ok(bytes) => match decode_poster(&bytes) {
                                Ok(image) => UiEvent::PosterLoaded { movie_id, image },
                                Err(reason) => UiEvent::PosterFailed { movie_id, reason },
                            },
                            Err(err) => UiEvent::PosterFailed {
                                movie_id,
                                reason: err.to_string(),
                            },
                        };
                        let _ = ui_tx.try_send(event);
                    }
                }
            }
        });
    });
}

fn decode_poster(bytes: &[u8]) -> Result<PosterImage, String> {
    let decoded = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let (width, height) = decoded.dimensions();
    Ok(PosterImage {
        width: width as usize,
        height: height as usize,
        rgba: decoded.to_rgba8().into_raw(),
    })
}
