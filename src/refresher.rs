//! Keeps the camera list container in sync with the backend

use std::sync::{Arc, RwLock};

use log::{debug, error, info, trace};
use tokio::task::JoinHandle;

use crate::{allow_err, do_read, do_write};
use crate::api::{self, Camera, Listing};
use crate::container::{Container, UNEXPECTED_RESPONSE};
use crate::error::Result;
use crate::paths::{self, StreamAction};
use crate::transport::{Method, Transport};


/// Fetches the camera list, renders one button per camera and handles clicks on those buttons
///
/// Each refresh is independent: nothing is cached and failures are not retried. Stream requests
/// triggered by clicks are fire-and-forget; every click issues its own request, even while an
/// earlier one is still in flight.
pub struct CameraListRefresher<T> {
    transport: Arc<T>,
    container: RwLock<Container>,
}

impl<T: Transport> CameraListRefresher<T> {

    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            container: RwLock::new(Container::default()),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Takes a snapshot of the container's current contents
    pub fn container(&self) -> Container {
        do_read!(self.container).clone()
    }

    /// Refreshes the container, logging any failure
    ///
    /// If the camera list cannot be fetched or parsed, the container is left as it was.
    pub async fn refresh(&self) {
        allow_err!(self.try_refresh().await, "failed to refresh camera list");
    }

    /// Refreshes the container, returning fetch and parse failures to the caller
    ///
    /// A response that parses but is not an array is not an error: the container is replaced with
    /// a message saying so.
    pub async fn try_refresh(&self) -> Result<()> {

        let listing = api::fetch_listing(&*self.transport)
            .await?;

        let mut container = do_write!(self.container);
        match listing {
            Listing::Cameras(cameras) => {
                info!("rendering {} camera(s)", cameras.len());
                container.render_cameras(cameras);
            },
            Listing::Unexpected => {
                container.show_message(UNEXPECTED_RESPONSE);
            },
        }

        Ok(())
    }

    /// Handles a click on the button at `index`
    ///
    /// Returns `None` if there is no button at that position. Otherwise the stream start request
    /// is spawned and its handle returned; callers are free to drop it.
    pub fn click(&self, index: usize) -> Option<JoinHandle<()>> {
        self.act(index, StreamAction::Start)
    }

    /// Requests that the stream of the camera behind the button at `index` be stopped
    pub fn stop(&self, index: usize) -> Option<JoinHandle<()>> {
        self.act(index, StreamAction::Stop)
    }

    /// Spawns a request to start `camera`'s stream
    pub fn start_stream(&self, camera: &Camera) -> JoinHandle<()> {
        self.request(camera, StreamAction::Start)
    }

    /// Spawns a request to stop `camera`'s stream
    pub fn stop_stream(&self, camera: &Camera) -> JoinHandle<()> {
        self.request(camera, StreamAction::Stop)
    }

    /// Gets the camera bound to the button at `index`
    pub fn camera_at(&self, index: usize) -> Option<Camera> {
        do_read!(self.container)
            .button(index)
            .map(|button| button.camera.clone())
    }

    fn act(&self, index: usize, action: StreamAction) -> Option<JoinHandle<()>> {
        let camera = self.camera_at(index)?;

        Some(self.request(&camera, action))
    }

    fn request(&self, camera: &Camera, action: StreamAction) -> JoinHandle<()> {

        debug!("requesting stream {} for camera \"{}\"", action, camera.name);
        let path = paths::stream(&camera.id, action);
        let transport = self.transport.clone();

        tokio::spawn(async move {
            match transport.send(Method::POST, &path).await {
                Ok(reply) => trace!("POST {} answered {}", path, reply.status),
                Err(err) => error!("failed to send POST {}: {}", path, err),
            }
        })
    }
}
