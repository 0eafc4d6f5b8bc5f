//! Serves the camera list page
//!
//! Every button in the rendered container is a form posting back to this portal, which runs the
//! button's click handler and sends the browser back to the page.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::web::{self, Data, Form, Path, ServiceConfig};
use log::debug;
use serde::Deserialize;
use tera::{Context, Tera};

use crate::api::Camera;
use crate::container::MOUNT_POINT;
use crate::error::{Error, Result};
use crate::refresher::CameraListRefresher;
use crate::templates;
use crate::transport::Transport;


fn back_to_index() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, "/"))
        .finish()
}

fn no_button(index: usize) -> Error {
    Error::Web(StatusCode::NOT_FOUND, format!("no camera button at position {}", index))
}


async fn index<T: Transport>(
    refresher: Data<CameraListRefresher<T>>,
    templates: Data<Tera>,
) -> Result<HttpResponse>
{
    let container = refresher.container();

    let mut context = Context::new();
    context.insert("mount_point", MOUNT_POINT);
    context.insert("nodes", container.nodes());

    templates::render(&templates, "index.html", &context)
}


/// Form posted by a camera button
///
/// `id` is the camera the button was rendered for. The list may have been refreshed since the
/// page was rendered, so it must still match the camera at the button's position.
#[derive(Deserialize)]
struct ButtonForm {
    id: String,
}


/// Resolves the camera a posted button refers to
fn resolve<T: Transport>(
    refresher: &CameraListRefresher<T>,
    index: usize,
    form: &ButtonForm,
) -> Result<Camera>
{
    let camera = refresher.camera_at(index)
        .ok_or_else(|| no_button(index))?;

    if camera.id != form.id {
        debug!("button {} now belongs to camera \"{}\", not \"{}\"", index, camera.id, form.id);
        return Err(Error::Web(
            StatusCode::CONFLICT,
            String::from("the camera list has changed, reload the page"),
        ));
    }

    Ok(camera)
}


async fn start<T: Transport>(
    refresher: Data<CameraListRefresher<T>>,
    path: Path<usize>,
    form: Form<ButtonForm>,
) -> Result<HttpResponse>
{
    let index = path.into_inner();

    debug!("button {} clicked", index);
    let camera = resolve(&refresher, index, &form)?;
    refresher.start_stream(&camera);

    Ok(back_to_index())
}


async fn stop<T: Transport>(
    refresher: Data<CameraListRefresher<T>>,
    path: Path<usize>,
    form: Form<ButtonForm>,
) -> Result<HttpResponse>
{
    let index = path.into_inner();

    let camera = resolve(&refresher, index, &form)?;
    refresher.stop_stream(&camera);

    Ok(back_to_index())
}


async fn refresh<T: Transport>(
    refresher: Data<CameraListRefresher<T>>,
) -> HttpResponse
{
    refresher.refresh()
        .await;

    back_to_index()
}


/// Configures an Actix service to serve the UI
///
/// The app must provide `Data<CameraListRefresher<T>>` and `Data<Tera>`.
pub fn configure<T: Transport>(service: &mut ServiceConfig) {

    service.route("/", web::get().to(index::<T>));
    service.route("/refresh", web::post().to(refresh::<T>));
    service.route(&format!("/{}/{{index}}/start", MOUNT_POINT), web::post().to(start::<T>));
    service.route(&format!("/{}/{{index}}/stop", MOUNT_POINT), web::post().to(stop::<T>));
}
