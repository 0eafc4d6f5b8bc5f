use std::env;

use actix_files::Files;
use actix_web::{App, HttpServer};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use log::{debug, info};

use camlist::config::Settings;
use camlist::logging;
use camlist::refresher::CameraListRefresher;
use camlist::templates;
use camlist::transport::HttpTransport;
use camlist::ui;
use camlist::Result;


/// Loads settings from the file named on the command line, or else from the environment
fn load_settings() -> Result<Settings> {

    match env::args().nth(1) {
        Some(path) => {
            debug!("loading configuration from {}", path);
            Settings::load(path)
        },
        None => {
            debug!("loading configuration from environment");
            Settings::from_env()
        },
    }
}


#[actix_web::main]
async fn main() -> Result<()> {

    logging::init();

    let settings = load_settings()?;
    debug!("using camera backend at {}", settings.backend);

    let transport = HttpTransport::new(&settings.backend)?;
    let refresher = Data::new(CameraListRefresher::new(transport));
    let templates = Data::new(templates::load(settings.template_path.as_deref())?);

    // Populate the camera list once at startup
    refresher.refresh()
        .await;

    let static_path = settings.static_path.clone();

    info!("listening on {}", settings.listen);
    HttpServer::new(move || {

            let app = App::new()
                .wrap(Logger::default())
                .app_data(refresher.clone())
                .app_data(templates.clone());

            let app = match &static_path {
                Some(dir) => app.service(Files::new("/static", dir)),
                None => app,
            };

            app.configure(ui::configure::<HttpTransport>)
        })
        .bind(&settings.listen)?
        .run()
        .await?;

    Ok(())
}
