//! HTML template management

use actix_web::HttpResponse;
use log::{debug, trace};
use tera::{Context, Tera};

use crate::error::Result;


/// Page template compiled into the binary
const INDEX: &str = include_str!("../templates/index.html");


/// Loads the template collection
///
/// When `dir` is given, every template under it is loaded from disk. Otherwise the built-in
/// templates are used.
pub fn load(dir: Option<&str>) -> Result<Tera> {

    match dir {
        Some(dir) => {
            debug!("loading templates from {}", dir);
            Ok(Tera::new(&format!("{}/**/*", dir))?)
        },
        None => builtin(),
    }
}


/// Builds the template collection from the built-in templates
pub fn builtin() -> Result<Tera> {

    trace!("using built-in templates");
    let mut templates = Tera::default();
    templates.add_raw_template("index.html", INDEX)?;

    Ok(templates)
}


/// Renders the specified template to an HTML response
pub fn render(templates: &Tera, name: &str, context: &Context) -> Result<HttpResponse> {

    debug!("rendering template {}", name);
    let body = templates.render(name, context)?;

    let response = HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body);

    Ok(response)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_index() {
        let templates = builtin().unwrap();
        assert!(templates.get_template_names().any(|name| name == "index.html"));
    }

    #[test]
    fn loads_from_disk() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");
        let templates = load(Some(dir)).unwrap();
        assert!(templates.get_template_names().any(|name| name == "index.html"));
    }

    #[test]
    fn missing_template_is_an_error() {
        let templates = builtin().unwrap();
        assert!(render(&templates, "nope.html", &Context::new()).is_err());
    }
}
