//! Logging utilities


use env_logger::Env;


#[cfg(debug_assertions)]
const DEFAULT_FILTER: &str = "info,camlist=debug";
#[cfg(not(debug_assertions))]
const DEFAULT_FILTER: &str = "info";


/// Initializes environment-based logging provider
///
/// The filter is read from CAMLIST_LOG and the write style from
/// CAMLIST_LOG_STYLE.
pub fn init() {

    let env = Env::default()
        .filter_or("CAMLIST_LOG", DEFAULT_FILTER)
        .write_style("CAMLIST_LOG_STYLE");

    env_logger::init_from_env(env);
}


/// Logs an error if the given `Result` is `Err`
#[macro_export]
macro_rules! allow_err {
    ($res:expr, $fmt:expr $(, $args:expr)*) => ({
        use log::error;
        if let Err(err) = $res {
            let msg = format!($fmt, $($args),*);
            error!("{}: {}", msg, err);
        }
    })
}
