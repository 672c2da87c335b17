use std::rc::Rc;

use log::{error, info};
use prjct_legacy::content::Catalog;
use prjct_legacy::{config, App, AppProps};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let catalog = match Catalog::builtin() {
        Ok(catalog) => Rc::new(catalog),
        Err(e) => {
            error!("Refusing to render a partial page: {}", e);
            return;
        }
    };

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { catalog }).render();
}
