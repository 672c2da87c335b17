use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod category;
pub mod config;
pub mod content;
pub mod error;
pub mod hooks;
pub mod reveal;
pub mod components {
    pub mod category_tabs;
    pub mod stat_bar;
}
pub mod pages {
    pub mod infographic;
}

use content::Catalog;
use hooks::RevealContext;
use pages::infographic::Infographic;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/exercise-physiology")]
    ExercisePhysiology,
    #[at("/personal-training")]
    PersonalTraining,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
        route => {
            info!("Rendering {:?} page", route);
            html! { <Infographic key={route.to_path()} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub catalog: Rc<Catalog>,
}

#[function_component]
pub fn App(props: &AppProps) -> Html {
    let reveal = use_memo(|_| RevealContext::new(), ());

    html! {
        <ContextProvider<Rc<Catalog>> context={props.catalog.clone()}>
            <ContextProvider<RevealContext> context={(*reveal).clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<RevealContext>>
        </ContextProvider<Rc<Catalog>>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Category, CategorySelector};
    use rstest::rstest;

    #[rstest]
    #[case(Route::Home, "/")]
    #[case(Route::ExercisePhysiology, "/exercise-physiology")]
    #[case(Route::PersonalTraining, "/personal-training")]
    fn every_entry_point_opens_on_clinical(#[case] route: Route, #[case] path: &str) {
        assert_eq!(route.to_path(), path);
        // Each route mounts a fresh page whose selector starts from its default.
        assert_eq!(CategorySelector::default().current(), Category::Clinical);
    }
}
