use yew::prelude::*;

use crate::config;
use crate::content::Metric;
use crate::hooks::use_metric_fill;

#[derive(Properties, PartialEq)]
pub struct StatBarProps {
    pub metric: Metric,
}

#[function_component(StatBar)]
pub fn stat_bar(props: &StatBarProps) -> Html {
    let container = use_node_ref();
    let width = use_metric_fill(container.clone(), props.metric.clone());

    let fill_style = format!(
        "width: {}%; transition: width {}ms ease-out;",
        width,
        config::FILL_TRANSITION_MS
    );

    html! {
        <div class="stat-bar" ref={container}>
            <div class="stat-bar__header">
                <span class="stat-bar__label">{props.metric.label.clone()}</span>
                <span class="stat-bar__value">{format!("{}%", props.metric.percentage)}</span>
            </div>
            <div class="stat-bar__track">
                <div class="stat-bar__fill" style={fill_style}></div>
            </div>
            <p class="stat-bar__description">{props.metric.description.clone()}</p>
        </div>
    }
}
