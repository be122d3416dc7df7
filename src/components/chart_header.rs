use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ChartHeaderProps {
    pub title: String,
    pub subtitle: String,
}

#[function_component(ChartHeader)]
pub fn chart_header(props: &ChartHeaderProps) -> Html {
    html! {<>
        <h1 id="title" style="margin:8px 0 4px 0; font-size:26px;">{ props.title.clone() }</h1>
        <p id="description" style="margin:0 0 8px 0; opacity:0.8;">{ props.subtitle.clone() }</p>
    </>}
}
