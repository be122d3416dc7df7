use super::legend::LegendSwatch;
use crate::view::LegendEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendPanelProps {
    pub entries: Vec<LegendEntry>,
    /// Vertical offset of the legend inside the chart surface.
    pub y: f64,
    #[prop_or(20.0)]
    pub text_y: f64,
    #[prop_or(10.0)]
    pub line_pitch: f64,
}

#[function_component]
pub fn LegendPanel(props: &LegendPanelProps) -> Html {
    html! {<g id="legend" transform={format!("translate(0,{})", props.y)}>
        { for props.entries.iter().map(|e| html!{
            <LegendSwatch key={e.category.clone()} entry={e.clone()} text_y={props.text_y} line_pitch={props.line_pitch} />
        }) }
    </g>}
}
