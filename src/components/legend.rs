use crate::view::LegendEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendSwatchProps {
    pub entry: LegendEntry,
    pub text_y: f64,
    pub line_pitch: f64,
}

/// One category swatch with its caption stacked underneath.
#[function_component(LegendSwatch)]
pub fn legend_swatch(props: &LegendSwatchProps) -> Html {
    let e = &props.entry;
    html! { <g class="legend-group">
        <rect class="legend-item" x={e.x.to_string()} y={e.y.to_string()} width={e.size.to_string()} height={e.size.to_string()} fill={e.color.clone()} />
        <text transform={format!("translate({},{})", e.x, e.y + props.text_y)}>
            { for e.caption.iter().map(|w| html!{ <tspan x="0" dy={props.line_pitch.to_string()}>{ w.clone() }</tspan> }) }
        </text>
    </g> }
}
