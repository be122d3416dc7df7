use std::rc::Rc;

use super::legend_panel::LegendPanel;
use crate::config::ChartConfig;
use crate::state::TooltipState;
use crate::view::ChartView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TreemapViewProps {
    pub view: Rc<ChartView>,
    pub config: Rc<ChartConfig>,
    pub on_hover: Callback<TooltipState>,
    pub on_leave: Callback<()>,
}

#[function_component(TreemapView)]
pub fn treemap_view(props: &TreemapViewProps) -> Html {
    let view = &props.view;
    let cfg = &props.config;
    let inset = cfg.label_inset.to_string();

    let tiles = view.tiles.iter().enumerate().map(|(i, tile)| {
        let over_cb = {
            let cb = props.on_hover.clone();
            let view = props.view.clone();
            let offset = cfg.tooltip_offset_x;
            Callback::from(move |e: MouseEvent| {
                let t = &view.tiles[i];
                cb.emit(TooltipState::show(t, e.page_x() as f64, e.page_y() as f64, offset));
            })
        };
        let out_cb = {
            let cb = props.on_leave.clone();
            Callback::from(move |_: MouseEvent| cb.emit(()))
        };
        html! { <g class="group" transform={tile.transform()}>
            <rect class="tile"
                width={tile.rect.width().to_string()}
                height={tile.rect.height().to_string()}
                style={format!("stroke:white; fill:{};", tile.color)}
                data-name={tile.name.clone()}
                data-category={tile.category.clone()}
                data-value={tile.value.to_string()}
                onmouseover={over_cb}
                onmouseout={out_cb} />
            <text>
                { for tile.label.iter().map(|l| html!{ <tspan x={inset.clone()} dy={l.dy.clone()}>{ l.text.clone() }</tspan> }) }
            </text>
        </g> }
    });

    html! {<svg width={view.width.to_string()} height={view.height.to_string()}>
        { for tiles }
        <LegendPanel entries={view.legend.clone()} y={view.legend_y} text_y={cfg.legend_text_y} line_pitch={cfg.legend_line_pitch} />
    </svg>}
}
