use crate::state::TooltipState;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TooltipProps {
    pub state: TooltipState,
    #[prop_or(100)]
    pub fade_ms: u32,
}

#[function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> Html {
    let s = &props.state;
    let last = s.lines.len().saturating_sub(1);
    html! {<div id="tooltip" data-value={s.value.clone()} style={s.style(props.fade_ms)}>
        { for s.lines.iter().enumerate().map(|(i, line)| html!{ <>{ line.clone() }{ if i < last { html!{<br/>} } else { html!{} } }</> }) }
    </div>}
}
