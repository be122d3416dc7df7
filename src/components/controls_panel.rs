use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    /// `(key, title)` for each selectable dataset.
    pub options: Vec<(String, String)>,
    pub selected: String,
    pub on_select: Callback<String>,
    pub status: Option<String>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let change_cb = {
        let cb = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };
    html! {<div style="display:flex; align-items:center; gap:10px; margin:8px 0;">
        <label for="dataselect" style="font-weight:600;">{"Dataset"}</label>
        <select id="dataselect" onchange={change_cb}>
            { for props.options.iter().map(|(key, title)| html!{
                <option value={key.clone()} selected={*key == props.selected}>{ title.clone() }</option>
            }) }
        </select>
        { if let Some(txt) = &props.status { html!{ <span style="font-size:11px; opacity:0.7;">{ txt.clone() }</span> } } else { html!{} } }
    </div>}
}
