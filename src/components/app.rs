use std::rc::Rc;

use super::{
    chart_header::ChartHeader, controls_panel::ControlsPanel, tooltip::Tooltip,
    treemap_view::TreemapView,
};
use crate::config::{ChartConfig, DatasetTable};
use crate::fetch::fetch_dataset;
use crate::state::{BrowserReporter, ChartSession, Settled, TooltipState};
use crate::util::{clog, now_ms};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub table: Rc<DatasetTable>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let table = props.table.clone();
    let config = use_memo((), |_| ChartConfig::default());
    let session = use_mut_ref(ChartSession::default);
    let loading = use_state(|| false);
    let tooltip = use_state(TooltipState::default);
    let rerender = use_force_update();

    // Select a dataset: tear down, fetch, and install the result if still current.
    let load = {
        let session = session.clone();
        let table = table.clone();
        let config = config.clone();
        let loading = loading.clone();
        let tooltip = tooltip.clone();
        Callback::from(move |key: String| {
            let ticket = session.borrow_mut().begin(&key, &table);
            clog(&format!(
                "select \"{}\" (generation {})",
                ticket.descriptor.key, ticket.generation
            ));
            tooltip.set(TooltipState::default());
            loading.set(true);
            rerender.force_update();

            let session = session.clone();
            let config = config.clone();
            let loading = loading.clone();
            let rerender = rerender.clone();
            spawn_local(async move {
                let started = now_ms();
                let outcome = fetch_dataset(&ticket.descriptor.source_url).await;
                let settled = session
                    .borrow_mut()
                    .settle(&ticket, outcome, &config, &BrowserReporter);
                if let Settled::Rendered { tiles } = settled {
                    clog(&format!(
                        "rendered \"{}\": {} tiles in {:.0}ms",
                        ticket.descriptor.key,
                        tiles,
                        now_ms() - started
                    ));
                }
                if settled != Settled::Stale {
                    loading.set(false);
                    rerender.force_update();
                }
            });
        })
    };

    // Initial load with the default dataset
    {
        let load = load.clone();
        let key = table.default_entry().key.clone();
        use_effect_with((), move |_| {
            load.emit(key);
            || ()
        });
    }

    let on_hover = {
        let tooltip = tooltip.clone();
        Callback::from(move |t: TooltipState| tooltip.set(t))
    };
    let on_leave = {
        let tooltip = tooltip.clone();
        Callback::from(move |_: ()| tooltip.set(tooltip.hidden()))
    };

    let options: Vec<(String, String)> = table
        .entries()
        .iter()
        .map(|d| (d.key.clone(), d.title.clone()))
        .collect();
    let current = session.borrow();
    let selected = current
        .selected()
        .cloned()
        .unwrap_or_else(|| table.default_entry().clone());
    let status = if *loading { Some("Loading…".to_string()) } else { None };

    html! {<main>
        <ControlsPanel options={options} selected={selected.key.clone()} on_select={load} status={status} />
        <ChartHeader title={selected.title.clone()} subtitle={selected.subtitle.clone()} />
        { match current.view() {
            Some(view) => html!{ <TreemapView view={view} config={config.clone()} on_hover={on_hover} on_leave={on_leave} /> },
            None => html!{ <svg width={config.width.to_string()} height={config.height.to_string()}></svg> },
        } }
        <Tooltip state={(*tooltip).clone()} fade_ms={config.tooltip_fade_ms} />
    </main>}
}
