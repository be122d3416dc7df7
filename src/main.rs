use std::rc::Rc;

mod color;
mod components;
mod config;
mod error;
mod fetch;
mod labels;
mod layout;
mod model;
mod state;
mod util;
mod view;

use components::{App, AppProps};
use config::DatasetTable;

fn main() {
    match DatasetTable::builtin() {
        Ok(table) => {
            yew::Renderer::<App>::with_props(AppProps {
                table: Rc::new(table),
            })
            .render();
        }
        Err(err) => util::cerror(&err.to_string()),
    }
}
