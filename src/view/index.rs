use maud::{Markup, html};

use crate::HTMX_PATH;
use crate::view::dashboard::{PageTarget, render_dashboard_body};

pub const DEFAULT_INDEX_TITLE: &str = "Shortgame Dashboard";

/// Full page with empty mount points; the dashboard fills in after load.
#[must_use]
pub fn render_index_template(title: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        head{
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) defer {}
        }
        body {
            h1 {
                (title)
            }
            (render_dashboard_body(&PageTarget::new()))
        }
    }
}
