use crate::util::{cerror, clog, cwarn};

/// Where session events go: the console for diagnostics, and a blocking
/// notification for errors the user must see.
pub trait Reporter {
    fn log(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn log_error(&self, msg: &str);
    fn notify(&self, msg: &str);
}

pub struct BrowserReporter;

impl Reporter for BrowserReporter {
    fn log(&self, msg: &str) {
        clog(msg);
    }

    fn warn(&self, msg: &str) {
        cwarn(msg);
    }

    fn log_error(&self, msg: &str) {
        cerror(msg);
    }

    fn notify(&self, msg: &str) {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(msg);
        }
    }
}
