//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart.js, jQuery tablesorter and Bootstrap are loaded by the host page as
//! globals. Configs are built in Rust (`ccr-charts`), serialized to JSON and
//! handed to those globals here. Every call polls until its global and its
//! target element exist, so script load order on the page does not matter.

/// Give up waiting for a page global after this many 100ms polls.
const MAX_POLLS: u32 = 100;

const POLL_TEMPLATE: &str = r#"
(function() {
    var attempts = 0;
    var poll = setInterval(function() {
        attempts += 1;
        if (__READY__) {
            clearInterval(poll);
            try {
                __BODY__
            } catch(e) { console.error('[CCR] __LABEL__ error:', e); }
        } else if (attempts >= __MAX__) {
            clearInterval(poll);
            console.warn('[CCR] __LABEL__: page dependency never became ready');
        }
    }, 100);
})();
"#;

const CHART_BODY: &str = r#"
var canvas = document.getElementById(__ID__);
var previous = Chart.getChart(canvas);
if (previous) { previous.destroy(); }
var config = JSON.parse(__CONFIG__);
if (__DOLLARS__) {
    var options = config.options = config.options || {};
    var scales = options.scales = options.scales || {};
    var y = scales.y = scales.y || {};
    y.ticks = y.ticks || {};
    y.ticks.callback = function(value) { return '$' + value; };
    var plugins = options.plugins = options.plugins || {};
    var tooltip = plugins.tooltip = plugins.tooltip || {};
    tooltip.callbacks = {
        label: function(context) { return '$' + Math.round(context.parsed.y); }
    };
}
new Chart(canvas.getContext('2d'), config);
"#;

const TABLE_BODY: &str = r#"
jQuery('#' + __ID__).tablesorter(JSON.parse(__OPTIONS__));
"#;

const TOOLTIP_BODY: &str = r#"
[].slice.call(document.querySelectorAll('[data-bs-toggle="tooltip"]')).forEach(function(el) {
    new bootstrap.Tooltip(el);
});
"#;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('[CCR] JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a Rust string as a JS string literal.
pub fn js_string(raw: &str) -> String {
    serde_json::to_string(raw).unwrap_or_else(|_| "\"\"".to_string())
}

/// Build a script that waits for `ready` to hold, then runs `body` once.
pub fn when_ready(label: &str, ready: &str, body: &str) -> String {
    POLL_TEMPLATE
        .replace("__READY__", ready)
        .replace("__BODY__", body)
        .replace("__LABEL__", label)
        .replace("__MAX__", &MAX_POLLS.to_string())
}

/// Script that renders a Chart.js chart into `canvas_id`.
///
/// With `dollar_axis` the y ticks read `$<value>` and tooltips read
/// `$<rounded value>`.
pub fn chart_script(canvas_id: &str, config_json: &str, dollar_axis: bool) -> String {
    let id = js_string(canvas_id);
    let body = CHART_BODY
        .replace("__ID__", &id)
        .replace("__CONFIG__", &js_string(config_json))
        .replace("__DOLLARS__", if dollar_axis { "true" } else { "false" });
    let ready = format!(
        "typeof window.Chart !== 'undefined' && document.getElementById({})",
        id
    );
    when_ready("chart", &ready, &body)
}

/// Render a chart, replacing any chart already drawn on the canvas.
pub fn render_chart(canvas_id: &str, config_json: &str, dollar_axis: bool) {
    call_js(&chart_script(canvas_id, config_json, dollar_axis));
}

/// Script that attaches jQuery tablesorter to `table_id`.
pub fn table_sorter_script(table_id: &str, options_json: &str) -> String {
    let id = js_string(table_id);
    let body = TABLE_BODY
        .replace("__ID__", &id)
        .replace("__OPTIONS__", &js_string(options_json));
    let ready = format!(
        "window.jQuery && jQuery.fn && jQuery.fn.tablesorter && document.getElementById({})",
        id
    );
    when_ready("tablesorter", &ready, &body)
}

pub fn init_table_sorter(table_id: &str, options_json: &str) {
    call_js(&table_sorter_script(table_id, options_json));
}

/// Enable Bootstrap tooltips on every `[data-bs-toggle="tooltip"]`.
pub fn enable_tooltips() {
    call_js(&when_ready(
        "tooltips",
        "typeof window.bootstrap !== 'undefined' && bootstrap.Tooltip",
        TOOLTIP_BODY,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_escapes_quotes() {
        assert_eq!(js_string("valueChart"), "\"valueChart\"");
        assert_eq!(js_string("a'b\"c"), "\"a'b\\\"c\"");
    }

    #[test]
    fn chart_script_embeds_config_as_string() {
        let script = chart_script("valueChart", r#"{"type":"line"}"#, true);
        assert!(script.contains(r#"document.getElementById("valueChart")"#));
        assert!(script.contains(r#"JSON.parse("{\"type\":\"line\"}")"#));
        assert!(script.contains("if (true)"));
        assert!(script.contains("attempts >= 100"));
        assert!(!script.contains("__"));
    }

    #[test]
    fn doughnut_skips_dollar_callbacks() {
        let script = chart_script("spending-chart", "{}", false);
        assert!(script.contains("if (false)"));
    }

    #[test]
    fn table_script_waits_for_plugin() {
        let script = table_sorter_script("creditCardTable", r#"{"theme":"bootstrap"}"#);
        assert!(script.contains("jQuery.fn.tablesorter"));
        assert!(script.contains(r#"jQuery('#' + "creditCardTable")"#));
        assert!(script.contains("[CCR] tablesorter error"));
    }
}
