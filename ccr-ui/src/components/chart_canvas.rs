//! Canvas that Chart.js renders into.

use dioxus::prelude::*;

/// Props for ChartCanvas
#[derive(Props, Clone, PartialEq)]
pub struct ChartCanvasProps {
    /// The DOM id Chart.js looks up
    pub id: String,
    /// Height of the wrapper in pixels
    #[props(default = 300)]
    pub height: u32,
}

/// A fixed-height wrapper holding the chart canvas.
///
/// Charts with `maintainAspectRatio: false` fill their parent, so the height
/// is set on the wrapper rather than on the canvas.
#[component]
pub fn ChartCanvas(props: ChartCanvasProps) -> Element {
    let style = format!("position: relative; width: 100%; height: {}px;", props.height);

    rsx! {
        div {
            style: "{style}",
            canvas { id: "{props.id}" }
        }
    }
}
