//! Tool UI registry.
//!
//! Binds tool names to the component that renders their result inside the
//! conversation. Calls for unregistered tools render nothing.

use leptos::prelude::*;
use serde_json::Value;

use crate::components::InvoicePreview;
use crate::config::INVOICE_TOOL_NAME;
use crate::models::ToolCall;

stylance::import_crate_style!(css, "src/components/tool.module.css");

/// Renderer for one tool's completed result.
pub struct ToolUi {
    pub tool_name: &'static str,
    pub render: fn(Option<Value>) -> AnyView,
}

/// All registered tool UIs.
pub const TOOL_UIS: &[ToolUi] = &[ToolUi {
    tool_name: INVOICE_TOOL_NAME,
    render: render_invoice_preview,
}];

fn render_invoice_preview(result: Option<Value>) -> AnyView {
    view! { <InvoicePreview result=result /> }.into_any()
}

/// Look up the UI registered for `tool_name`.
pub fn find_tool_ui(tool_name: &str) -> Option<&'static ToolUi> {
    TOOL_UIS.iter().find(|ui| ui.tool_name == tool_name)
}

/// Render one tool call: a spinner while pending, the registered UI after.
#[component]
pub fn ToolCallView(call: ToolCall) -> impl IntoView {
    let Some(ui) = find_tool_ui(&call.tool_name) else {
        return ().into_any();
    };

    if call.is_pending() {
        view! { <LoadingSpinner /> }.into_any()
    } else {
        (ui.render)(call.result)
    }
}

#[component]
fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class=css::spinnerWrapper role="status" aria-label="Loading">
            <div class=css::spinner></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_tool_registered() {
        let ui = find_tool_ui("create_invoice").unwrap();
        assert_eq!(ui.tool_name, INVOICE_TOOL_NAME);
    }

    #[test]
    fn test_unknown_tool() {
        assert!(find_tool_ui("get_weather").is_none());
        assert!(find_tool_ui("").is_none());
    }

    #[test]
    fn test_tool_names_unique() {
        for (i, ui) in TOOL_UIS.iter().enumerate() {
            assert!(
                TOOL_UIS[i + 1..].iter().all(|other| other.tool_name != ui.tool_name),
                "duplicate tool UI for {}",
                ui.tool_name
            );
        }
    }
}
