use crate::scene::{
    node::{Node, NodeKind, TextContent},
    style::WhiteSpace,
};

/// Turn a clone of the live canvas into its export form.
///
/// - outer corner radius removed;
/// - every editing affordance (upload hint, drag grip, resize grip) hidden;
/// - every text control replaced by static text with the control's literal value and computed
///   style, whitespace preserved, keeping class, region, frame, position and transform.
pub fn prepare_capture(mut root: Node) -> Node {
    root.style.corner_radius = 0.0;
    let mut replaced = 0usize;
    root.walk_mut(&mut |node| {
        if node.role.is_some() {
            node.hide();
        }
        let text = match &node.kind {
            NodeKind::TextField(field) => {
                let mut style = field.computed_style();
                style.white_space = WhiteSpace::PreWrap;
                Some(TextContent {
                    text: field.value.clone(),
                    style,
                })
            }
            _ => None,
        };
        if let Some(text) = text {
            node.kind = NodeKind::Text(text);
            replaced += 1;
        }
    });
    tracing::trace!(replaced, "text controls replaced for capture");
    root
}

/// True when `root` holds no live text control and no visible editing affordance.
pub fn is_capture_form(root: &Node) -> bool {
    let mut ok = true;
    root.walk(&mut |node| {
        if matches!(node.kind, NodeKind::TextField(_)) {
            ok = false;
        }
        if node.role.is_some() && !node.style.is_hidden() {
            ok = false;
        }
    });
    ok
}

#[cfg(test)]
#[path = "../../tests/unit/export/capture.rs"]
mod tests;
