use crate::{
    layout::model::{BlockId, BlockRect},
    templates::catalog::FlyerTemplate,
};

const fn r(x: f64, y: f64, w: f64, h: f64) -> BlockRect {
    BlockRect::from_const(x, y, w, h)
}

/// Compiled-in default rectangle for a block. The match is exhaustive, so every template has a
/// rectangle for every block.
pub fn default_rect(template: FlyerTemplate, block: BlockId) -> BlockRect {
    match (template, block) {
        (FlyerTemplate::Divine, BlockId::Header) => r(40.0, 40.0, 520.0, 150.0),
        (FlyerTemplate::Divine, BlockId::Logo) => r(470.0, 700.0, 90.0, 90.0),
        (FlyerTemplate::Divine, BlockId::Quote) => r(60.0, 230.0, 480.0, 200.0),
        (FlyerTemplate::Divine, BlockId::DateTime) => r(60.0, 470.0, 260.0, 110.0),
        (FlyerTemplate::Divine, BlockId::Location) => r(60.0, 610.0, 380.0, 90.0),

        (FlyerTemplate::Hope, BlockId::Header) => r(40.0, 60.0, 520.0, 150.0),
        (FlyerTemplate::Hope, BlockId::Logo) => r(40.0, 720.0, 90.0, 90.0),
        (FlyerTemplate::Hope, BlockId::Quote) => r(80.0, 260.0, 440.0, 190.0),
        (FlyerTemplate::Hope, BlockId::DateTime) => r(320.0, 490.0, 240.0, 110.0),
        (FlyerTemplate::Hope, BlockId::Location) => r(80.0, 640.0, 440.0, 80.0),

        (FlyerTemplate::Fire, BlockId::Header) => r(40.0, 30.0, 520.0, 160.0),
        (FlyerTemplate::Fire, BlockId::Logo) => r(255.0, 730.0, 90.0, 90.0),
        (FlyerTemplate::Fire, BlockId::Quote) => r(50.0, 220.0, 500.0, 210.0),
        (FlyerTemplate::Fire, BlockId::DateTime) => r(50.0, 470.0, 500.0, 100.0),
        (FlyerTemplate::Fire, BlockId::Location) => r(50.0, 600.0, 500.0, 90.0),
    }
}

/// Default rectangle for a template id, falling back to the first flyer template.
pub fn default_rect_for_id(template: &str, block: BlockId) -> BlockRect {
    default_rect(FlyerTemplate::resolve(template), block)
}

#[cfg(test)]
#[path = "../../tests/unit/templates/defaults.rs"]
mod tests;
