use crate::view::TileView;

/// Hover tooltip. Content is kept when hidden so the fade-out still shows it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    pub visible: bool,
    pub lines: Vec<String>,
    pub value: String,
    pub left: f64,
    pub top: f64,
}

impl TooltipState {
    pub fn show(tile: &TileView, page_x: f64, page_y: f64, offset_x: f64) -> Self {
        let value = tile.value.to_string();
        Self {
            visible: true,
            lines: vec![tile.name.clone(), tile.category.clone(), value.clone()],
            value,
            left: page_x + offset_x,
            top: page_y,
        }
    }

    pub fn hidden(&self) -> Self {
        Self {
            visible: false,
            ..self.clone()
        }
    }

    pub fn style(&self, fade_ms: u32) -> String {
        let (visibility, opacity) = if self.visible { ("visible", "0.92") } else { ("hidden", "0") };
        format!(
            "position:absolute; left:{}px; top:{}px; visibility:{visibility}; opacity:{opacity}; \
             transition:opacity {fade_ms}ms, visibility {fade_ms}ms; pointer-events:none; \
             background:rgba(22,27,34,0.95); color:#e6edf3; border:1px solid #30363d; \
             border-radius:6px; padding:6px 10px; font-size:12px; line-height:1.4;",
            self.left, self.top
        )
    }
}
