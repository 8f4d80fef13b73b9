//! Renderers that commit widget views to the terminal.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use super::{RemoteView, TextSlot, WidgetId, WidgetRenderer};

/// Prints each committed view as a logger block.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl WidgetRenderer for TerminalRenderer {
    fn update_widget(&mut self, id: WidgetId, view: &RemoteView) -> Result<()> {
        log_block_start!("Widget {}", id);
        for slot in [TextSlot::Count, TextSlot::Subtitle] {
            if let Some(text) = view.text(slot) {
                log_indented!("{}: {}", slot.id(), text);
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonLine<'a> {
    instance: WidgetId,
    #[serde(flatten)]
    view: &'a RemoteView,
}

/// Writes one JSON object per committed view.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl JsonRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> WidgetRenderer for JsonRenderer<W> {
    fn update_widget(&mut self, id: WidgetId, view: &RemoteView) -> Result<()> {
        let line = JsonLine { instance: id, view };
        serde_json::to_writer(&mut self.out, &line)
            .with_context(|| format!("Failed to write view for widget {id}"))?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::parse;

    #[test]
    fn test_json_renderer_writes_one_line_per_instance() {
        let view = RemoteView::from_state(&parse(Some(r#"{"totalStock": 3, "inboundToday": 1}"#)));
        let mut renderer = JsonRenderer::new(Vec::new());

        renderer.update_widget(WidgetId(1), &view).unwrap();
        renderer.update_widget(WidgetId(2), &view).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["instance"], 1);
        assert_eq!(first["widget_count"], "3");
        assert_eq!(first["widget_subtitle"], "总库存 · 今日入库 1");

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["instance"], 2);
    }

    #[test]
    fn test_terminal_renderer_accepts_partial_view() {
        let mut view = RemoteView::new();
        view.set_text(TextSlot::Count, "--");
        assert!(TerminalRenderer.update_widget(WidgetId(1), &view).is_ok());
    }
}
