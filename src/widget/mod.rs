//! Widget host: refreshes widget instances from the stored snapshot.
//!
//! This is the thin adapter between the host platform's update callback and
//! the pure snapshot parser. For every instance id it reads the raw value,
//! parses it, fills the two text slots of a [`RemoteView`] and hands the view
//! to a [`WidgetRenderer`]. Nothing is cached between refreshes.

pub mod renderers;

use anyhow::Result;
use serde::Serialize;
use std::fmt;

use crate::common::constants::{SLOT_COUNT_ID, SLOT_SUBTITLE_ID, WIDGET_DATA_KEY};
use crate::snapshot::{DisplayState, SnapshotRecord};
use crate::store::PreferenceStore;

pub use renderers::{JsonRenderer, TerminalRenderer};

/// Identifier of one placed widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct WidgetId(pub u32);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Text slots of the widget layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSlot {
    /// Large total stock count
    Count,
    /// Label plus today's inbound count
    Subtitle,
}

impl TextSlot {
    /// Layout id of the slot.
    pub fn id(&self) -> &'static str {
        match self {
            TextSlot::Count => SLOT_COUNT_ID,
            TextSlot::Subtitle => SLOT_SUBTITLE_ID,
        }
    }
}

/// Pending text updates for one widget instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemoteView {
    #[serde(rename = "widget_count", skip_serializing_if = "Option::is_none")]
    count: Option<String>,
    #[serde(rename = "widget_subtitle", skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
}

impl RemoteView {
    pub fn new() -> Self {
        Self::default()
    }

    /// View with both slots filled from a display state.
    pub fn from_state(state: &DisplayState) -> Self {
        let mut view = Self::new();
        view.set_text(TextSlot::Count, &state.total_stock);
        view.set_text(TextSlot::Subtitle, &state.inbound_subtitle);
        view
    }

    pub fn set_text(&mut self, slot: TextSlot, text: &str) {
        let target = match slot {
            TextSlot::Count => &mut self.count,
            TextSlot::Subtitle => &mut self.subtitle,
        };
        *target = Some(text.to_string());
    }

    pub fn text(&self, slot: TextSlot) -> Option<&str> {
        match slot {
            TextSlot::Count => self.count.as_deref(),
            TextSlot::Subtitle => self.subtitle.as_deref(),
        }
    }
}

/// Commits a view to one widget instance.
#[cfg_attr(test, mockall::automock)]
pub trait WidgetRenderer {
    fn update_widget(&mut self, id: WidgetId, view: &RemoteView) -> Result<()>;
}

/// Outcome of refreshing a set of widget instances.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RefreshReport {
    pub updated: Vec<WidgetId>,
    pub failed: Vec<(WidgetId, String)>,
}

impl RefreshReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Drives widget refreshes against a store and a renderer.
pub struct WidgetHost<S, R> {
    store: S,
    renderer: R,
}

impl<S: PreferenceStore, R: WidgetRenderer> WidgetHost<S, R> {
    pub fn new(store: S, renderer: R) -> Self {
        Self { store, renderer }
    }

    /// Refresh every listed instance.
    ///
    /// A failed commit is recorded and the remaining instances still refresh.
    pub fn on_update(&mut self, ids: &[WidgetId]) -> RefreshReport {
        let mut report = RefreshReport::default();

        for &id in ids {
            match self.update_app_widget(id) {
                Ok(_) => report.updated.push(id),
                Err(e) => {
                    log_error!("Failed to update widget {}: {e:#}", id);
                    report.failed.push((id, format!("{e:#}")));
                }
            }
        }

        report
    }

    /// Refresh a single instance and return what it now shows.
    pub fn update_app_widget(&mut self, id: WidgetId) -> Result<DisplayState> {
        let record = self.snapshot_record();
        if record.is_empty() {
            log_debug!("Widget {}: no usable snapshot, showing placeholder", id);
        }

        let state = DisplayState::from_record(&record);
        let view = RemoteView::from_state(&state);
        self.renderer.update_widget(id, &view)?;
        Ok(state)
    }

    /// Current display state without rendering anything.
    pub fn display_state(&self) -> DisplayState {
        DisplayState::from_record(&self.snapshot_record())
    }

    /// Decoded snapshot as currently stored.
    pub fn snapshot_record(&self) -> SnapshotRecord {
        SnapshotRecord::decode(self.read_snapshot().as_deref())
    }

    // A store that cannot be read renders the same as an empty one
    fn read_snapshot(&self) -> Option<String> {
        match self.store.get(WIDGET_DATA_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                log_warning!("Could not read widget data: {e:#}");
                None
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::constants::STOCK_SENTINEL;
    use crate::common::constants::test_constants::*;
    use crate::store::MemoryPreferences;
    use mockall::predicate::*;

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            anyhow::bail!("disk on fire")
        }
        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            anyhow::bail!("disk on fire")
        }
        fn remove(&self, _key: &str) -> Result<()> {
            anyhow::bail!("disk on fire")
        }
    }

    fn view(count: &str, inbound: &str) -> RemoteView {
        RemoteView::from_state(&DisplayState {
            total_stock: count.to_string(),
            inbound_subtitle: format!("总库存 · 今日入库 {inbound}"),
        })
    }

    #[test]
    fn test_refreshes_every_instance_with_parsed_snapshot() {
        let store = MemoryPreferences::with_entry(WIDGET_DATA_KEY, TEST_SNAPSHOT_JSON);
        let mut renderer = MockWidgetRenderer::new();
        for id in [3, 7] {
            renderer
                .expect_update_widget()
                .with(eq(WidgetId(id)), eq(view("152", "12")))
                .times(1)
                .returning(|_, _| Ok(()));
        }

        let mut host = WidgetHost::new(store, renderer);
        let report = host.on_update(&[WidgetId(3), WidgetId(7)]);

        assert!(report.is_success());
        assert_eq!(report.updated, vec![WidgetId(3), WidgetId(7)]);
    }

    #[test]
    fn test_empty_store_renders_placeholder() {
        let mut renderer = MockWidgetRenderer::new();
        renderer
            .expect_update_widget()
            .with(eq(WidgetId(1)), eq(view(STOCK_SENTINEL, "0")))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut host = WidgetHost::new(MemoryPreferences::new(), renderer);
        let state = host.update_app_widget(WidgetId(1)).unwrap();
        assert!(state.is_placeholder());
    }

    #[test]
    fn test_unreadable_store_renders_placeholder() {
        let mut renderer = MockWidgetRenderer::new();
        renderer
            .expect_update_widget()
            .with(eq(WidgetId(1)), eq(view(STOCK_SENTINEL, "0")))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut host = WidgetHost::new(FailingStore, renderer);
        let report = host.on_update(&[WidgetId(1)]);
        assert!(report.is_success());
    }

    #[test]
    fn test_failed_commit_does_not_stop_other_instances() {
        let store = MemoryPreferences::with_entry(WIDGET_DATA_KEY, r#"{"inboundToday": 7}"#);
        let mut renderer = MockWidgetRenderer::new();
        renderer
            .expect_update_widget()
            .with(eq(WidgetId(1)), always())
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("instance gone")));
        renderer
            .expect_update_widget()
            .with(eq(WidgetId(2)), eq(view("0", "7")))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut host = WidgetHost::new(store, renderer);
        let report = host.on_update(&[WidgetId(1), WidgetId(2)]);

        assert!(!report.is_success());
        assert_eq!(report.updated, vec![WidgetId(2)]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, WidgetId(1));
        assert!(report.failed[0].1.contains("instance gone"));
    }

    #[test]
    fn test_no_instances_is_a_noop() {
        let renderer = MockWidgetRenderer::new();
        let mut host = WidgetHost::new(MemoryPreferences::new(), renderer);
        let report = host.on_update(&[]);
        assert!(report.is_success());
        assert!(report.updated.is_empty());
    }

    #[test]
    fn test_display_state_reads_current_snapshot() {
        let store = MemoryPreferences::new();
        let host = WidgetHost::new(store, MockWidgetRenderer::new());
        assert!(host.display_state().is_placeholder());

        host.store().set(WIDGET_DATA_KEY, TEST_SNAPSHOT_JSON).unwrap();
        assert_eq!(host.display_state().total_stock, "152");
    }

    #[test]
    fn test_snapshot_record_keeps_last_updated() {
        let raw = format!(r#"{{"totalStock": 3, "lastUpdated": "{TEST_LAST_UPDATED}"}}"#);
        let host = WidgetHost::new(
            MemoryPreferences::with_entry(WIDGET_DATA_KEY, &raw),
            MockWidgetRenderer::new(),
        );

        match host.snapshot_record() {
            SnapshotRecord::Decoded(snapshot) => {
                assert_eq!(snapshot.total_stock, Some(3));
                assert_eq!(snapshot.last_updated.as_deref(), Some(TEST_LAST_UPDATED));
            }
            other => panic!("expected decoded record, got {other:?}"),
        }

        let host = WidgetHost::new(FailingStore, MockWidgetRenderer::new());
        assert_eq!(host.snapshot_record(), SnapshotRecord::Absent);
    }

    #[test]
    fn test_remote_view_slots() {
        let mut view = RemoteView::new();
        assert_eq!(view.text(TextSlot::Count), None);
        view.set_text(TextSlot::Count, "9");
        assert_eq!(view.text(TextSlot::Count), Some("9"));
        assert_eq!(view.text(TextSlot::Subtitle), None);
        assert_eq!(TextSlot::Count.id(), "widget_count");
        assert_eq!(TextSlot::Subtitle.id(), "widget_subtitle");
    }
}
