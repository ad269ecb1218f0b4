//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The view binds to these fields; the submission flow writes them through
//! `StorePort`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::ui::{Element, UiPort};

/// Visibility flags, current input and rendered fragments
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    pub loading: bool,
    pub results_shown: bool,
    pub error_shown: bool,
    /// Subreddit text field
    pub input: String,
    pub results_html: String,
    pub details_html: String,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

/// `UiPort` backed by the reactive store
#[derive(Clone, Copy)]
pub struct StorePort {
    store: UiStore,
}

impl StorePort {
    pub fn new(store: UiStore) -> Self {
        Self { store }
    }
}

impl UiPort for StorePort {
    fn read_input(&self) -> String {
        self.store.input().get_untracked()
    }

    fn set_visible(&self, element: Element, visible: bool) {
        match element {
            Element::Loading => self.store.loading().set(visible),
            // Details and results share one flag in the view
            Element::Details | Element::Results => self.store.results_shown().set(visible),
            Element::Error => self.store.error_shown().set(visible),
        }
    }

    fn write_markup(&self, element: Element, html: String) {
        match element {
            Element::Results => self.store.results_html().set(html),
            Element::Details => self.store.details_html().set(html),
            Element::Loading | Element::Error => {
                log::warn!("[UI] ignoring markup for {:?}", element);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_and_results_share_one_flag() {
        let store = Store::new(UiState::default());
        let port = StorePort::new(store);

        port.set_visible(Element::Details, true);
        assert!(store.results_shown().get_untracked());

        port.set_visible(Element::Results, false);
        assert!(!store.results_shown().get_untracked());
        assert!(!store.loading().get_untracked());
        assert!(!store.error_shown().get_untracked());

        port.set_visible(Element::Loading, true);
        port.set_visible(Element::Error, true);
        assert!(store.loading().get_untracked());
        assert!(store.error_shown().get_untracked());
    }

    #[test]
    fn test_markup_only_lands_in_fragments() {
        let store = Store::new(UiState::default());
        let port = StorePort::new(store);

        port.write_markup(Element::Results, "<ul></ul>".into());
        port.write_markup(Element::Details, "<section></section>".into());
        port.write_markup(Element::Loading, "<b>ignored</b>".into());
        port.write_markup(Element::Error, "<b>ignored</b>".into());

        assert_eq!(store.results_html().get_untracked(), "<ul></ul>");
        assert_eq!(store.details_html().get_untracked(), "<section></section>");
    }

    #[test]
    fn test_read_input_is_verbatim() {
        let store = Store::new(UiState::default());
        store.input().set(" pics ".to_string());
        assert_eq!(StorePort::new(store).read_input(), " pics ");
    }
}
