//! UI State Controller
//!
//! Visibility toggles and input access on top of an abstract UI port, so the
//! submission flow runs the same against the live page and against tests.

/// Page regions the controller can show, hide or fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Loading,
    Details,
    Results,
    Error,
}

/// Capabilities the controller needs from the page
pub trait UiPort {
    /// Current value of the subreddit text field
    fn read_input(&self) -> String;

    fn set_visible(&self, element: Element, visible: bool);

    /// Replace the markup inside `element`
    fn write_markup(&self, element: Element, html: String);
}

pub struct UiController<'a, P: UiPort> {
    port: &'a P,
}

impl<'a, P: UiPort> UiController<'a, P> {
    pub fn new(port: &'a P) -> Self {
        Self { port }
    }

    pub fn get_subreddit_input(&self) -> String {
        self.port.read_input()
    }

    /// True for any non-empty value; whitespace is not trimmed
    pub fn check_subreddit_input(&self) -> bool {
        !self.port.read_input().is_empty()
    }

    pub fn trigger_loading(&self, show: bool) {
        self.port.set_visible(Element::Loading, show);
    }

    /// Details and results always move together
    pub fn trigger_display_results(&self, show: bool) {
        self.port.set_visible(Element::Details, show);
        self.port.set_visible(Element::Results, show);
    }

    pub fn trigger_error(&self, show: bool) {
        self.port.set_visible(Element::Error, show);
    }

    pub fn render_results(&self, html: String) {
        self.port.write_markup(Element::Results, html);
    }

    pub fn render_details(&self, html: String) {
        self.port.write_markup(Element::Details, html);
    }
}


#[cfg(test)]
mod tests {
    use super::recording::RecordingPort;
    use super::*;

    #[test]
    fn test_check_subreddit_input() {
        assert!(!UiController::new(&RecordingPort::with_input("")).check_subreddit_input());
        assert!(UiController::new(&RecordingPort::with_input("funny")).check_subreddit_input());
        assert!(UiController::new(&RecordingPort::with_input(" ")).check_subreddit_input());
    }

    #[test]
    fn test_get_subreddit_input_is_verbatim() {
        let port = RecordingPort::with_input("  rust ");
        assert_eq!(UiController::new(&port).get_subreddit_input(), "  rust ");
    }

    #[test]
    fn test_display_results_toggles_both() {
        let port = RecordingPort::default();
        let ui = UiController::new(&port);

        ui.trigger_display_results(true);
        assert!(port.is_visible(Element::Details));
        assert!(port.is_visible(Element::Results));

        ui.trigger_display_results(false);
        assert!(!port.is_visible(Element::Details));
        assert!(!port.is_visible(Element::Results));
    }

    #[test]
    fn test_toggles_are_idempotent() {
        let port = RecordingPort::default();
        let ui = UiController::new(&port);

        ui.trigger_loading(true);
        ui.trigger_loading(true);
        assert!(port.is_visible(Element::Loading));

        ui.trigger_error(true);
        ui.trigger_error(false);
        ui.trigger_error(false);
        assert!(!port.is_visible(Element::Error));
        assert!(port.is_visible(Element::Loading));
    }
}
