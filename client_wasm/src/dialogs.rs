use game_core::Prompt;
use web_sys::Window;

/// `window.confirm` / `window.alert`
pub struct BrowserPrompt {
    window: Window,
}

impl BrowserPrompt {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Prompt for BrowserPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or_else(|e| {
            log::warn!("confirm failed: {e:?}");
            false
        })
    }

    fn notify(&mut self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("alert failed: {e:?}");
        }
    }
}
