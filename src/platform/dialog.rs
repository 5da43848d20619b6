use list_keeper_core::Interaction;

/// `window.prompt` / `window.confirm`
pub struct BrowserDialogs;

impl Interaction for BrowserDialogs {
    fn prompt_text(&mut self, message: &str, default: Option<&str>) -> Option<String> {
        let window = web_sys::window()?;
        let answer = match default {
            Some(default) => window.prompt_with_message_and_default(message, default),
            None => window.prompt_with_message(message),
        };
        answer.ok().flatten()
    }

    fn confirm(&mut self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
