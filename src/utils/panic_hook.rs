use std::panic;
use leptos::logging::log;

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// Explains the panics that come from touching a signal after its page unmounted.
pub fn disposal_hint(message: &str) -> Option<&'static str> {
    if message.contains("OwnerDisposed") || message.contains("disposed") {
        Some("A toast timer, audio callback or pending request outlived its page")
    } else {
        None
    }
}

/// Forwards panics to the browser console, adding context for reactive
/// disposal panics.
pub fn set_custom_panic_hook() {
    panic::set_hook(Box::new(move |panic_info| {
        console_error_panic_hook::hook(panic_info);

        let message = panic_message(panic_info.payload());
        if let Some(hint) = disposal_hint(&message) {
            log!("[PANIC] Reactive owner disposed: {}", hint);
            if let Some(location) = panic_info.location() {
                log!("[PANIC] at {}:{}", location.file(), location.line());
            }
        }
    }));
}

/// Call in main.rs or app initialization
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disposal_hint() {
        assert!(disposal_hint("tried to access a signal: OwnerDisposed(NodeId(4v1))").is_some());
        assert!(disposal_hint("index out of bounds").is_none());
    }

    #[test]
    fn test_panic_message_payloads() {
        let owned: Box<dyn std::any::Any + Send> = Box::new(String::from("boom"));
        assert_eq!(panic_message(&*owned), "boom");
        let borrowed: Box<dyn std::any::Any + Send> = Box::new("bang");
        assert_eq!(panic_message(&*borrowed), "bang");
        let other: Box<dyn std::any::Any + Send> = Box::new(3u8);
        assert_eq!(panic_message(&*other), "Unknown panic");
    }
}
