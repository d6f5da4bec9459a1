//! Notification Presenter
//!
//! Transient, color-coded notifications appended to `<body>`, auto-dismissed
//! after a fixed delay with a short slide-out. Each call creates and later
//! removes its own element, so concurrent notifications stack independently.
//! The message is inserted as a text node, never as markup.

use std::time::Duration;

use leptos::prelude::set_timeout;

const DISMISS_AFTER: Duration = Duration::from_millis(5000);
const EXIT_TRANSITION: Duration = Duration::from_millis(300);

const BASE_STYLE: &str = "position: fixed; top: 20px; right: 20px; color: white; \
     padding: 15px 20px; border-radius: 5px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); \
     z-index: 10000; max-width: 300px;";

/// Show a transient error notification
pub fn show_error(message: &str) {
    show("Error", "#dc3545", "checkout-error-notification", message);
}

/// Show a transient success notification
pub fn show_success(message: &str) {
    show("Success", "#28a745", "checkout-success-notification", message);
}

fn show(title: &'static str, color: &'static str, class: &'static str, message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(container) = document.create_element("div") else {
        return;
    };

    container.set_class_name(class);
    let _ = container.set_attribute(
        "style",
        &format!("{BASE_STYLE} background: {color}; animation: slideIn 0.3s ease-in;"),
    );

    if let Ok(heading) = document.create_element("strong") {
        heading.set_text_content(Some(title));
        let _ = container.append_child(&heading);
    }
    if let Ok(line_break) = document.create_element("br") {
        let _ = container.append_child(&line_break);
    }
    let _ = container.append_child(&document.create_text_node(message));

    let _ = body.append_child(&container);

    set_timeout(
        move || {
            let _ = container.set_attribute(
                "style",
                &format!("{BASE_STYLE} background: {color}; animation: slideOut 0.3s ease-out;"),
            );
            set_timeout(move || container.remove(), EXIT_TRANSITION);
        },
        DISMISS_AFTER,
    );
}
