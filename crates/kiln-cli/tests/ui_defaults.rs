//! Status message defaults before `init_ui` runs.
//!
//! Lives in its own test binary so no other test has initialized the UI.

use kiln_cli::ui;

#[test]
fn colors_are_off_until_initialized() {
    unsafe {
        std::env::set_var("FORCE_COLOR", "1");
    }
    assert!(!ui::colors_enabled());
    ui::success("plain output");
    unsafe {
        std::env::remove_var("FORCE_COLOR");
    }
}
