//! Concrete popups of the editor.
pub mod alert;
pub mod choice;

pub use crate::components::popup::{
    PopupComponent, centered_rect_fixed, draw_popup_frame, render_backdrop,
};
pub use alert::AlertPopup;
pub use choice::ChoicePopup;
