//! Render-only building blocks shared by the screens.

pub mod backdrop;
pub mod button;
pub mod checkbox;
pub mod footer;
pub mod logo;
pub mod text_field;

pub use backdrop::{Backdrop, BackdropVariant, BackdropWidget};
pub use button::{ButtonWidget, LinkWidget};
pub use checkbox::CheckboxWidget;
pub use footer::Footer;
pub use logo::{Size, TidepoolLogo};
pub use text_field::{TextFieldWidget, TextFieldWidgetExt};
