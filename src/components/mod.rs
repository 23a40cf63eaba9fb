//! Shared UI components

pub mod button;
pub mod icons;

pub use button::{Button, ButtonChildProps, ButtonSize, ButtonVariant};
pub use icons::{PlusIcon, Spinner, StarIcon, XIcon};
