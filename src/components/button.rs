//! Reusable button component

use dioxus::prelude::*;
use tailwind_fuse::tw_merge;

use crate::components::icons::Spinner;

/// Base utility classes shared by every button regardless of variant or size.
const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0 outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive";

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Primary background - the standard action button
    #[default]
    Default,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Default => "bg-primary-400 text-primary-foreground hover:bg-white/9",
        }
    }

    /// Name used for the `data-variant` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
        }
    }
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    /// Standard height and padding
    #[default]
    Default,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            Self::Default => "h-9 px-4 py-2 has-[>svg]:px-3",
        }
    }

    /// Name used for the `data-size` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
        }
    }
}

/// Merge the base, variant, and size fragments with caller overrides.
/// Later conflicting utilities win, so caller classes override built-ins.
fn resolved_class(variant: ButtonVariant, size: ButtonSize, class: Option<&str>) -> String {
    tw_merge!(
        BUTTON_BASE,
        variant.class(),
        size.class(),
        class.unwrap_or("")
    )
}

/// Computed attributes handed to an `as_child` delegate. The delegate must
/// render exactly one element and apply these to it; the button itself
/// renders no wrapper in that mode.
#[derive(Clone, PartialEq, Debug)]
pub struct ButtonChildProps {
    /// Fully merged utility class string
    pub class: String,
    /// Resolved variant name, for a `data-variant` attribute
    pub data_variant: &'static str,
    /// Resolved size name, for a `data-size` attribute
    pub data_size: &'static str,
    /// Effective disabled state (`disabled || loading`)
    pub disabled: bool,
}

/// Styled button with variant-driven classes, a loading state, and an
/// optional leading icon.
///
/// `loading` forces the disabled state and replaces the icon with a spinner;
/// the spinner and the icon are never shown together. Caller classes are
/// merged last, so a conflicting utility (say a background color) overrides
/// the built-in one. Supply `as_child` to skip the `button` element entirely
/// and render the computed attributes into a caller-provided element.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    /// Leading icon, hidden while loading
    #[props(default)]
    icon: Option<Element>,
    #[props(default)] class: Option<String>,
    /// Render delegate replacing the button's own element
    #[props(default)]
    as_child: Option<Callback<ButtonChildProps, Element>>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)] onmousedown: Option<EventHandler<MouseEvent>>,
    #[props(extends = button, extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;
    let class = resolved_class(variant, size, class.as_deref());

    if let Some(delegate) = as_child {
        return delegate.call(ButtonChildProps {
            class,
            data_variant: variant.as_str(),
            data_size: size.as_str(),
            disabled: is_disabled,
        });
    }

    // Spinner wins over the icon when both would apply.
    let leading = if loading {
        Some(rsx! {
            Spinner {}
        })
    } else {
        icon.map(|icon| {
            rsx! {
                span { class: "mr-1", {icon} }
            }
        })
    };

    rsx! {
        button {
            class: "{class}",
            "data-slot": "button",
            "data-variant": variant.as_str(),
            "data-size": size.as_str(),
            disabled: is_disabled,
            aria_disabled: if is_disabled { Some("true") } else { None },
            onmousedown: move |e| {
                if let Some(handler) = onmousedown {
                    handler.call(e);
                }
            },
            onclick: move |e| {
                if !is_disabled {
                    if let Some(handler) = onclick {
                        handler.call(e);
                    }
                }
            },
            ..attributes,
            {leading}
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_contains_base_variant_and_size_fragments() {
        let class = resolved_class(ButtonVariant::Default, ButtonSize::Default, None);
        assert!(class.contains("inline-flex"));
        assert!(class.contains("bg-primary-400"));
        assert!(class.contains("h-9"));
    }

    #[test]
    fn omitted_variant_and_size_fall_back_to_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
        assert_eq!(ButtonSize::default(), ButtonSize::Default);

        let fallback = resolved_class(ButtonVariant::default(), ButtonSize::default(), None);
        let explicit = resolved_class(ButtonVariant::Default, ButtonSize::Default, None);
        assert_eq!(fallback, explicit);
    }

    #[test]
    fn caller_classes_win_over_conflicting_utilities() {
        let class = resolved_class(
            ButtonVariant::Default,
            ButtonSize::Default,
            Some("bg-red-500 h-10"),
        );
        assert!(class.contains("bg-red-500"));
        assert!(!class.contains("bg-primary-400"));
        assert!(class.contains("h-10"));
        assert!(!class.contains("h-9"));
    }

    #[test]
    fn non_conflicting_caller_classes_are_appended() {
        let class = resolved_class(ButtonVariant::Default, ButtonSize::Default, Some("w-full"));
        assert!(class.contains("w-full"));
        assert!(class.contains("bg-primary-400"));
        assert!(class.contains("h-9"));
    }

    #[test]
    fn variant_and_size_names_resolve() {
        assert_eq!(ButtonVariant::Default.as_str(), "default");
        assert_eq!(ButtonSize::Default.as_str(), "default");
    }
}
