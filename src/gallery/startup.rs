use crate::domain::DEFAULT_COLOR_KEY;

/// The state of a card's color control as read from the page.
#[derive(Debug, Clone, Copy)]
pub struct ColorControl<'a> {
    pub value: &'a str,
    /// Option values in document order, placeholders included
    pub options: &'a [String],
}

/// Which gallery a card shows at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupGallery {
    pub color: String,
    /// The control had nothing selected; `color` must be written back into it.
    pub select_option: bool,
}

/// Cards without a color control show the `"default"` gallery. Cards with one
/// keep their preselected value, or take the first option with a value.
/// A control with no usable option gets no gallery.
pub fn startup_gallery(control: Option<ColorControl<'_>>) -> Option<StartupGallery> {
    let Some(control) = control else {
        return Some(StartupGallery {
            color: DEFAULT_COLOR_KEY.to_string(),
            select_option: false,
        });
    };

    if !control.value.is_empty() {
        return Some(StartupGallery {
            color: control.value.to_string(),
            select_option: false,
        });
    }

    control
        .options
        .iter()
        .find(|value| !value.is_empty())
        .map(|value| StartupGallery {
            color: value.clone(),
            select_option: true,
        })
}
