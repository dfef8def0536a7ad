// SPDX-License-Identifier: MPL-2.0
//! Multi-width preview.
//!
//! The selected image is rendered once per entry of a fixed width list
//! (two percentages of the available column, three pixel widths, then the
//! image's own width), each with its own magnifying lens. All instances
//! share the same zoom and lens settings; only the display width varies.

use crate::config::{PREVIEW_PERCENT_WIDTHS, PREVIEW_PIXEL_WIDTHS};
use crate::i18n::fluent::I18n;
use crate::preferences::{LensShape, MagnifierSize, Preferences, ZoomFactor};
use crate::selection::DecodedImage;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::widgets::Magnifier;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{column, image, scrollable, stack, text, Column};
use iced::{ContentFit, Element, Length, Size};

/// Padding around the preview column.
pub const PAGE_PADDING: f32 = spacing::XL;

/// One entry of the width list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayWidth {
    /// Percentage of the available column width.
    Percent(u16),
    /// Fixed width in logical pixels.
    Pixels(u32),
    /// The image's own pixel width.
    Natural,
}

impl DisplayWidth {
    /// The width list, in display order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        PREVIEW_PERCENT_WIDTHS
            .iter()
            .copied()
            .map(Self::Percent)
            .chain(PREVIEW_PIXEL_WIDTHS.iter().copied().map(Self::Pixels))
            .chain(std::iter::once(Self::Natural))
            .collect()
    }

    /// Width in logical pixels; never below one pixel.
    #[must_use]
    pub fn resolve(self, available: f32, natural: u32) -> f32 {
        let width = match self {
            Self::Percent(percent) => available * f32::from(percent) / 100.0,
            Self::Pixels(pixels) => pixels as f32,
            Self::Natural => natural as f32,
        };
        width.max(1.0)
    }

    /// Caption shown above the preview.
    pub fn label(self, i18n: &I18n) -> String {
        match self {
            Self::Percent(percent) => format!("{percent}%"),
            Self::Pixels(pixels) => pixels.to_string(),
            Self::Natural => i18n.tr("preview-natural-size"),
        }
    }
}

/// Lens configuration shared by every preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensSettings {
    pub zoom: ZoomFactor,
    pub size: MagnifierSize,
    pub shape: LensShape,
}

impl LensSettings {
    /// Rendered settings: legacy values below the option lists are raised.
    #[must_use]
    pub fn from_preferences(preferences: &Preferences) -> Self {
        Self {
            zoom: preferences.effective_zoom(),
            size: preferences.effective_magnifier_size(),
            shape: preferences.shape(),
        }
    }
}

/// One rendered preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewInstance {
    pub width: DisplayWidth,
    pub size: Size,
    pub lens: LensSettings,
}

/// Space left for previews in a window of `window_width`.
#[must_use]
pub fn available_width(window_width: f32) -> f32 {
    (window_width - PAGE_PADDING * 2.0).max(1.0)
}

/// Computes every preview for an image of `natural` pixel size.
#[must_use]
pub fn layout(natural: Size<u32>, available: f32, lens: LensSettings) -> Vec<PreviewInstance> {
    let aspect = if natural.width == 0 {
        1.0
    } else {
        natural.height as f32 / natural.width as f32
    };

    DisplayWidth::all()
        .into_iter()
        .map(|width| {
            let w = width.resolve(available, natural.width);
            PreviewInstance {
                width,
                size: Size::new(w, (w * aspect).max(1.0)),
                lens,
            }
        })
        .collect()
}

/// The scrollable preview column for `decoded`.
pub fn view<'a, Message: 'a>(
    decoded: &DecodedImage,
    preferences: &Preferences,
    window_width: f32,
    i18n: &I18n,
) -> Element<'a, Message> {
    let natural = Size::new(decoded.width(), decoded.height());
    let instances = layout(
        natural,
        available_width(window_width),
        LensSettings::from_preferences(preferences),
    );

    let previews = instances
        .into_iter()
        .map(|instance| instance_view(decoded, instance, i18n));

    scrollable(
        Column::with_children(previews)
            .spacing(spacing::LG)
            .padding(PAGE_PADDING),
    )
    .direction(Direction::Both {
        vertical: Scrollbar::new(),
        horizontal: Scrollbar::new(),
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn instance_view<'a, Message: 'a>(
    decoded: &DecodedImage,
    instance: PreviewInstance,
    i18n: &I18n,
) -> Element<'a, Message> {
    let size = instance.size;
    let picture = image(decoded.handle().clone())
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .content_fit(ContentFit::Fill);

    let lens = Magnifier::new(
        decoded.handle().clone(),
        instance.lens.zoom.value(),
        instance.lens.size.pixels() as f32,
        instance.lens.shape,
    )
    .into_element(size);

    column![
        text(instance.width.label(i18n)).size(typography::CAPTION),
        stack![picture, lens],
    ]
    .spacing(spacing::XS)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryStore;

    fn settings() -> LensSettings {
        LensSettings::from_preferences(&Preferences::default())
    }

    #[test]
    fn width_list_is_fixed_and_ordered() {
        assert_eq!(
            DisplayWidth::all(),
            vec![
                DisplayWidth::Percent(50),
                DisplayWidth::Percent(100),
                DisplayWidth::Pixels(300),
                DisplayWidth::Pixels(800),
                DisplayWidth::Pixels(1200),
                DisplayWidth::Natural,
            ]
        );
    }

    #[test]
    fn widths_resolve_against_column_and_image() {
        assert_eq!(DisplayWidth::Percent(50).resolve(1000.0, 640), 500.0);
        assert_eq!(DisplayWidth::Percent(100).resolve(1000.0, 640), 1000.0);
        assert_eq!(DisplayWidth::Pixels(800).resolve(1000.0, 640), 800.0);
        assert_eq!(DisplayWidth::Natural.resolve(1000.0, 640), 640.0);
    }

    #[test]
    fn degenerate_widths_stay_positive() {
        assert_eq!(DisplayWidth::Percent(50).resolve(0.0, 10), 1.0);
        assert_eq!(DisplayWidth::Natural.resolve(500.0, 0), 1.0);
    }

    #[test]
    fn labels_match_width_entries() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Default::default());
        let labels: Vec<String> = DisplayWidth::all()
            .into_iter()
            .map(|width| width.label(&i18n))
            .collect();
        assert_eq!(labels, ["50%", "100%", "300", "800", "1200", "Natural size"]);
    }

    #[test]
    fn layout_yields_six_instances_sharing_lens_settings() {
        let instances = layout(Size::new(640, 480), 1000.0, settings());

        assert_eq!(instances.len(), 6);
        assert!(instances.iter().all(|instance| instance.lens == settings()));
    }

    #[test]
    fn layout_keeps_aspect_ratio() {
        let instances = layout(Size::new(400, 200), 1000.0, settings());
        for instance in instances {
            assert!((instance.size.height * 2.0 - instance.size.width).abs() < 1e-3);
        }
    }

    #[test]
    fn lens_settings_use_effective_values() {
        let store = MemoryStore::with_entries([
            ("zoom-local-storage", "0.01"),
            ("mg-zoom-local-storage", "10"),
            ("mg-shape-local-storage", "square"),
        ]);
        let lens = LensSettings::from_preferences(&Preferences::load(&store));

        assert_eq!(lens.zoom, ZoomFactor::new(0.1));
        assert_eq!(lens.size, MagnifierSize::new(50));
        assert_eq!(lens.shape, LensShape::Square);
    }

    #[test]
    fn available_width_subtracts_padding() {
        assert_eq!(available_width(1280.0), 1280.0 - PAGE_PADDING * 2.0);
        assert_eq!(available_width(10.0), 1.0);
    }
}
