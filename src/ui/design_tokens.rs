// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing, size, and radius used by the interface.

## Organization

- **Palette**: Base colors, including the accent of each floating control
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_loupe::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_500: Color = Color::from_rgb(0.62, 0.62, 0.62);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Control accents
    pub const TEAL_300: Color = Color::from_rgb(0.302, 0.714, 0.675);
    pub const ORANGE_300: Color = Color::from_rgb(1.0, 0.718, 0.302);
    pub const CYAN_300: Color = Color::from_rgb(0.302, 0.816, 0.882);
    pub const CYAN_400: Color = Color::from_rgb(0.149, 0.776, 0.855);
    pub const RED_300: Color = Color::from_rgb(0.898, 0.451, 0.451);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - dialogs and notices
    pub const SURFACE: f32 = 0.97;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 40.0; // 5 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Floating action button diameter.
    pub const FAB: f32 = 56.0;

    /// Glyph drawn inside the shape toggle.
    pub const ICON_MD: f32 = 24.0;

    /// Decoding spinner.
    pub const SPINNER: f32 = 48.0;

    /// Width of a picker option button.
    pub const PICKER_OPTION: f32 = 64.0;

    /// Maximum width of the picker dialog.
    pub const DIALOG_MAX_WIDTH: f32 = 560.0;

    /// Maximum width of a notice.
    pub const NOTICE_MAX_WIDTH: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Dialog titles
    pub const TITLE_MD: f32 = 20.0;

    /// Drop overlay message
    pub const TITLE_LG: f32 = 30.0;

    /// Picker options
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels
    pub const BODY: f32 = 14.0;

    /// Tooltips
    pub const BODY_SM: f32 = 13.0;

    /// Values under the control icons, preview captions
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Outlined buttons
    pub const WIDTH_SM: f32 = 1.0;

    /// Emphasis borders
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::FAB > sizing::ICON_MD);
    assert!(sizing::SPINNER > sizing::ICON_MD);
    assert!(sizing::DIALOG_MAX_WIDTH > sizing::PICKER_OPTION);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn control_accents_are_distinct() {
        let accents = [
            palette::TEAL_300,
            palette::ORANGE_300,
            palette::CYAN_300,
            palette::RED_300,
        ];
        for (i, a) in accents.iter().enumerate() {
            for b in &accents[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
