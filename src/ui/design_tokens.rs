// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the portfolio screens and the lightbox.

## Organization

- **Palette**: Base colors
- **Opacity**: Overlay and surface alpha levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Cards, thumbnails, lightbox controls
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use folio_gallery::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::INK_900
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

    pub const WHITE: Color = Color::WHITE;
    pub const BLACK: Color = Color::BLACK;

    // Neutral ink scale used for text and surfaces
    pub const INK_900: Color = Color::from_rgb(0.07, 0.07, 0.09);
    pub const INK_700: Color = Color::from_rgb(0.22, 0.23, 0.27);
    pub const INK_400: Color = Color::from_rgb(0.45, 0.47, 0.52);
    pub const INK_200: Color = Color::from_rgb(0.82, 0.83, 0.86);
    pub const INK_100: Color = Color::from_rgb(0.93, 0.94, 0.95);

    // Accent (violet scale)
    pub const ACCENT_300: Color = Color::from_rgb(0.73, 0.64, 0.98);
    pub const ACCENT_500: Color = Color::from_rgb(0.49, 0.33, 0.93);
    pub const ACCENT_600: Color = Color::from_rgb(0.40, 0.25, 0.82);

    // Ratings and status
    pub const STAR: Color = Color::from_rgb(0.98, 0.75, 0.14);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Lightbox backdrop over the page.
    pub const BACKDROP: f32 = 0.92;

    /// Dimmed thumbnails that are not the active image.
    pub const THUMBNAIL_IDLE: f32 = 0.55;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Project grid
    pub const CARD_WIDTH: f32 = 300.0;
    pub const COVER_HEIGHT: f32 = 180.0;
    pub const CARDS_PER_ROW: usize = 3;

    // Lightbox
    pub const THUMBNAIL_WIDTH: f32 = 96.0;
    pub const THUMBNAIL_HEIGHT: f32 = 64.0;
    pub const NAV_ARROW: f32 = 48.0;
    pub const LIGHTBOX_MAX_WIDTH: f32 = 1100.0;

    // Testimonials
    pub const TESTIMONIAL_WIDTH: f32 = 640.0;
    pub const AVATAR: f32 = 56.0;

    pub const NOTICE_WIDTH: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Screen headings
    pub const TITLE_LG: f32 = 30.0;

    /// Card and lightbox titles
    pub const TITLE_MD: f32 = 20.0;

    pub const TITLE_SM: f32 = 18.0;

    /// Testimonial quotes
    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Badges, counters, tags
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
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
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::OVERLAY_STRONG && opacity::BACKDROP < 1.0);
    assert!(opacity::THUMBNAIL_IDLE > 0.0 && opacity::THUMBNAIL_IDLE < 1.0);

    assert!(sizing::CARDS_PER_ROW > 0);
    assert!(sizing::THUMBNAIL_WIDTH > sizing::THUMBNAIL_HEIGHT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);
};
