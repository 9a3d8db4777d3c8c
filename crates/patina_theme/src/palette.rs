//! Static color palette
//!
//! The Material shade table the default theme draws from, exposed both as
//! constants (`palette::indigo::P500`) and through a by-name [`lookup`] used
//! by the config layer. Shade labels follow the classic table: `P50`-`P900`
//! primaries plus `A100`-`A700` accents; `gray` additionally spans `P0`
//! (white) to `P1000` (black).

use std::sync::OnceLock;

use patina_core::Color;
use rustc_hash::FxHashMap;

/// Standard toolkit light gray (the page-control indicator default).
pub const LIGHT_GRAY: Color = Color::rgb(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);

/// Facebook brand blue.
pub const FACEBOOK_BLUE: Color = Color::from_packed_rgba(0x3B5998FF);

/// Twitter brand blue.
pub const TWITTER_BLUE: Color = Color::from_packed_rgba(0x00ACEDFF);

/// LinkedIn brand blue.
pub const LINKED_IN_BLUE: Color = Color::from_packed_rgba(0x0077B5FF);

/// Material red
pub mod red {
    use patina_core::Color;

    pub const P50: Color = Color::from_packed_rgba(0xFDE0DCFF);
    pub const P100: Color = Color::from_packed_rgba(0xF9BDBBFF);
    pub const P200: Color = Color::from_packed_rgba(0xF69988FF);
    pub const P300: Color = Color::from_packed_rgba(0xF36C60FF);
    pub const P400: Color = Color::from_packed_rgba(0xE84E40FF);
    pub const P500: Color = Color::from_packed_rgba(0xE51C23FF);
    pub const P600: Color = Color::from_packed_rgba(0xDD191DFF);
    pub const P700: Color = Color::from_packed_rgba(0xD01716FF);
    pub const P800: Color = Color::from_packed_rgba(0xC41411FF);
    pub const P900: Color = Color::from_packed_rgba(0xB0120AFF);
    pub const A100: Color = Color::from_packed_rgba(0xFF7997FF);
    pub const A200: Color = Color::from_packed_rgba(0xFF5177FF);
    pub const A400: Color = Color::from_packed_rgba(0xFF2D6FFF);
    pub const A700: Color = Color::from_packed_rgba(0xE00032FF);

    pub(super) const SHADES: &[(&str, Color)] = &[
        ("P50", P50), ("P100", P100), ("P200", P200), ("P300", P300), ("P400", P400),
        ("P500", P500), ("P600", P600), ("P700", P700), ("P800", P800), ("P900", P900),
        ("A100", A100), ("A200", A200), ("A400", A400), ("A700", A700),
    ];
}

/// Material pink
pub mod pink {
    use patina_core::Color;

    pub const P50: Color = Color::from_packed_rgba(0xFCE4ECFF);
    pub const P100: Color = Color::from_packed_rgba(0xF8BBD0FF);
    pub const P200: Color = Color::from_packed_rgba(0xF48FB1FF);
    pub const P300: Color = Color::from_packed_rgba(0xF06292FF);
    pub const P400: Color = Color::from_packed_rgba(0xEC407AFF);
    pub const P500: Color = Color::from_packed_rgba(0xE91E63FF);
    pub const P600: Color = Color::from_packed_rgba(0xD81B60FF);
    pub const P700: Color = Color::from_packed_rgba(0xC2185BFF);
    pub const P800: Color = Color::from_packed_rgba(0xAD1457FF);
    pub const P900: Color = Color::from_packed_rgba(0x880E4FFF);
    pub const A100: Color = Color::from_packed_rgba(0xFF80ABFF);
    pub const A200: Color = Color::from_packed_rgba(0xFF4081FF);
    pub const A400: Color = Color::from_packed_rgba(0xF50057FF);
    pub const A700: Color = Color::from_packed_rgba(0xC51162FF);

    pub(super) const SHADES: &[(&str, Color)] = &[
        ("P50", P50), ("P100", P100), ("P200", P200), ("P300", P300), ("P400", P400),
        ("P500", P500), ("P600", P600), ("P700", P700), ("P800", P800), ("P900", P900),
        ("A100", A100), ("A200", A200), ("A400", A400), ("A700", A700),
    ];
}

/// Material purple
pub mod purple {
    use patina_core::Color;

    pub const P50: Color = Color::from_packed_rgba(0xF3E5F5FF);
    pub const P100: Color = Color::from_packed_rgba(0xE1BEE7FF);
    pub const P200: Color = Color::from_packed_rgba(0xCE93D8FF);
    pub const P300: Color = Color::from_packed_rgba(0xBA68C8FF);
    pub const P400: Color = Color::from_packed_rgba(0xAB47BCFF);
    pub const P500: Color = Color::from_packed_rgba(0x9C27B0FF);
    pub const P600: Color = Color::from_packed_rgba(0x8E24AAFF);
    pub const P700: Color = Color::from_packed_rgba(0x7B1FA2FF);
    pub const P800: Color = Color::from_packed_rgba(0x6A1B9AFF);
    pub const P900: Color = Color::from_packed_rgba(0x4A148CFF);
    pub const A100: Color = Color::from_packed_rgba(0xEA80FCFF);
    pub const A200: Color = Color::from_packed_rgba(0xE040FBFF);
    pub const A400: Color = Color::from_packed_rgba(0xD500F9FF);
    pub const A700: Color = Color::from_packed_rgba(0xAA00FFFF);

    pub(super) const SHADES: &[(&str, Color)] = &[
        ("P50", P50), ("P100", P100), ("P200", P200), ("P300", P300), ("P400", P400),
        ("P500", P500), ("P600", P600), ("P700", P700), ("P800", P800), ("P900", P900),
        ("A100", A100), ("A200", A200), ("A400", A400), ("A700", A700),
    ];
}

/// Material deep purple
pub mod deep_purple {
    use patina_core::Color;

    pub const P50: Color = Color::from_packed_rgba(0xEDE7F6FF);
    pub const P100: Color = Color::from_packed_rgba(0xD1C4E9FF);
    pub const P200: Color = Color::from_packed_rgba(0xB39DDBFF);
    pub const P300: Color = Color::from_packed_rgba(0x9575CDFF);
    pub const P400: Color = Color::from_packed_rgba(0x7E57C2FF);
    pub const P500: Color = Color::from_packed_rgba(0x673AB7FF);
    pub const P600: Color = Color::from_packed_rgba(0x5E35B1FF);
    pub const P700: Color = Color::from_packed_rgba(0x512DA8FF);
    pub const P800: Color = Color::from_packed_rgba(0x4527A0FF);
    pub const P900: Color = Color::from_packed_rgba(0x311B92FF);
    pub const A100: Color = Color::from_packed_rgba(0xB388FFFF);
    pub const A200: Color = Color::from_packed_rgba(0x7C4DFFFF);
    pub const A400: Color = Color::from_packed_rgba(0x651FFFFF);
    pub const A700: Color = Color::from_packed_rgba(0x6200EAFF);

    pub(super) const SHADES: &[(&str, Color)] = &[
        ("P50", P50), ("P100", P100), ("P200", P200), ("P300", P300), ("P400", P400),
        ("P500", P500), ("P600", P600), ("P700", P700), ("P800", P800), ("P900", P900),
        ("A100", A100), ("A200", A200), ("A400", A400), ("A700", A700),
    ];
}

/// Material indigo
pub mod indigo {
    use patina_core::Color;

    pub const P50: Color = Color::from_packed_rgba(0xE8EAF6FF);
    pub const P100: Color = Color::from_packed_rgba(0xC5CAE9FF);
    pub const P200: Color = Color::from_packed_rgba(0x9FA8DAFF);
    pub const P300: Color = Color::from_packed_rgba(0x7986CBFF);
    pub const P400: Color = Color::from_packed_rgba(0x5C6BC0FF);
    pub const P500: Color = Color::from_packed_rgba(0x3F51B5FF);
    pub const P600: Color = Color::from_packed_rgba(0x3949ABFF);
    pub const P700: Color = Color::from_packed_rgba(0x303F9FFF);
    pub const P800: Color = Color::from_packed_rgba(0x283593FF);
    pub const P900: Color = Color::from_packed_rgba(0x1A237EFF);
    pub const A100: Color = Color::from_packed_rgba(0x8C9EFFFF);
    pub const A200: Color = Color::from_packed_rgba(0x536DFEFF);
    pub const A400: Color = Color::from_packed_rgba(0x3D5AFEFF);
    pub const A700: Color = Color::from_packed_rgba(0x304FFEFF);

    pub(super) const SHADES: &[(&str, Color)] = &[
        ("P50", P50), ("P100", P100), ("P200", P200), ("P300", P300), ("P400", P400),
        ("P500", P500), ("P600", P600), ("P700", P700), ("P800", P800), ("P900", P900),
        ("A100", A100), ("A200", A200), ("A400", A400), ("A700", A700),
    ];
}

/// Material blue
pub mod blue {
    use patina_core::Color;

    pub const P50: Color = Color::from_packed_rgba(0xE7E9FDFF);
    pub const P100: Color = Color::from_packed_rgba(0xD0D9FFFF);
    pub const P200: Color = Color::from_packed_rgba(0xAFBFFFFF);
    pub const P300: Color = Color::from_packed_rgba(0x91A7FFFF);
    pub const P400: Color = Color::from_packed_rgba(0x738FFEFF);
    pub const P500: Color = Color::from_packed_rgba(0x5677FCFF);
    pub const P600: Color = Color::from_packed_rgba(0x4E6CEFFF);
    pub const P700: Color = Color::from_packed_rgba(0x455EDEFF);
    pub const P800: Color = Color::from_packed_rgba(0x3B50CEFF);
    pub const P900: Color = Color::from_packed_rgba(0x2A36B1FF);
    pub const A100: Color = Color::from_packed_rgba(0xA6BAFFFF);
    pub const A200: Color = Color::from_packed_rgba(0x6889FFFF);
    pub const A400: Color = Color::from_packed_rgba(0x4D73FFFF);
    pub const A700: Color = Color::from_packed_rgba(0x4D69FFFF);

    pub(super) const SHADES: &[(&str, Color)] = &[
        ("P50", P50), ("P100", P100), ("P200", P200), ("P300", P300), ("P400", P400),
        ("P500", P500), ("P600", P600), ("P700", P700), ("P800", P800), ("P900", P900),
        ("A100", A100), ("A200", A200), ("A400", A400), ("A700", A700),
    ];
}

/// Material light blue; `P500` is the default seed tint.
pub mod light_blue {
    use patina_core::Color;

    pub const P50: Color = Color::from_packed_rgba(0xE1F5FEFF);
    pub const P100: Color = Color::from_packed_rgba(0xB3E5FCFF);
    pub const P200: Color = Color::from_packed_rgba(0x81D4FAFF);
    pub const P300: Color = Color::from_packed_rgba(0x4FC3F7FF);
    pub const P400: Color = Color::from_packed_rgba(0x29B6F6FF);
    pub const P500: Color = Color::from_packed_rgba(0x03A9F4FF);
    pub const P600: Color = Color::from_packed_rgba(0x039BE5FF);
    pub const P700: Color = Color::from_packed_rgba(0x0288D1FF);
    pub const P800: Color = Color::from_packed_rgba(0x0277BDFF);
    pub const P900: Color = Color::from_packed_rgba(0x01579BFF);
    pub const A100: Color = Color::from_packed_rgba(0x80D8FFFF);
    pub const A200: Color = Color::from_packed_rgba(0x40C4FFFF);
    pub const A400: Color = Color::from_packed_rgba(0x00B0FFFF);
    pub const A700: Color = Color::from_packed_rgba(0x0091EAFF);

    pub(super) const SHADES: &[(&str, Color)] = &[
        ("P50", P50), ("P100", P100), ("P200", P200), ("P300", P300), ("P400", P400),
        ("P500", P500), ("P600", P600), ("P700", P700), ("P800", P800), ("P900", P900),
        ("A100", A100), ("A200", A200), ("A400", A400), ("A700", A700),
    ];
}

/// Material cyan
pub mod cyan {
    use patina_core::Color;

    pub const P50: Color = Color::from_packed_rgba(0xE0F7FAFF);
    pub const P100: Color = Color::from_packed_rgba(0xB2EBF2FF);
    pub const P200: Color = Color::from_packed_rgba(0x80DEEAFF);
    pub const P300: Color = Color::from_packed_rgba(0x4DD0E1FF);
    pub const P400: Color = Color::from_packed_rgba(0x26C6DAFF);
    pub const P500: Color = Color::from_packed_rgba(0x00BCD4FF);
    pub const P600: Color = Color::from_packed_rgba(0x00ACC1FF);
    pub const P700: Color = Color::from_packed_rgba(0x0097A7FF);
    pub const P800: Color = Color::from_packed_rgba(0x00838FFF);
    pub const P900: Color = Color::from_packed_rgba(0x006064FF);
    pub const A100: Color = Color::from_packed_rgba(0x84FFFFFF);
    pub const A200: Color = Color::from_packed_rgba(0x18FFFFFF);
    pub const A400: Color = Color::from_packed_rgba(0x00E5FFFF);
    pub const A700: Color = Color::from_packed_rgba(0x00B8D4FF);

    pub(super) const SHADES: &[(&str, Color)] = &[
        ("P50", P50), ("P100", P100), ("P200", P200), ("P300", P300), ("P400", P400),
        ("P500", P500), ("P600", P600), ("P700", P700), ("P800", P800), ("P900", P900),
        ("A100", A100), ("A200", A200), ("A400", A400), ("A700", A700),
    ];
}

/// Material teal
pub mod teal {
    use patina_core::Color;

    pub const P50: Color = Color::from_packed_rgba(0xE0F2F1FF);
    pub const P100: Color = Color::from_packed_rgba(0xB2DFDBFF);
    pub const P200: Color = Color::from_packed_rgba(0x80CBC4FF);
    pub const P300: Color = Color::from_packed_rgba(0x4DB6ACFF);
    pub const P400: Color = Color::from_packed_rgba(0x26A69AFF);
    pub const P500: Color = Color::from_packed_rgba(0x009688FF);
    pub const P600: Color = Color::from_packed_rgba(0x00897BFF);
    pub const P700: Color = Color::from_packed_rgba(0x00796BFF);
    pub const P800: Color = Color::from_packed_rgba(0x00695CFF);
    pub const P900: Color = Color::from_packed_rgba(0x004D40FF);
    pub const A100: Color = Color::from_packed_rgba(0xA7FFEBFF);
    pub const A200: Color = Color::from_packed_rgba(0x64FFDAFF);
    pub const A400: Color = Color::from_packed_rgba(0x1DE9B6FF);
    pub const A700: Color = Color::from_packed_rgba(0x00BFA5FF);

    pub(super) const SHADES: &[(&str, Color)] = &[
        ("P50", P50), ("P100", P100), ("P200", P200), ("P300", P300), ("P400", P400),
        ("P500", P500), ("P600", P600), ("P700", P700), ("P800", P800), ("P900", P900),
        ("A100", A100), ("A200", A200), ("A400", A400), ("A700", A700),
    ];
}

/// Material green
pub mod green {
    use patina_core::Color;

    pub const P50: Color = Color::from_packed_rgba(0xD0F8CEFF);
    pub const P100: Color = Color::from_packed_rgba(0xA3E9A4FF);
    pub const P200: Color = Color::from_packed_rgba(0x72D572FF);
    pub const P300: Color = Color::from_packed_rgba(0x42BD41FF);
    pub const P400: Color = Color::from_packed_rgba(0x2BAF2BFF);
    pub const P500: Color = Color::from_packed_rgba(0x259B24FF);
    pub const P600: Color = Color::from_packed_rgba(0x0A8F08FF);
    pub const P700: Color = Color::from_packed_rgba(0x0A7E07FF);
    pub const P800: Color = Color::from_packed_rgba(0x056F00FF);
    pub const P900: Color = Color::from_packed_rgba(0x0D5302FF);
    pub const A100: Color = Color::from_packed_rgba(0xA2F78DFF);
    pub const A200: Color = Color::from_packed_rgba(0x5AF158FF);
    pub const A400: Color = Color::from_packed_rgba(0x14E715FF);
    pub const A700: Color = Color::from_packed_rgba(0x12C700FF);

    pub(super) const SHADES: &[(&str, Color)] = &[
        ("P50", P50), ("P100", P100), ("P200", P200), ("P300", P300), ("P400", P400),
        ("P500", P500), ("P600", P600), ("P700", P700), ("P800", P800), ("P900", P900),
        ("A100", A100), ("A200", A200), ("A400", A400), ("A700", A700),
    ];
}

/// Material light green
pub mod light_green {
    use patina_core::Color;

    pub const P50: Color = Color::from_packed_rgba(0xF1F8E9FF);
    pub const P100: Color = Color::from_packed_rgba(0xDCEDC8FF);
    pub const P200: Color = Color::from_packed_rgba(0xC5E1A5FF);
    pub const P300: Color = Color::from_packed_rgba(0xAED581FF);
    pub const P400: Color = Color::from_packed_rgba(0x9CCC65FF);
    pub const P500: Color = Color::from_packed_rgba(0x8BC34AFF);
    pub const P600: Color = Color::from_packed_rgba(0x7CB342FF);
    pub const P700: Color = Color::from_packed_rgba(0x689F38FF);
    pub const P800: Color = Color::from_packed_rgba(0x558B2FFF);
    pub const P900: Color = Color::from_packed_rgba(0x33691EFF);
    pub const A100: Color = Color::from_packed_rgba(0xCCFF90FF);
    pub const A200: Color = Color::from_packed_rgba(0xB2FF59FF);
    pub const A400: Color = Color::from_packed_rgba(0x76FF03FF);
    pub const A700: Color = Color::from_packed_rgba(0x64DD17FF);

    pub(super) const SHADES: &[(&str, Color)] = &[
        ("P50", P50), ("P100", P100), ("P200", P200), ("P300", P300), ("P400", P400),
        ("P500", P500), ("P600", P600), ("P700", P700), ("P800", P800), ("P900", P900),
        ("A100", A100), ("A200", A200), ("A400", A400), ("A700", A700),
    ];
}

/// Material lime
pub mod lime {
    use patina_core::Color;

    pub const P50: Color = Color::from_packed_rgba(0xF9FBE7FF);
    pub const P100: Color = Color::from_packed_rgba(0xF0F4C3FF);
    pub const P200: Color = Color::from_packed_rgba(0xE6EE9CFF);
    pub const P300: Color = Color::from_packed_rgba(0xDCE775FF);
    pub const P400: Color = Color::from_packed_rgba(0xD4E157FF);
    pub const P500: Color = Color::from_packed_rgba(0xCDDC39FF);
    pub const P600: Color = Color::from_packed_rgba(0xC0CA33FF);
    pub const P700: Color = Color::from_packed_rgba(0xAFB42BFF);
    pub const P800: Color = Color::from_packed_rgba(0x9E9D24FF);
    pub const P900: Color = Color::from_packed_rgba(0x827717FF);
    pub const A100: Color = Color::from_packed_rgba(0xF4FF81FF);
    pub const A200: Color = Color::from_packed_rgba(0xEEFF41FF);
    pub const A400: Color = Color::from_packed_rgba(0xC6FF00FF);
    pub const A700: Color = Color::from_packed_rgba(0xAEEA00FF);

    pub(super) const SHADES: &[(&str, Color)] = &[
        ("P50", P50), ("P100", P100), ("P200", P200), ("P300", P300), ("P400", P400),
        ("P500", P500), ("P600", P600), ("P700", P700), ("P800", P800), ("P900", P900),
        ("A100", A100), ("A200", A200), ("A400", A400), ("A700", A700),
    ];
}

/// Material yellow
pub mod yellow {
    use patina_core::Color;

    pub const P50: Color = Color::from_packed_rgba(0xFFFDE7FF);
    pub const P100: Color = Color::from_packed_rgba(0xFFF9C4FF);
    pub const P200: Color = Color::from_packed_rgba(0xFFF59DFF);
    pub const P300: Color = Color::from_packed_rgba(0xFFF176FF);
    pub const P400: Color = Color::from_packed_rgba(0xFFEE58FF);
    pub const P500: Color = Color::from_packed_rgba(0xFFEB3BFF);
    pub const P600: Color = Color::from_packed_rgba(0xFDD835FF);
    pub const P700: Color = Color::from_packed_rgba(0xFBC02DFF);
    pub const P800: Color = Color::from_packed_rgba(0xF9A825FF);
    pub const P900: Color = Color::from_packed_rgba(0xF57F17FF);
    pub const A100: Color = Color::from_packed_rgba(0xFFFF8DFF);
    pub const A200: Color = Color::from_packed_rgba(0xFFFF00FF);
    pub const A400: Color = Color::from_packed_rgba(0xFFEA00FF);
    pub const A700: Color = Color::from_packed_rgba(0xFFD600FF);

    pub(super) const SHADES: &[(&str, Color)] = &[
        ("P50", P50), ("P100", P100), ("P200", P200), ("P300", P300), ("P400", P400),
        ("P500", P500), ("P600", P600), ("P700", P700), ("P800", P800), ("P900", P900),
        ("A100", A100), ("A200", A200), ("A400", A400), ("A700", A700),
    ];
}

/// Material amber
pub mod amber {
    use patina_core::Color;

    pub const P50: Color = Color::from_packed_rgba(0xFFF8E1FF);
    pub const P100: Color = Color::from_packed_rgba(0xFFECB3FF);
    pub const P200: Color = Color::from_packed_rgba(0xFFE082FF);
    pub const P300: Color = Color::from_packed_rgba(0xFFD54FFF);
    pub const P400: Color = Color::from_packed_rgba(0xFFCA28FF);
    pub const P500: Color = Color::from_packed_rgba(0xFFC107FF);
    pub const P600: Color = Color::from_packed_rgba(0xFFB300FF);
    pub const P700: Color = Color::from_packed_rgba(0xFFA000FF);
    pub const P800: Color = Color::from_packed_rgba(0xFF8F00FF);
    pub const P900: Color = Color::from_packed_rgba(0xFF6F00FF);
    pub const A100: Color = Color::from_packed_rgba(0xFFE57FFF);
    pub const A200: Color = Color::from_packed_rgba(0xFFD740FF);
    pub const A400: Color = Color::from_packed_rgba(0xFFC400FF);
    pub const A700: Color = Color::from_packed_rgba(0xFFAB00FF);

    pub(super) const SHADES: &[(&str, Color)] = &[
        ("P50", P50), ("P100", P100), ("P200", P200), ("P300", P300), ("P400", P400),
        ("P500", P500), ("P600", P600), ("P700", P700), ("P800", P800), ("P900", P900),
        ("A100", A100), ("A200", A200), ("A400", A400), ("A700", A700),
    ];
}

/// Material orange
pub mod orange {
    use patina_core::Color;

    pub const P50: Color = Color::from_packed_rgba(0xFFF3E0FF);
    pub const P100: Color = Color::from_packed_rgba(0xFFE0B2FF);
    pub const P200: Color = Color::from_packed_rgba(0xFFCC80FF);
    pub const P300: Color = Color::from_packed_rgba(0xFFB74DFF);
    pub const P400: Color = Color::from_packed_rgba(0xFFA726FF);
    pub const P500: Color = Color::from_packed_rgba(0xFF9800FF);
    pub const P600: Color = Color::from_packed_rgba(0xFB8C00FF);
    pub const P700: Color = Color::from_packed_rgba(0xF57C00FF);
    pub const P800: Color = Color::from_packed_rgba(0xEF6C00FF);
    pub const P900: Color = Color::from_packed_rgba(0xE65100FF);
    pub const A100: Color = Color::from_packed_rgba(0xFFD180FF);
    pub const A200: Color = Color::from_packed_rgba(0xFFAB40FF);
    pub const A400: Color = Color::from_packed_rgba(0xFF9100FF);
    pub const A700: Color = Color::from_packed_rgba(0xFF6D00FF);

    pub(super) const SHADES: &[(&str, Color)] = &[
        ("P50", P50), ("P100", P100), ("P200", P200), ("P300", P300), ("P400", P400),
        ("P500", P500), ("P600", P600), ("P700", P700), ("P800", P800), ("P900", P900),
        ("A100", A100), ("A200", A200), ("A400", A400), ("A700", A700),
    ];
}

/// Material deep orange
pub mod deep_orange {
    use patina_core::Color;

    pub const P50: Color = Color::from_packed_rgba(0xFBE9E7FF);
    pub const P100: Color = Color::from_packed_rgba(0xFFCCBCFF);
    pub const P200: Color = Color::from_packed_rgba(0xFFAB91FF);
    pub const P300: Color = Color::from_packed_rgba(0xFF8A65FF);
    pub const P400: Color = Color::from_packed_rgba(0xFF7043FF);
    pub const P500: Color = Color::from_packed_rgba(0xFF5722FF);
    pub const P600: Color = Color::from_packed_rgba(0xF4511EFF);
    pub const P700: Color = Color::from_packed_rgba(0xE64A19FF);
    pub const P800: Color = Color::from_packed_rgba(0xD84315FF);
    pub const P900: Color = Color::from_packed_rgba(0xBF360CFF);
    pub const A100: Color = Color::from_packed_rgba(0xFF9E80FF);
    pub const A200: Color = Color::from_packed_rgba(0xFF6E40FF);
    pub const A400: Color = Color::from_packed_rgba(0xFF3D00FF);
    pub const A700: Color = Color::from_packed_rgba(0xDD2C00FF);

    pub(super) const SHADES: &[(&str, Color)] = &[
        ("P50", P50), ("P100", P100), ("P200", P200), ("P300", P300), ("P400", P400),
        ("P500", P500), ("P600", P600), ("P700", P700), ("P800", P800), ("P900", P900),
        ("A100", A100), ("A200", A200), ("A400", A400), ("A700", A700),
    ];
}

/// Material brown (no accent shades)
pub mod brown {
    use patina_core::Color;

    pub const P50: Color = Color::from_packed_rgba(0xEFEBE9FF);
    pub const P100: Color = Color::from_packed_rgba(0xD7CCC8FF);
    pub const P200: Color = Color::from_packed_rgba(0xBCAAA4FF);
    pub const P300: Color = Color::from_packed_rgba(0xA1887FFF);
    pub const P400: Color = Color::from_packed_rgba(0x8D6E63FF);
    pub const P500: Color = Color::from_packed_rgba(0x795548FF);
    pub const P600: Color = Color::from_packed_rgba(0x6D4C41FF);
    pub const P700: Color = Color::from_packed_rgba(0x5D4037FF);
    pub const P800: Color = Color::from_packed_rgba(0x4E342EFF);
    pub const P900: Color = Color::from_packed_rgba(0x3E2723FF);

    pub(super) const SHADES: &[(&str, Color)] = &[
        ("P50", P50), ("P100", P100), ("P200", P200), ("P300", P300), ("P400", P400),
        ("P500", P500), ("P600", P600), ("P700", P700), ("P800", P800), ("P900", P900),
    ];
}

/// Material gray, extended from pure white (`P0`) to pure black (`P1000`)
pub mod gray {
    use patina_core::Color;

    pub const P0: Color = Color::from_packed_rgba(0xFFFFFFFF);
    pub const P50: Color = Color::from_packed_rgba(0xFAFAFAFF);
    pub const P100: Color = Color::from_packed_rgba(0xF5F5F5FF);
    pub const P200: Color = Color::from_packed_rgba(0xEEEEEEFF);
    pub const P300: Color = Color::from_packed_rgba(0xE0E0E0FF);
    pub const P400: Color = Color::from_packed_rgba(0xBDBDBDFF);
    pub const P500: Color = Color::from_packed_rgba(0x9E9E9EFF);
    pub const P600: Color = Color::from_packed_rgba(0x757575FF);
    pub const P700: Color = Color::from_packed_rgba(0x616161FF);
    pub const P800: Color = Color::from_packed_rgba(0x424242FF);
    pub const P900: Color = Color::from_packed_rgba(0x212121FF);
    pub const P1000: Color = Color::from_packed_rgba(0x000000FF);

    pub(super) const SHADES: &[(&str, Color)] = &[
        ("P0", P0), ("P50", P50), ("P100", P100), ("P200", P200), ("P300", P300),
        ("P400", P400), ("P500", P500), ("P600", P600), ("P700", P700), ("P800", P800),
        ("P900", P900), ("P1000", P1000),
    ];
}

/// Material blue gray (no accent shades)
pub mod blue_gray {
    use patina_core::Color;

    pub const P50: Color = Color::from_packed_rgba(0xECEFF1FF);
    pub const P100: Color = Color::from_packed_rgba(0xCFD8DCFF);
    pub const P200: Color = Color::from_packed_rgba(0xB0BEC5FF);
    pub const P300: Color = Color::from_packed_rgba(0x90A4AEFF);
    pub const P400: Color = Color::from_packed_rgba(0x78909CFF);
    pub const P500: Color = Color::from_packed_rgba(0x607D8BFF);
    pub const P600: Color = Color::from_packed_rgba(0x546E7AFF);
    pub const P700: Color = Color::from_packed_rgba(0x455A64FF);
    pub const P800: Color = Color::from_packed_rgba(0x37474FFF);
    pub const P900: Color = Color::from_packed_rgba(0x263238FF);

    pub(super) const SHADES: &[(&str, Color)] = &[
        ("P50", P50), ("P100", P100), ("P200", P200), ("P300", P300), ("P400", P400),
        ("P500", P500), ("P600", P600), ("P700", P700), ("P800", P800), ("P900", P900),
    ];
}

/// Canonical family names accepted by [`lookup`].
pub const FAMILIES: [&str; 19] = [
    "red", "pink", "purple", "deeppurple", "indigo", "blue", "lightblue", "cyan", "teal",
    "green", "lightgreen", "lime", "yellow", "amber", "orange", "deeporange", "brown", "gray",
    "bluegray",
];

const FAMILY_TABLE: [(&str, &[(&str, Color)]); 19] = [
    ("red", red::SHADES),
    ("pink", pink::SHADES),
    ("purple", purple::SHADES),
    ("deeppurple", deep_purple::SHADES),
    ("indigo", indigo::SHADES),
    ("blue", blue::SHADES),
    ("lightblue", light_blue::SHADES),
    ("cyan", cyan::SHADES),
    ("teal", teal::SHADES),
    ("green", green::SHADES),
    ("lightgreen", light_green::SHADES),
    ("lime", lime::SHADES),
    ("yellow", yellow::SHADES),
    ("amber", amber::SHADES),
    ("orange", orange::SHADES),
    ("deeporange", deep_orange::SHADES),
    ("brown", brown::SHADES),
    ("gray", gray::SHADES),
    ("bluegray", blue_gray::SHADES),
];

static CATALOG: OnceLock<FxHashMap<String, Color>> = OnceLock::new();

fn catalog() -> &'static FxHashMap<String, Color> {
    CATALOG.get_or_init(|| {
        let mut map = FxHashMap::default();
        for (family, shades) in FAMILY_TABLE {
            for &(shade, color) in shades {
                map.insert(format!("{family}.{shade}"), color);
            }
        }
        map
    })
}

/// Look up a palette color by family name and shade label.
///
/// Family matching ignores case and `-`/`_`/space separators, so
/// `"light blue"`, `"light_blue"` and `"LightBlue"` all name the same
/// family. Shade labels ignore case and accept the bare number form
/// (`"500"` for `"P500"`).
pub fn lookup(family: &str, shade: &str) -> Option<Color> {
    let family: String = family
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let mut shade = shade.trim().to_ascii_uppercase();
    if shade.starts_with(|c: char| c.is_ascii_digit()) {
        shade.insert(0, 'P');
    }
    catalog().get(&format!("{family}.{shade}")).copied()
}
